//! Language type: the value exchanged between the preference store, its
//! consumers, and persistent storage.
//!
//! Unlike `LanguageConfig`, a `Language` owns its fields so it can be
//! deserialized from storage and built by callers. Membership in the registry
//! is checked where it matters (`is_supported`, `resolve`), not at construction.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A selectable UI language.
///
/// Serialized as `{"code": .., "name": .., "nativeName": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ne")
    pub code: String,

    /// Name in English (e.g., "Nepali")
    pub name: String,

    /// Name in the language's own script (e.g., "नेपाली")
    pub native_name: String,
}

impl Language {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            native_name: native_name.into(),
        }
    }

    /// Create a Language from a registered language code.
    ///
    /// # Example
    /// ```ignore
    /// let nepali = Language::from_code("ne")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language::from(config)),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The default language (first registry entry).
    pub fn default_language() -> Language {
        Language::from(LanguageRegistry::get().default_language())
    }

    /// Registry configuration for this language's code, if registered.
    pub fn config(&self) -> Option<&'static LanguageConfig> {
        LanguageRegistry::get().get_by_code(&self.code)
    }

    /// Whether this exact language (code, name and native name) is registered.
    pub fn is_supported(&self) -> bool {
        self.config()
            .map(|config| Language::from(config) == *self)
            .unwrap_or(false)
    }

    /// Canonical registry entry for this language's code.
    ///
    /// Used when reading back persisted values whose display names may be stale.
    pub fn resolve(&self) -> Option<Language> {
        self.config().map(Language::from)
    }
}

impl From<&LanguageConfig> for Language {
    fn from(config: &LanguageConfig) -> Self {
        Language::new(config.code, config.name, config.native_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language.code, "en");
        assert_eq!(language.name, "English");
        assert_eq!(language.native_name, "English");
    }

    #[test]
    fn test_from_code_nepali() {
        let language = Language::from_code("ne").expect("Should succeed");
        assert_eq!(language.name, "Nepali");
        assert_eq!(language.native_name, "नेपाली");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default_language().code, "en");
    }

    #[test]
    fn test_serializes_native_name_in_camel_case() {
        let json = serde_json::to_string(&Language::from_code("ne").unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"code":"ne","name":"Nepali","nativeName":"नेपाली"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result: Result<Language, _> = serde_json::from_str(r#"{"code":"en","name":"English"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_supported_requires_matching_names() {
        assert!(Language::new("ne", "Nepali", "नेपाली").is_supported());
        assert!(!Language::new("ne", "Nepalese", "नेपाली").is_supported());
        assert!(!Language::new("fr", "French", "Français").is_supported());
    }

    #[test]
    fn test_resolve_uses_registry_names() {
        let stale = Language::new("ne", "Nepalese", "Nepali");
        assert_eq!(stale.resolve(), Some(Language::from_code("ne").unwrap()));
        assert_eq!(Language::new("xx", "X", "X").resolve(), None);
    }
}
