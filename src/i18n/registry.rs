//! Language registry: Single source of truth for all supported UI languages.
//!
//! The registry is a fixed, process-wide table initialized once on first access.
//! Declaration order matters: the first entry is the default language used when
//! no valid preference has been persisted.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, NEPALI_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ne")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Nepali")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "नेपाली")
    pub native_name: &'static str,

    /// Localized UI strings for this language
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in declaration order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration (the first declared entry).
    ///
    /// # Panics
    /// Panics if the registry is empty, which indicates a build-time
    /// configuration error.
    pub fn default_language(&self) -> &LanguageConfig {
        self.languages
            .first()
            .expect("Language registry must declare at least one language")
    }
}

/// Default language configurations.
///
/// English first (default), then Nepali.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "ne",
            name: "Nepali",
            native_name: "नेपाली",
            strings: &NEPALI_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
    }

    #[test]
    fn test_get_by_code_nepali() {
        let config = LanguageRegistry::get()
            .get_by_code("ne")
            .expect("Nepali should be registered");

        assert_eq!(config.name, "Nepali");
        assert_eq!(config.native_name, "नेपाली");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
        assert!(LanguageRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_keeps_declaration_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "ne"]);
    }

    #[test]
    fn test_codes_are_unique() {
        let all = LanguageRegistry::get().list_all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_default_language_is_first_entry() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.default_language().code, registry.list_all()[0].code);
        assert_eq!(registry.default_language().code, "en");
    }
}
