//! Language preference store: the single source of truth for the active UI
//! language.
//!
//! On initialization the store reads the persisted preference (falling back to
//! the default language), and every accepted `set_language` call is applied in
//! a fixed order: in-memory value, localization engine, persistent storage,
//! document `lang` attribute.

use crate::document::DocumentHost;
use crate::error::{LanguageError, StorageError};
use crate::i18n::{
    Language, LanguageMetrics, LanguageRegistry, LocalizationEngine, PersistedLanguageValidator,
};
use crate::storage::KeyValueStore;
use tracing::{debug, info, warn};

/// Storage key holding the serialized language preference
pub const LANGUAGE_STORAGE_KEY: &str = "language";

pub struct LanguagePreferenceStore {
    current: Language,
    storage: Box<dyn KeyValueStore>,
    engine: Box<dyn LocalizationEngine>,
    document: Box<dyn DocumentHost>,
}

impl LanguagePreferenceStore {
    /// Initialize from persisted state.
    ///
    /// Adopts the stored language when it is present and valid, otherwise the
    /// default language. Either way the localization engine is switched to the
    /// adopted code. Storage and the document attribute are left untouched.
    pub fn init(
        storage: impl KeyValueStore + 'static,
        engine: impl LocalizationEngine + 'static,
        document: impl DocumentHost + 'static,
    ) -> Self {
        let storage: Box<dyn KeyValueStore> = Box::new(storage);
        let mut engine: Box<dyn LocalizationEngine> = Box::new(engine);

        let current = load_persisted(storage.as_ref()).unwrap_or_else(|| {
            debug!("No usable language preference stored, using default");
            Language::default_language()
        });

        engine.change_language(&current.code);
        info!("Language preference initialized: {}", current.code);

        Self {
            current,
            storage,
            engine,
            document: Box::new(document),
        }
    }

    /// The active language. No side effects.
    pub fn current_language(&self) -> Language {
        self.current.clone()
    }

    /// All supported languages, in declaration order.
    pub fn available_languages(&self) -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(Language::from)
            .collect()
    }

    /// Switch the active language.
    ///
    /// Unsupported languages are rejected before any side effect. Membership
    /// needs the code and both display names to match the registry entry
    /// exactly; use `Language::from_code` or `available_languages` to get one.
    /// (Stored values with stale names are repaired on load instead.)
    /// A failed storage write is logged and counted; the remaining steps still run.
    pub fn set_language(&mut self, language: &Language) -> Result<(), LanguageError> {
        if !language.is_supported() {
            LanguageMetrics::global().record_rejection();
            warn!("Rejected unsupported language: {:?}", language);
            return Err(LanguageError::Unsupported {
                code: language.code.clone(),
            });
        }

        self.current = language.clone();
        self.engine.change_language(&language.code);

        if let Err(e) = self.persist(language) {
            LanguageMetrics::global().record_storage_failure();
            warn!("Failed to persist language preference: {}", e);
        }

        self.document.set_lang(&language.code);

        LanguageMetrics::global().record_change();
        info!("Language changed to {}", language.code);
        Ok(())
    }

    pub fn engine(&self) -> &dyn LocalizationEngine {
        self.engine.as_ref()
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn document(&self) -> &dyn DocumentHost {
        self.document.as_ref()
    }

    fn persist(&mut self, language: &Language) -> Result<(), StorageError> {
        let json = serde_json::to_string(language)?;
        self.storage.set_item(LANGUAGE_STORAGE_KEY, &json)
    }
}

/// Read and validate the stored preference.
///
/// Returns `None` when nothing usable is stored; every rejected value is
/// logged and counted as a fallback.
fn load_persisted(storage: &dyn KeyValueStore) -> Option<Language> {
    let raw = match storage.get_item(LANGUAGE_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            LanguageMetrics::global().record_fallback();
            warn!("Failed to read language preference: {}", e);
            return None;
        }
    };

    let stored: Language = match serde_json::from_str(&raw) {
        Ok(language) => language,
        Err(e) => {
            LanguageMetrics::global().record_fallback();
            warn!("Malformed language preference {:?}: {}", raw, e);
            return None;
        }
    };

    let report = PersistedLanguageValidator::validate(&stored);
    if report.has_errors() {
        LanguageMetrics::global().record_fallback();
        warn!("Invalid language preference: {}", report.errors.join("; "));
        return None;
    }
    for warning in &report.warnings {
        warn!("Language preference: {}", warning);
    }

    stored.resolve()
}
