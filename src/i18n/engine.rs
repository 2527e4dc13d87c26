//! Localization engine: holds the active locale used to pick UI strings.

use crate::i18n::{LanguageRegistry, LanguageStrings};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// The capability the preference store drives when the language changes.
pub trait LocalizationEngine {
    /// Switch the active locale. Never fails; unknown codes are accepted.
    fn change_language(&mut self, code: &str);

    /// Code of the active locale.
    fn active_language(&self) -> String;

    /// Strings for the active locale, falling back to the default language
    /// when the active code has no catalog.
    fn strings(&self) -> &'static LanguageStrings {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(&self.active_language())
            .unwrap_or_else(|| registry.default_language())
            .strings
    }
}

/// Catalog-backed engine.
///
/// Clones share the active locale, so the page shell and the preference store
/// can hold the same engine.
#[derive(Debug, Clone)]
pub struct Translator {
    active: Rc<RefCell<String>>,
}

impl Translator {
    /// Create an engine already initialized with the default locale
    pub fn new() -> Self {
        Self {
            active: Rc::new(RefCell::new(
                LanguageRegistry::get().default_language().code.to_string(),
            )),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationEngine for Translator {
    fn change_language(&mut self, code: &str) {
        debug!("Localization engine switching to '{}'", code);
        *self.active.borrow_mut() = code.to_string();
    }

    fn active_language(&self) -> String {
        self.active.borrow().clone()
    }
}
