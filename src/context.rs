//! Provider/consumer access to the language preference.
//!
//! A `LanguageProvider` owns a store and makes it reachable from
//! `use_language()` for the duration of `scope`. Scopes nest (the innermost
//! provider wins) and are per thread. Outside any scope `use_language()`
//! fails instead of handing out a default.

use crate::error::LanguageError;
use crate::i18n::{Language, LanguageStrings};
use crate::preference::LanguagePreferenceStore;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static PROVIDER_STACK: RefCell<Vec<LanguageContext>> = const { RefCell::new(Vec::new()) };
}

/// Consumer handle: read-only snapshots plus the `set_language` capability
#[derive(Clone)]
pub struct LanguageContext {
    store: Rc<RefCell<LanguagePreferenceStore>>,
}

impl LanguageContext {
    /// Snapshot of the active language
    pub fn language(&self) -> Language {
        self.store.borrow().current_language()
    }

    pub fn available_languages(&self) -> Vec<Language> {
        self.store.borrow().available_languages()
    }

    pub fn set_language(&self, language: &Language) -> Result<(), LanguageError> {
        self.store.borrow_mut().set_language(language)
    }

    /// UI strings of the engine's active locale
    pub fn strings(&self) -> &'static LanguageStrings {
        self.store.borrow().engine().strings()
    }

    /// Current document `lang` attribute
    pub fn document_lang(&self) -> Option<String> {
        self.store.borrow().document().lang()
    }
}

pub struct LanguageProvider {
    context: LanguageContext,
}

impl LanguageProvider {
    pub fn new(store: LanguagePreferenceStore) -> Self {
        Self {
            context: LanguageContext {
                store: Rc::new(RefCell::new(store)),
            },
        }
    }

    /// Context for code that passes it down explicitly
    pub fn context(&self) -> LanguageContext {
        self.context.clone()
    }

    /// Run `f` with this provider as the innermost scope
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        PROVIDER_STACK.with(|stack| stack.borrow_mut().push(self.context.clone()));
        let _guard = ScopeGuard;
        f()
    }
}

/// RAII guard: pops the provider even if `f` panics
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        PROVIDER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Language context of the innermost enclosing provider
pub fn use_language() -> Result<LanguageContext, LanguageError> {
    PROVIDER_STACK
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(LanguageError::OutsideProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::i18n::Translator;
    use crate::storage::{KeyValueStore, MemoryStore};
    use serial_test::serial;

    fn provider_with(storage: MemoryStore) -> LanguageProvider {
        LanguageProvider::new(LanguagePreferenceStore::init(
            storage,
            Translator::new(),
            Document::new(),
        ))
    }

    #[test]
    fn test_use_language_outside_provider_fails() {
        assert!(matches!(
            use_language(),
            Err(LanguageError::OutsideProvider)
        ));
    }

    #[test]
    #[serial]
    fn test_use_language_inside_provider() {
        let provider = provider_with(MemoryStore::new());

        let code = provider.scope(|| use_language().map(|ctx| ctx.language().code));

        assert_eq!(code.unwrap(), "en");
    }

    #[test]
    #[serial]
    fn test_scope_is_popped_after_return() {
        let provider = provider_with(MemoryStore::new());
        provider.scope(|| ());

        assert!(use_language().is_err());
    }

    #[test]
    #[serial]
    fn test_scope_is_popped_after_panic() {
        let provider = provider_with(MemoryStore::new());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            provider.scope(|| panic!("render failed"))
        }));

        assert!(result.is_err());
        assert!(use_language().is_err());
    }

    #[test]
    #[serial]
    fn test_nested_provider_shadows_outer() {
        let outer = provider_with(MemoryStore::new());
        let mut stored = MemoryStore::new();
        stored
            .set_item(
                "language",
                r#"{"code":"ne","name":"Nepali","nativeName":"नेपाली"}"#,
            )
            .unwrap();
        let inner = provider_with(stored);

        let codes = outer.scope(|| {
            let inner_code = inner.scope(|| use_language().unwrap().language().code);
            let outer_code = use_language().unwrap().language().code;
            (inner_code, outer_code)
        });

        assert_eq!(codes, ("ne".to_string(), "en".to_string()));
    }

    #[test]
    #[serial]
    fn test_set_language_through_consumer_visible_to_provider() {
        let provider = provider_with(MemoryStore::new());

        provider.scope(|| {
            let ctx = use_language().unwrap();
            ctx.set_language(&Language::from_code("ne").unwrap()).unwrap();
        });

        let ctx = provider.context();
        assert_eq!(ctx.language().code, "ne");
        assert_eq!(ctx.document_lang().as_deref(), Some("ne"));
        assert_eq!(ctx.strings().language_label, "भाषा");
    }
}
