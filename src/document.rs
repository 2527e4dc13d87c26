//! Host document model: the page-level `lang` attribute.

use std::cell::RefCell;
use std::rc::Rc;

/// Owner of the document-wide language attribute
pub trait DocumentHost {
    fn set_lang(&mut self, code: &str);

    /// Current attribute value, `None` until first set
    fn lang(&self) -> Option<String>;
}

/// In-process document; clones share the same attribute
#[derive(Debug, Clone, Default)]
pub struct Document {
    lang: Rc<RefCell<Option<String>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentHost for Document {
    fn set_lang(&mut self, code: &str) {
        *self.lang.borrow_mut() = Some(code.to_string());
    }

    fn lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }
}
