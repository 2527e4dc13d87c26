//! Internationalization (i18n) module for the console UI.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages
//! - `language`: The `Language` value exchanged with storage and consumers
//! - `strings`: Localized UI strings per language
//! - `engine`: Localization engine holding the active locale
//! - `validator`: Checks for language values read back from storage
//! - `metrics`: Counters for language changes and fallbacks
//!
//! # Example
//!
//! ```rust,ignore
//! use ad_console::i18n::{Language, LanguageRegistry};
//!
//! let default = Language::default_language();
//! let nepali = Language::from_code("ne")?;
//! let languages = LanguageRegistry::get().list_all();
//! ```

mod engine;
mod language;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use engine::{LocalizationEngine, Translator};
pub use language::Language;
pub use metrics::{LanguageMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, ENGLISH_STRINGS, NEPALI_STRINGS};
pub use validator::{PersistedLanguageValidator, ValidationReport};
