//! Validation of language values read back from persistent storage.
//!
//! Persisted preferences are untyped text written by earlier sessions (or by
//! hand). After serde has checked the shape, this validator checks content:
//! a well-formed code, non-empty names, and registry membership.

use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a persisted language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the value unusable
    pub errors: Vec<String>,

    /// Problems that are repaired by resolving against the registry
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validator for persisted language values.
pub struct PersistedLanguageValidator;

// ISO 639 code with optional region, e.g. "en", "ne", "pt-BR"
static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl PersistedLanguageValidator {
    /// Validate a language deserialized from storage.
    ///
    /// Errors:
    /// - code is not a language tag
    /// - name or native name is blank
    /// - code is not in the registry
    ///
    /// Warnings:
    /// - display names differ from the registry entry for the code
    pub fn validate(language: &Language) -> ValidationReport {
        let mut report = ValidationReport::default();

        if !Self::is_valid_code(&language.code) {
            report
                .errors
                .push(format!("Malformed language code: {:?}", language.code));
        }

        if language.name.trim().is_empty() {
            report.errors.push("Language name is empty".to_string());
        }

        if language.native_name.trim().is_empty() {
            report.errors.push("Native language name is empty".to_string());
        }

        match language.config() {
            None => report
                .errors
                .push(format!("Unsupported language code: {:?}", language.code)),
            Some(config) => {
                if config.name != language.name || config.native_name != language.native_name {
                    report.warnings.push(format!(
                        "Stored names ({:?}, {:?}) differ from registry ({:?}, {:?})",
                        language.name, language.native_name, config.name, config.native_name
                    ));
                }
            }
        }

        report
    }

    /// Check the shape of a language code
    fn is_valid_code(code: &str) -> bool {
        let regex =
            CODE_REGEX.get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").unwrap());
        regex.is_match(code)
    }
}
