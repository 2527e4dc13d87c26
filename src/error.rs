use thiserror::Error;

/// Errors raised by the language preference subsystem
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("Unsupported language code: '{code}'")]
    Unsupported { code: String },

    #[error("use_language() must be called inside a LanguageProvider scope")]
    OutsideProvider,
}

/// Persistent key-value store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
