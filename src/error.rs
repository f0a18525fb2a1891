//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Settings layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum SettingsError {
    /// Input text is not a syntactically valid absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Preferences storage error (fetch or save)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error (store implementations that persist documents)
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SettingsError {
    /// Whether this is expected behavior (user input errors etc.), used for
    /// log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }
}

/// Settings layer Result type alias
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
