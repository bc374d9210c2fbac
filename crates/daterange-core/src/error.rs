//! Error types for the range rendering library.

use thiserror::Error;

/// Comprehensive error type for all range rendering operations.
#[derive(Error, Debug)]
pub enum RangeError {
    /// A style profile is missing a pattern entry, an unknown profile name
    /// was requested, or a timezone identifier could not be resolved
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The pattern-formatting service rejected a pattern or could not
    /// represent an instant
    #[error("Format error for pattern '{pattern}': {source}")]
    Format {
        pattern: String,
        #[source]
        source: jiff::Error,
    },
    /// Serialization/deserialization errors for externally supplied profiles
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl RangeError {
    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        RangeError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a format error for a pattern with its underlying cause.
    pub fn format(pattern: impl Into<String>, source: jiff::Error) -> Self {
        RangeError::Format {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Result type alias for range rendering operations
pub type Result<T> = std::result::Result<T, RangeError>;
