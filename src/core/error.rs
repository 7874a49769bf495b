//! Error types for the seashore crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid coefficient `{name}` = {value}: {reason}")]
    InvalidCoefficient {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Sync error: {0}")]
    Sync(String),
}

impl Error {
    pub(crate) fn coefficient(name: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        Self::InvalidCoefficient {
            name,
            value: value.into(),
            reason,
        }
    }
}
