//! Error types for statistics acquisition.
//!
//! Acquisition errors never cross the provider boundary: the provider folds
//! them into the fallback dataset. Only `ConfigError` (a source cannot be
//! built) and `Output` (the CLI cannot write) reach callers.

use thiserror::Error;

/// The unified error type for the ruralcare crates.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The request could not be sent or its body could not be read.
    #[error("transport error: {reason}")]
    Transport { reason: String },

    /// The statistics endpoint answered with a non-success status.
    #[error("indicator endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The body was not JSON, or not the expected `[page, observations]` array.
    #[error("malformed indicator payload: {reason}")]
    MalformedPayload { reason: String },

    /// Every observation in the sequence had a null value.
    #[error("no non-null observation for indicator '{indicator}'")]
    NoObservation { indicator: String },

    /// A source configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Rendered output could not be written.
    #[error("output error: {reason}")]
    Output { reason: String },
}

impl StatsError {
    /// True for the errors the provider absorbs into the fallback dataset.
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(
            self,
            StatsError::Transport { .. }
                | StatsError::HttpStatus { .. }
                | StatsError::MalformedPayload { .. }
                | StatsError::NoObservation { .. }
        )
    }
}

/// Convenience alias used throughout the ruralcare crates.
pub type StatsResult<T> = Result<T, StatsError>;
