//! Error types for the lift_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lift_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Commit attempted on a builder with no exercises
    #[error("cannot save a workout with no exercises")]
    EmptyWorkout,

    /// Operation would violate a structural invariant
    /// (e.g. removing an exercise's last remaining set)
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
