//! Error types for tempo.

use thiserror::Error;

/// Errors raised by the workout session engine.
///
/// Both variants indicate a sequencing problem on the caller's side rather
/// than a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A session was started with no exercises.
    #[error("session has no exercises")]
    EmptySession,

    /// A session operation was requested but no session is active.
    #[error("no active workout session")]
    NoActiveSession,
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum TempoError {
    /// Configuration or filesystem layout problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// `SQLite` failure.
    #[error("database error: {0}")]
    Database(String),

    /// A requested item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// User supplied data that cannot be used.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Session engine error.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Terminal setup or drawing failure.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
