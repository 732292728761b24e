//! Error types for JSON rescue parsing.

use thiserror::Error;

/// Errors that can occur while rescuing a JSON payload from text.
#[derive(Debug, Error)]
pub enum RescueError {
    /// No candidate substring, after repair, decoded as JSON and validated
    /// against the schema.
    #[error("no candidate in the input decoded and validated against the schema")]
    NoMatch,
}

/// Result type for JSON rescue operations.
pub type Result<T> = std::result::Result<T, RescueError>;
