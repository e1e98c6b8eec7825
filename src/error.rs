//! Centralized error types for the simulation core.
//!
//! Errors only arise at construction time: per-tick navigation has no
//! recoverable failures (stuck agents and rejected moves self-heal and are
//! reported through `tracing` instead).

use crate::maze::parser::LayoutError;

/// Main error type for the simulation core.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
