//! Error types for the stepping engine
//!
//! Only [`EngineError::InvalidInput`] can be triggered from the UI during
//! normal use. A stopped run is not an error; see
//! [`Halted`](super::cancel::Halted) and `RunState::Cancelled`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Search value did not contain a number; the run never started
    #[error("Please enter a valid number to search")]
    InvalidInput { input: String },

    /// Algorithm id not in the catalog
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// Engine configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The OS refused to start the run's worker thread
    #[error("Failed to spawn run worker: {0}")]
    Spawn(#[from] std::io::Error),
}
