use crate::core::io::dcd::DcdError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to create simulation from interchange: {0}")]
    Initialization(String),

    #[error("Report interval must be a positive number of steps, got {interval}")]
    InvalidInterval { interval: u64 },

    #[error("Cannot open trajectory file '{path}': {source}", path = path.display())]
    TrajectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trajectory write failed: {source}")]
    Trajectory {
        #[from]
        source: DcdError,
    },

    /// An error raised by the external simulation engine, passed through untouched.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl EngineError {
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}
