//! Error types for simulation operations.

use pend_core::PendError;
use thiserror::Error;

/// Errors encountered while building or advancing a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Integration failure: {message}")]
    IntegrationFailure { message: String },

    #[error("Frame index out of range: index={index}, len={len}")]
    FrameIndexOutOfRange { index: usize, len: usize },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<PendError> for SimError {
    fn from(e: PendError) -> Self {
        // Everything the foundation layer rejects reaches the session as a
        // bad parameter or initial condition.
        match e {
            PendError::NonFinite { what, .. } | PendError::NonPositive { what, .. } => {
                SimError::InvalidParameter { what }
            }
        }
    }
}
