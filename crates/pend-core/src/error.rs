use thiserror::Error;

pub type PendResult<T> = Result<T, PendError>;

/// Foundation-layer errors: a number that should not have been what it was.
#[derive(Error, Debug)]
pub enum PendError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive (got {value})")]
    NonPositive { what: &'static str, value: f64 },
}
