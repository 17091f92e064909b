//! pend-core: stable foundation for pendsim.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PendError, PendResult};
pub use numeric::*;
pub use units::*;
