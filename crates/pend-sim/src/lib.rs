//! Window-based pendulum simulation.
//!
//! Provides:
//! - the gravity-pendulum equation of motion behind a pluggable dynamics trait
//! - fixed-step RK4 and forward Euler integrators
//! - a time grid spanning one natural period per window
//! - a simulation session that re-arms each window from the previous window's
//!   final state, keeping the animated motion continuous across cycles
//! - projection from angles to display coordinates

pub mod dynamics;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod model;
pub mod projector;
pub mod session;
pub mod window;

// Re-exports for public API
pub use dynamics::{Pendulum, PendulumParams, PendulumState};
pub use error::{SimError, SimResult};
pub use grid::TimeGrid;
pub use integrator::{ForwardEuler, Integrator, IntegratorKind, RK4};
pub use model::DynamicsModel;
pub use projector::{Frame, FrameProjector};
pub use session::{SessionOptions, SimulationSession};
pub use window::integrate_window;
