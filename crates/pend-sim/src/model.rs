//! DynamicsModel trait for pluggable continuous-time systems.

use crate::error::SimResult;

/// Trait for systems integrated by the fixed-step integrators.
///
/// An implementor provides:
/// - a state type (Clone, snapshotted once per grid sample)
/// - the state derivative: x_dot = f(t, x)
/// - state arithmetic (add, scale) used by the integrator stages
pub trait DynamicsModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Compute the state derivative dx/dt = f(t, x).
    ///
    /// Takes `&self`: the law itself must be pure. `t` is part of the
    /// calling convention even for time-invariant systems.
    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = factor * a.
    fn scale(&self, a: &Self::State, factor: f64) -> Self::State;
}
