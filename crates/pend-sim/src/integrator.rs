//! Fixed-step time integrators.

use crate::error::SimResult;
use crate::model::DynamicsModel;

/// Integrator selection for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Classical 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, 1 rhs call per step).
    ForwardEuler,
}

/// Trait for single-step time integrators.
pub trait Integrator {
    /// Advance the state across one step of width dt.
    fn step<M: DynamicsModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: DynamicsModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let half = 0.5 * dt;

        let k1 = model.rhs(t, x)?;
        let k2 = model.rhs(t + half, &model.add(x, &model.scale(&k1, half)))?;
        let k3 = model.rhs(t + half, &model.add(x, &model.scale(&k2, half)))?;
        let k4 = model.rhs(t + dt, &model.add(x, &model.scale(&k3, dt)))?;

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let weighted = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );
        Ok(model.add(x, &model.scale(&weighted, dt / 6.0)))
    }
}

/// Forward Euler (explicit, 1st order).
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: DynamicsModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let xdot = model.rhs(t, x)?;
        Ok(model.add(x, &model.scale(&xdot, dt)))
    }
}
