//! Simulation session: window-based integration with continuity across
//! animation cycles.

use tracing::{debug, warn};

use crate::dynamics::{Pendulum, PendulumParams, PendulumState, ensure_state_finite};
use crate::error::{SimError, SimResult};
use crate::grid::TimeGrid;
use crate::integrator::IntegratorKind;
use crate::model::DynamicsModel;
use crate::projector::{Frame, FrameProjector};
use crate::window::integrate_window;

/// Options for a simulation session.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Samples per integration window (grid points, at least 2)
    pub samples_per_window: usize,
    /// Integrator used for every window
    pub integrator: IntegratorKind,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            samples_per_window: 500,
            integrator: IntegratorKind::default(),
        }
    }
}

/// A running pendulum simulation.
///
/// A session always holds a complete, finite trajectory for the current
/// window: construction integrates the first window, so there is no
/// "empty" session to query. `rearm` starts the next window from the
/// current window's final state, which keeps the animated motion
/// continuous across cycle boundaries even though each window is computed
/// independently.
///
/// Generic over the dynamics so tests can substitute a misbehaving model;
/// `Pendulum` is the shipped one.
pub struct SimulationSession<D: DynamicsModel<State = PendulumState> = Pendulum> {
    dynamics: D,
    params: PendulumParams,
    options: SessionOptions,
    grid: TimeGrid,
    trajectory: Vec<PendulumState>,
    windows_completed: u64,
}

impl<D: DynamicsModel<State = PendulumState>> std::fmt::Debug for SimulationSession<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The dynamics `D` need not be `Debug`, so it is omitted here.
        f.debug_struct("SimulationSession")
            .field("params", &self.params)
            .field("options", &self.options)
            .field("grid", &self.grid)
            .field("trajectory", &self.trajectory)
            .field("windows_completed", &self.windows_completed)
            .finish_non_exhaustive()
    }
}

impl SimulationSession<Pendulum> {
    /// Start a session with the standard pendulum dynamics.
    pub fn start(
        params: PendulumParams,
        initial: PendulumState,
        options: SessionOptions,
    ) -> SimResult<Self> {
        Self::start_with(Pendulum::new(params), params, initial, options)
    }
}

impl<D: DynamicsModel<State = PendulumState>> SimulationSession<D> {
    /// Start a session with caller-supplied dynamics.
    ///
    /// Validates the initial state, builds the window grid over one natural
    /// period of `params`, and integrates the first window. The returned
    /// session is ready for frame queries.
    pub fn start_with(
        dynamics: D,
        params: PendulumParams,
        initial: PendulumState,
        options: SessionOptions,
    ) -> SimResult<Self> {
        ensure_state_finite(&initial)?;

        let grid = TimeGrid::over_period(params.natural_period_s(), options.samples_per_window)?;
        let trajectory = solve_window(&dynamics, options.integrator, &grid, initial)?;

        debug!(
            samples = grid.len(),
            period_s = grid.span_s(),
            "session armed"
        );

        Ok(Self {
            dynamics,
            params,
            options,
            grid,
            trajectory,
            windows_completed: 0,
        })
    }

    /// Start the next window from the current window's final state.
    ///
    /// Called once per animation cycle, when the frame index would wrap
    /// past the end of the current trajectory. The stored trajectory is
    /// replaced only after the fresh window has been fully integrated and
    /// checked; on failure the previous trajectory stays in place and
    /// remains valid for frame queries.
    pub fn rearm(&mut self) -> SimResult<()> {
        // The seed is the final sample itself, bit for bit. Seeding from
        // any other index (or swapping theta/omega) shows up as a visible
        // jump at the cycle boundary.
        let seed = self.trajectory[self.trajectory.len() - 1];
        match solve_window(&self.dynamics, self.options.integrator, &self.grid, seed) {
            Ok(fresh) => {
                self.trajectory = fresh;
                self.windows_completed += 1;
                debug!(
                    windows = self.windows_completed,
                    theta_rad = seed.theta_rad,
                    omega_rad_s = seed.omega_rad_s,
                    "window rearmed"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "rearm failed; keeping previous window");
                Err(e)
            }
        }
    }

    /// State at a frame index of the current window.
    ///
    /// An out-of-range index means the driver and the session disagree
    /// about the window length; that is a bug upstream, so it fails loudly
    /// instead of wrapping.
    pub fn state_at(&self, frame: usize) -> SimResult<PendulumState> {
        self.trajectory
            .get(frame)
            .copied()
            .ok_or(SimError::FrameIndexOutOfRange {
                index: frame,
                len: self.trajectory.len(),
            })
    }

    /// Projected rod and bob coordinates for a frame index.
    pub fn get_frame(&self, frame: usize, projector: &FrameProjector) -> SimResult<Frame> {
        let state = self.state_at(frame)?;
        Ok(projector.frame(state.theta_rad))
    }

    pub fn frame_count(&self) -> usize {
        self.trajectory.len()
    }

    pub fn trajectory(&self) -> &[PendulumState] {
        &self.trajectory
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn dynamics(&self) -> &D {
        &self.dynamics
    }

    /// Number of windows completed since the session started.
    pub fn windows_completed(&self) -> u64 {
        self.windows_completed
    }
}

/// Integrate one window and reject any non-finite result, so a session
/// never swaps garbage in over a valid trajectory.
fn solve_window<D: DynamicsModel<State = PendulumState>>(
    dynamics: &D,
    kind: IntegratorKind,
    grid: &TimeGrid,
    seed: PendulumState,
) -> SimResult<Vec<PendulumState>> {
    let states = integrate_window(dynamics, kind, grid, seed)?;

    for (i, state) in states.iter().enumerate() {
        if !state.is_finite() {
            return Err(SimError::IntegrationFailure {
                message: format!(
                    "non-finite state at sample {i}: theta={}, omega={}",
                    state.theta_rad, state.omega_rad_s
                ),
            });
        }
    }

    Ok(states)
}
