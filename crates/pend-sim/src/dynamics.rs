//! The simple gravity pendulum: parameters, state, equation of motion.

use pend_core::{Accel, AngVel, Angle, Length, ensure_finite, ensure_positive};

use crate::error::SimResult;
use crate::model::DynamicsModel;

/// Instantaneous pendulum state: angle and angular velocity.
///
/// The angle is measured from the downward vertical and is not wrapped to
/// [-pi, pi]; a pendulum that has gone over the top keeps counting turns.
/// States are produced fresh by every integration step, never mutated in
/// place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumState {
    /// Angle (radians)
    pub theta_rad: f64,
    /// Angular velocity (radians/second)
    pub omega_rad_s: f64,
}

impl PendulumState {
    /// Build a state from unit-checked quantities.
    pub fn new(theta: Angle, omega: AngVel) -> Self {
        use uom::si::angle::radian;
        use uom::si::angular_velocity::radian_per_second;
        Self {
            theta_rad: theta.get::<radian>(),
            omega_rad_s: omega.get::<radian_per_second>(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.theta_rad.is_finite() && self.omega_rad_s.is_finite()
    }
}

/// Physical parameters, fixed for a session's lifetime.
///
/// Construction validates both values; a `PendulumParams` in hand is always
/// usable (L > 0, g > 0, both finite).
#[derive(Clone, Copy, Debug)]
pub struct PendulumParams {
    length_m: f64,
    gravity_mps2: f64,
}

impl PendulumParams {
    pub fn new(length: Length, gravity: Accel) -> SimResult<Self> {
        use uom::si::acceleration::meter_per_second_squared;
        use uom::si::length::meter;

        let length_m = ensure_positive(length.get::<meter>(), "rod length")?;
        let gravity_mps2 = ensure_positive(
            gravity.get::<meter_per_second_squared>(),
            "gravitational acceleration",
        )?;
        Ok(Self {
            length_m,
            gravity_mps2,
        })
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    /// Natural period T = 2*pi*sqrt(L/g), the span of one integration window.
    pub fn natural_period_s(&self) -> f64 {
        2.0 * std::f64::consts::PI * (self.length_m / self.gravity_mps2).sqrt()
    }
}

/// The undamped gravity pendulum as a first-order system in (theta, omega).
#[derive(Clone, Copy, Debug)]
pub struct Pendulum {
    params: PendulumParams,
}

impl Pendulum {
    pub fn new(params: PendulumParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    /// Specific mechanical energy E / (m L^2) = omega^2/2 - (g/L) cos(theta).
    ///
    /// Conserved by the continuous dynamics; drift in this quantity measures
    /// integration error.
    pub fn specific_energy(&self, state: &PendulumState) -> f64 {
        let g_over_l = self.params.gravity_mps2 / self.params.length_m;
        0.5 * state.omega_rad_s * state.omega_rad_s - g_over_l * state.theta_rad.cos()
    }
}

impl DynamicsModel for Pendulum {
    type State = PendulumState;

    fn rhs(&self, _t: f64, x: &PendulumState) -> SimResult<PendulumState> {
        let g_over_l = self.params.gravity_mps2 / self.params.length_m;
        Ok(PendulumState {
            theta_rad: x.omega_rad_s,
            omega_rad_s: -g_over_l * x.theta_rad.sin(),
        })
    }

    fn add(&self, a: &PendulumState, b: &PendulumState) -> PendulumState {
        PendulumState {
            theta_rad: a.theta_rad + b.theta_rad,
            omega_rad_s: a.omega_rad_s + b.omega_rad_s,
        }
    }

    fn scale(&self, a: &PendulumState, factor: f64) -> PendulumState {
        PendulumState {
            theta_rad: factor * a.theta_rad,
            omega_rad_s: factor * a.omega_rad_s,
        }
    }
}

/// Validate an initial condition before seeding a window with it.
pub(crate) fn ensure_state_finite(state: &PendulumState) -> SimResult<()> {
    ensure_finite(state.theta_rad, "initial angle")?;
    ensure_finite(state.omega_rad_s, "initial angular velocity")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pend_core::{Tolerances, m, mps2, nearly_equal, rad, radps};

    fn demo_params() -> PendulumParams {
        PendulumParams::new(m(0.5), mps2(100.0)).unwrap()
    }

    #[test]
    fn rhs_matches_equation_of_motion() {
        let pendulum = Pendulum::new(demo_params());
        let state = PendulumState {
            theta_rad: 0.3,
            omega_rad_s: -1.7,
        };

        let deriv = pendulum.rhs(0.0, &state).unwrap();
        assert_eq!(deriv.theta_rad, -1.7);
        assert_eq!(deriv.omega_rad_s, -(100.0 / 0.5) * 0.3_f64.sin());
    }

    #[test]
    fn rhs_ignores_absolute_time() {
        let pendulum = Pendulum::new(demo_params());
        let state = PendulumState {
            theta_rad: 1.0,
            omega_rad_s: 2.0,
        };

        assert_eq!(
            pendulum.rhs(0.0, &state).unwrap(),
            pendulum.rhs(123.456, &state).unwrap()
        );
    }

    #[test]
    fn params_reject_nonpositive_length() {
        assert!(PendulumParams::new(m(0.0), mps2(9.81)).is_err());
        assert!(PendulumParams::new(m(-1.0), mps2(9.81)).is_err());
    }

    #[test]
    fn params_reject_nonpositive_gravity() {
        assert!(PendulumParams::new(m(0.5), mps2(0.0)).is_err());
        assert!(PendulumParams::new(m(0.5), mps2(-9.81)).is_err());
    }

    #[test]
    fn params_reject_nonfinite() {
        assert!(PendulumParams::new(m(f64::NAN), mps2(9.81)).is_err());
        assert!(PendulumParams::new(m(0.5), mps2(f64::INFINITY)).is_err());
    }

    #[test]
    fn natural_period_of_demo_pendulum() {
        // T = 2*pi*sqrt(0.5/100) = 0.4442882938...
        let tol = Tolerances::default();
        assert!(nearly_equal(
            demo_params().natural_period_s(),
            0.444_288_293_815_836_6,
            tol
        ));
    }

    #[test]
    fn energy_at_rest_is_minus_g_over_l() {
        let pendulum = Pendulum::new(demo_params());
        let rest = PendulumState {
            theta_rad: 0.0,
            omega_rad_s: 0.0,
        };
        assert_eq!(pendulum.specific_energy(&rest), -200.0);
    }

    #[test]
    fn state_from_quantities() {
        let state = PendulumState::new(rad(0.25), radps(-3.0));
        assert_eq!(state.theta_rad, 0.25);
        assert_eq!(state.omega_rad_s, -3.0);
        assert!(state.is_finite());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pend_core::{m, mps2};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rhs_matches_closed_form(theta in -10.0_f64..10.0, omega in -50.0_f64..50.0) {
            let params = PendulumParams::new(m(0.5), mps2(100.0)).unwrap();
            let pendulum = Pendulum::new(params);

            let state = PendulumState { theta_rad: theta, omega_rad_s: omega };
            let deriv = pendulum.rhs(0.0, &state).unwrap();

            prop_assert_eq!(deriv.theta_rad, omega);
            prop_assert_eq!(deriv.omega_rad_s, -(100.0 / 0.5) * theta.sin());
        }

        #[test]
        fn params_reject_nonpositive(bad in -10.0_f64..=0.0) {
            prop_assert!(PendulumParams::new(m(bad), mps2(9.81)).is_err());
            prop_assert!(PendulumParams::new(m(1.0), mps2(bad)).is_err());
        }
    }
}
