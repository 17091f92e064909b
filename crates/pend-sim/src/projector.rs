//! Projection from pendulum angles to display coordinates.

use crate::dynamics::PendulumParams;

/// Display coordinates for one animation frame: the rod runs from `pivot`
/// to `bob`; the bob marker sits at `bob`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub pivot: [f64; 2],
    pub bob: [f64; 2],
}

/// Maps an angle to Cartesian bob coordinates via the rod constraint.
///
/// The pivot height is an explicit parameter instead of an implicit
/// convention: `origin_relative` puts the pivot at the origin (the bob
/// hangs at negative y), `pivot_relative` lifts the whole picture by one
/// rod length so the resting bob sits at y = 0.
#[derive(Clone, Copy, Debug)]
pub struct FrameProjector {
    length_m: f64,
    pivot_height_m: f64,
}

impl FrameProjector {
    /// Pivot at (0, 0); bob = (L*sin(theta), -L*cos(theta)).
    pub fn origin_relative(params: &PendulumParams) -> Self {
        Self {
            length_m: params.length_m(),
            pivot_height_m: 0.0,
        }
    }

    /// Pivot at (0, L); bob = (L*sin(theta), L - L*cos(theta)).
    pub fn pivot_relative(params: &PendulumParams) -> Self {
        Self {
            length_m: params.length_m(),
            pivot_height_m: params.length_m(),
        }
    }

    pub fn pivot(&self) -> [f64; 2] {
        [0.0, self.pivot_height_m]
    }

    /// Bob position for the given angle. Pure; any finite angle is valid.
    pub fn project(&self, theta_rad: f64) -> [f64; 2] {
        [
            self.length_m * theta_rad.sin(),
            self.pivot_height_m - self.length_m * theta_rad.cos(),
        ]
    }

    /// Rod segment endpoints and bob position in one struct.
    pub fn frame(&self, theta_rad: f64) -> Frame {
        Frame {
            pivot: self.pivot(),
            bob: self.project(theta_rad),
        }
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pend_core::{m, mps2};
    use std::f64::consts::FRAC_PI_2;

    fn params() -> PendulumParams {
        PendulumParams::new(m(0.5), mps2(100.0)).unwrap()
    }

    #[test]
    fn hanging_bob_rests_at_zero_in_pivot_relative() {
        let projector = FrameProjector::pivot_relative(&params());
        // cos(0) = 1 exactly, so L - L*cos(0) is exactly zero
        assert_eq!(projector.project(0.0), [0.0, 0.0]);
        assert_eq!(projector.pivot(), [0.0, 0.5]);
    }

    #[test]
    fn hanging_bob_sits_below_origin_in_origin_relative() {
        let projector = FrameProjector::origin_relative(&params());
        assert_eq!(projector.project(0.0), [0.0, -0.5]);
        assert_eq!(projector.pivot(), [0.0, 0.0]);
    }

    #[test]
    fn horizontal_bob_in_both_conventions() {
        let p = params();

        let [x, y] = FrameProjector::pivot_relative(&p).project(FRAC_PI_2);
        assert_eq!(x, 0.5);
        assert!((y - 0.5).abs() < 1e-15);

        let [x, y] = FrameProjector::origin_relative(&p).project(FRAC_PI_2);
        assert_eq!(x, 0.5);
        assert!(y.abs() < 1e-15);
    }

    #[test]
    fn frame_carries_rod_endpoints() {
        let projector = FrameProjector::pivot_relative(&params());
        let frame = projector.frame(0.0);
        assert_eq!(frame.pivot, [0.0, 0.5]);
        assert_eq!(frame.bob, [0.0, 0.0]);
    }
}
