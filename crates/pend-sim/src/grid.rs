//! Monotonic time grids for integration windows.

use pend_core::ensure_positive;

use crate::error::{SimError, SimResult};

/// An ordered sequence of sample times covering one integration window.
///
/// Built once per session and reused for every window; only the initial
/// condition changes between windows. Times are relative to the window
/// start.
#[derive(Clone, Debug)]
pub struct TimeGrid {
    t: Vec<f64>,
}

impl TimeGrid {
    /// Evenly spaced samples over [0, period_s], both endpoints included.
    pub fn over_period(period_s: f64, samples: usize) -> SimResult<Self> {
        let period_s = ensure_positive(period_s, "window period")?;
        if samples < 2 {
            return Err(SimError::InvalidParameter {
                what: "samples per window must be at least 2",
            });
        }

        let last = (samples - 1) as f64;
        let t = (0..samples).map(|i| period_s * i as f64 / last).collect();
        Ok(Self { t })
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.t
    }

    /// Total window duration.
    pub fn span_s(&self) -> f64 {
        self.t[self.t.len() - 1] - self.t[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_monotonic_and_spans_period() {
        let grid = TimeGrid::over_period(0.444, 500).unwrap();

        assert_eq!(grid.len(), 500);
        assert_eq!(grid.times()[0], 0.0);
        assert_eq!(grid.times()[499], 0.444);
        assert!((grid.span_s() - 0.444).abs() < 1e-15);

        for pair in grid.times().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn two_samples_is_the_minimum() {
        let grid = TimeGrid::over_period(1.0, 2).unwrap();
        assert_eq!(grid.times(), &[0.0, 1.0]);

        assert!(TimeGrid::over_period(1.0, 1).is_err());
        assert!(TimeGrid::over_period(1.0, 0).is_err());
    }

    #[test]
    fn nonpositive_period_is_rejected() {
        assert!(TimeGrid::over_period(0.0, 10).is_err());
        assert!(TimeGrid::over_period(-1.0, 10).is_err());
        assert!(TimeGrid::over_period(f64::NAN, 10).is_err());
    }
}
