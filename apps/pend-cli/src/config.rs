//! YAML run configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pend_sim::IntegratorKind;

/// Integrator selection as written in config files.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorDef {
    #[default]
    Rk4,
    ForwardEuler,
}

impl From<IntegratorDef> for IntegratorKind {
    fn from(def: IntegratorDef) -> Self {
        match def {
            IntegratorDef::Rk4 => IntegratorKind::RK4,
            IntegratorDef::ForwardEuler => IntegratorKind::ForwardEuler,
        }
    }
}

/// One pendulum run: physical parameters, initial condition, windowing.
///
/// All fields are optional in the file; missing ones fall back to the demo
/// pendulum (fast swing: half-meter rod under g = 100 m/s²).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub length_m: f64,
    pub gravity_mps2: f64,
    pub theta0_rad: f64,
    pub omega0_rad_s: f64,
    pub samples_per_window: usize,
    pub integrator: IntegratorDef,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            length_m: 0.5,
            gravity_mps2: 100.0,
            theta0_rad: 0.0,
            omega0_rad_s: 3.0,
            samples_per_window: 500,
            integrator: IntegratorDef::Rk4,
        }
    }
}

pub fn load(path: &Path) -> Result<RunConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
    serde_yaml::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_demo_run() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.length_m, 0.5);
        assert_eq!(cfg.gravity_mps2, 100.0);
        assert_eq!(cfg.samples_per_window, 500);
        assert_eq!(cfg.integrator, IntegratorDef::Rk4);
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg: RunConfig = serde_yaml::from_str("length_m: 1.0\nintegrator: forward_euler\n")
            .expect("valid partial config");
        assert_eq!(cfg.length_m, 1.0);
        assert_eq!(cfg.integrator, IntegratorDef::ForwardEuler);
        assert_eq!(cfg.gravity_mps2, 100.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<RunConfig, _> = serde_yaml::from_str("damping: 0.043\n");
        assert!(result.is_err());
    }

    #[test]
    fn integrator_def_maps_to_kind() {
        assert_eq!(IntegratorKind::from(IntegratorDef::Rk4), IntegratorKind::RK4);
        assert_eq!(
            IntegratorKind::from(IntegratorDef::ForwardEuler),
            IntegratorKind::ForwardEuler
        );
    }
}
