//! Explorer configuration: parameter sets for every map family.
//!
//! Defaults reproduce the classical demonstration settings. Any subset of
//! fields may be given in JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::analysis::{ParameterSweep, DEFAULT_TRANSIENT};
use crate::error::{ChaosError, ChaosResult};
use crate::lattice::{CoupledMapLattice, Coupling};
use crate::maps::{HenonMap, LogisticMap, PlanarPoint, StandardMap, TorusPoint};

/// Logistic map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticConfig {
    pub r: f64,
    pub x0: f64,
    /// Length of time series and cobweb.
    pub iterations: usize,
    pub lyapunov_iterations: usize,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            r: LogisticMap::DEFAULT_R,
            x0: LogisticMap::REFERENCE_X0,
            iterations: 100,
            lyapunov_iterations: 1000,
        }
    }
}

/// Hénon map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HenonConfig {
    pub a: f64,
    pub b: f64,
    pub x0: f64,
    pub y0: f64,
    pub iterations: usize,
}

impl Default for HenonConfig {
    fn default() -> Self {
        Self {
            a: HenonMap::DEFAULT_A,
            b: HenonMap::DEFAULT_B,
            x0: HenonMap::REFERENCE_INITIAL.x,
            y0: HenonMap::REFERENCE_INITIAL.y,
            iterations: 1000,
        }
    }
}

/// Standard map settings, including the K stability sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardConfig {
    pub k: f64,
    pub theta0: f64,
    pub p0: f64,
    pub iterations: usize,
    /// Initial conditions in the phase portrait.
    pub trajectories: usize,
    pub k_min: f64,
    pub k_max: f64,
    pub k_count: usize,
}

impl Default for StandardConfig {
    fn default() -> Self {
        Self {
            k: StandardMap::DEFAULT_K,
            theta0: PI,
            p0: 0.5,
            iterations: 1000,
            trajectories: 25,
            k_min: 0.0,
            k_max: 5.0,
            k_count: 50,
        }
    }
}

/// Coupled map lattice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    pub coupling: Coupling,
    pub r: f64,
    pub epsilon: f64,
    pub size: usize,
    pub time_steps: usize,
    /// Seed for the random initial lattice.
    pub seed: u64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            coupling: Coupling::Diffusive,
            r: LogisticMap::DEFAULT_R,
            epsilon: CoupledMapLattice::DEFAULT_EPSILON,
            size: 100,
            time_steps: 100,
            seed: 42,
        }
    }
}

/// Logistic bifurcation diagram settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BifurcationConfig {
    pub r_min: f64,
    pub r_max: f64,
    pub steps: usize,
    pub transient: usize,
    pub iterations: usize,
}

impl Default for BifurcationConfig {
    fn default() -> Self {
        Self {
            r_min: 2.5,
            r_max: 4.0,
            steps: 500,
            transient: DEFAULT_TRANSIENT,
            iterations: 100,
        }
    }
}

/// Complete explorer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub logistic: LogisticConfig,
    pub henon: HenonConfig,
    pub standard: StandardConfig,
    pub lattice: LatticeConfig,
    pub bifurcation: BifurcationConfig,
}

impl ExplorerConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> ChaosResult<()> {
        if self.logistic.lyapunov_iterations < 1 {
            return Err(ChaosError::Config(
                "logistic.lyapunov_iterations must be >= 1".to_string(),
            ));
        }
        if self.lattice.size < 1 {
            return Err(ChaosError::Config(format!(
                "lattice.size must be >= 1, got {}",
                self.lattice.size
            )));
        }
        if self.lattice.time_steps < 1 {
            return Err(ChaosError::Config(format!(
                "lattice.time_steps must be >= 1, got {}",
                self.lattice.time_steps
            )));
        }
        if !(0.0..=1.0).contains(&self.lattice.epsilon) {
            return Err(ChaosError::Config(format!(
                "lattice.epsilon must be in [0, 1], got {}",
                self.lattice.epsilon
            )));
        }
        if self.bifurcation.steps < 1 {
            return Err(ChaosError::Config(format!(
                "bifurcation.steps must be >= 1, got {}",
                self.bifurcation.steps
            )));
        }
        if !(self.bifurcation.r_min <= self.bifurcation.r_max) {
            return Err(ChaosError::Config(format!(
                "bifurcation.r_min must be <= r_max, got [{}, {}]",
                self.bifurcation.r_min, self.bifurcation.r_max
            )));
        }
        if !(self.standard.k_min <= self.standard.k_max) || self.standard.k_count < 1 {
            return Err(ChaosError::Config(format!(
                "standard K sweep needs k_min <= k_max and k_count >= 1, got [{}, {}] x {}",
                self.standard.k_min, self.standard.k_max, self.standard.k_count
            )));
        }
        Ok(())
    }

    /// Load from JSON string and validate.
    pub fn from_json(json: &str) -> ChaosResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ChaosError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ChaosResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChaosError::Config(format!("JSON encode error: {e}")))
    }

    pub fn logistic_map(&self) -> LogisticMap {
        LogisticMap::new(self.logistic.r)
    }

    pub fn henon_map(&self) -> HenonMap {
        HenonMap::new(self.henon.a, self.henon.b)
    }

    pub fn henon_initial(&self) -> PlanarPoint {
        PlanarPoint::new(self.henon.x0, self.henon.y0)
    }

    pub fn standard_map(&self) -> StandardMap {
        StandardMap::new(self.standard.k)
    }

    pub fn standard_initial(&self) -> TorusPoint {
        TorusPoint::wrapped(self.standard.theta0, self.standard.p0)
    }

    pub fn lattice_dynamics(&self) -> CoupledMapLattice {
        CoupledMapLattice::new(self.lattice.coupling, self.lattice.r, self.lattice.epsilon)
    }

    pub fn bifurcation_sweep(&self) -> ChaosResult<ParameterSweep> {
        ParameterSweep::increments(self.bifurcation.r_min, self.bifurcation.r_max, self.bifurcation.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ExplorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logistic.r, 3.9);
        assert_eq!(config.henon_map(), HenonMap::new(1.4, 0.3));
        assert_eq!(config.bifurcation_sweep().unwrap().len(), 501);
    }

    #[test]
    fn test_partial_json() {
        let config = ExplorerConfig::from_json(
            r#"{ "lattice": { "coupling": "global", "epsilon": 0.9 }, "standard": { "k": 2.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.lattice.coupling, Coupling::Global);
        assert_eq!(config.lattice.epsilon, 0.9);
        assert_eq!(config.lattice.size, 100);
        assert_eq!(config.standard_map(), StandardMap::new(2.5));
        assert_eq!(config.henon, HenonConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ExplorerConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ExplorerConfig::from_json(&json).unwrap();
        assert_eq!(parsed.lattice, config.lattice);
        assert_eq!(parsed.bifurcation, config.bifurcation);
        assert_eq!(parsed.henon, config.henon);
        assert!((parsed.standard.theta0 - PI).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_configs() {
        let bad_size = r#"{ "lattice": { "size": 0 } }"#;
        assert!(matches!(ExplorerConfig::from_json(bad_size), Err(ChaosError::Config(_))));

        let bad_range = r#"{ "bifurcation": { "r_min": 4.0, "r_max": 2.5 } }"#;
        assert!(ExplorerConfig::from_json(bad_range).is_err());

        let bad_epsilon = r#"{ "lattice": { "epsilon": 1.5 } }"#;
        assert!(ExplorerConfig::from_json(bad_epsilon).is_err());

        let err = ExplorerConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn test_standard_initial_is_wrapped() {
        let mut config = ExplorerConfig::default();
        config.standard.p0 = -0.5;
        let init = config.standard_initial();
        assert!((init.p - (std::f64::consts::TAU - 0.5)).abs() < 1e-12);
    }
}
