//! Logistic Map: Period-Doubling Route to Chaos
//!
//! The logistic map is the canonical one-dimensional chaotic recurrence:
//!
//!   x_{n+1} = r·x_n·(1 − x_n)
//!
//! ## Regimes (x ∈ [0, 1], r ∈ [0, 4])
//!
//! - r < 1: Decay to the fixed point x* = 0
//! - 1 < r < 3: Stable fixed point x* = 1 − 1/r
//! - 3 < r < 3.5699…: Period-doubling cascade
//! - r > 3.5699…: Chaos, interrupted by periodic windows
//!
//! The kernel does not validate r or x. Outside the classical ranges
//! orbits may leave [0, 1] and diverge, which callers are free to explore.
//!
//! ## References
//!
//! - May, R. M. (1976). Simple mathematical models with very complicated
//!   dynamics. Nature.
//! - Feigenbaum, M. J. (1978). Quantitative universality for a class of
//!   nonlinear transformations. J. Stat. Phys.

use serde::{Deserialize, Serialize};

use super::traits::{Controllable, DynamicalMap, Linearization, MapFamily};

/// One application of the logistic map
#[inline]
pub fn logistic_step(x: f64, r: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Logistic map with growth rate r
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticMap {
    /// Growth rate r (control parameter)
    pub r: f64,
}

impl LogisticMap {
    /// Classical chaotic growth rate
    pub const DEFAULT_R: f64 = 3.9;

    /// Reference initial condition for sweeps
    pub const REFERENCE_X0: f64 = 0.5;

    /// Create logistic map with growth rate r
    pub fn new(r: f64) -> Self {
        Self { r }
    }

    /// Apply the map
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        logistic_step(x, self.r)
    }

    /// Closed-form derivative f'(x) = r(1 − 2x)
    #[inline]
    pub fn derivative(&self, x: f64) -> f64 {
        self.r * (1.0 - 2.0 * x)
    }

    /// Non-trivial fixed point x* = 1 − 1/r (None for r = 0)
    pub fn fixed_point(&self) -> Option<f64> {
        if self.r == 0.0 {
            None
        } else {
            Some(1.0 - 1.0 / self.r)
        }
    }
}

impl Default for LogisticMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_R)
    }
}

impl DynamicalMap for LogisticMap {
    type State = f64;

    fn step(&self, x: f64) -> f64 {
        self.apply(x)
    }

    fn linearization(&self, x: f64) -> Linearization {
        Linearization::Derivative(self.derivative(x))
    }

    fn observable(x: f64) -> f64 {
        x
    }

    fn family(&self) -> MapFamily {
        MapFamily::Scalar
    }
}

impl Controllable for LogisticMap {
    fn control_parameter(&self) -> f64 {
        self.r
    }

    fn with_control_parameter(&self, value: f64) -> Self {
        Self::new(value)
    }

    fn parameter_name(&self) -> &'static str {
        "r"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_step() {
        assert!((logistic_step(0.5, 4.0) - 1.0).abs() < 1e-15);
        assert!((logistic_step(0.25, 3.0) - 0.5625).abs() < 1e-15);
        assert_eq!(logistic_step(0.0, 3.9), 0.0);
        assert_eq!(logistic_step(1.0, 3.9), 0.0);
    }

    #[test]
    fn test_fixed_point_at_r2() {
        let map = LogisticMap::new(2.0);
        assert!((map.step(0.5) - 0.5).abs() < f64::EPSILON);
        let x = map.iterate(0.5, 1000);
        assert!((x - 0.5).abs() < f64::EPSILON, "Expected x = 0.5, got {}", x);
        assert_eq!(map.fixed_point(), Some(0.5));
    }

    #[test]
    fn test_no_validation_outside_unit_interval() {
        // Evaluated, not rejected
        let y = logistic_step(2.0, 3.9);
        assert!((y - (-7.8)).abs() < 1e-12);
        let diverged = LogisticMap::new(5.0).iterate(0.5, 50);
        assert!(!diverged.is_finite() || diverged < -1e10, "Expected divergence, got {}", diverged);
    }

    #[test]
    fn test_derivative() {
        let map = LogisticMap::new(3.0);
        assert!((map.derivative(0.5)).abs() < 1e-15);
        assert!((map.derivative(0.0) - 3.0).abs() < 1e-15);
        assert_eq!(map.linearization(0.25), Linearization::Derivative(1.5));
    }

    #[test]
    fn test_controllable() {
        let map = LogisticMap::default().with_control_parameter(3.2);
        assert_eq!(map.control_parameter(), 3.2);
        assert_eq!(map.parameter_name(), "r");
        assert_eq!(map.family(), MapFamily::Scalar);
    }
}
