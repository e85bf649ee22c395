//! Standard (Chirikov) Map: Hamiltonian Chaos on the Torus
//!
//! The kicked rotor reduced to one kick per period:
//!
//!   p_{n+1} = p_n + K·sin(θ_n)        (mod 2π)
//!   θ_{n+1} = θ_n + p_{n+1}           (mod 2π)
//!
//! Momentum is updated first with the old angle, then the angle with the
//! new momentum. This ordering makes the map symplectic: the Jacobian
//!
//!   J = | 1 + K·cos θ   1 |
//!       |   K·cos θ     1 |
//!
//! has determinant exactly 1 for every K and θ.
//!
//! ## Regimes
//!
//! - K = 0: Integrable shear, p conserved, θ rotates by p each step
//! - K < K_c ≈ 0.9716: KAM tori confine chaotic layers
//! - K > K_c: Last rotational torus breaks, global diffusion in p
//!
//! ## References
//!
//! - Chirikov, B. V. (1979). A universal instability of many-dimensional
//!   oscillator systems. Phys. Rep.
//! - Greene, J. M. (1979). A method for determining a stochastic
//!   transition. J. Math. Phys.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use super::traits::{Controllable, DynamicalMap, Linearization, MapFamily};

/// Wrap an angle into [0, 2π)
///
/// Wraps, never clamps. Non-finite input stays non-finite.
#[inline]
pub fn wrap_angle(v: f64) -> f64 {
    let w = v.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly 2π
    if w >= TAU {
        0.0
    } else {
        w
    }
}

/// Point on the torus, both coordinates in [0, 2π)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TorusPoint {
    pub theta: f64,
    pub p: f64,
}

impl TorusPoint {
    pub fn new(theta: f64, p: f64) -> Self {
        Self { theta, p }
    }

    /// Point with both coordinates wrapped onto the torus
    pub fn wrapped(theta: f64, p: f64) -> Self {
        Self {
            theta: wrap_angle(theta),
            p: wrap_angle(p),
        }
    }
}

/// One application of the standard map
#[inline]
pub fn standard_step(theta: f64, p: f64, k: f64) -> TorusPoint {
    let p_next = wrap_angle(p + k * theta.sin());
    let theta_next = wrap_angle(theta + p_next);
    TorusPoint {
        theta: theta_next,
        p: p_next,
    }
}

/// Standard map with kick strength K
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardMap {
    /// Kick strength K (control parameter)
    pub k: f64,
}

impl StandardMap {
    pub const DEFAULT_K: f64 = 1.0;

    /// Greene's estimate of the last-KAM-torus breakup
    pub const CRITICAL_K: f64 = 0.971_635;

    /// Reference initial condition for stability sweeps
    pub const REFERENCE_INITIAL: TorusPoint = TorusPoint { theta: PI, p: 0.5 };

    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Local Jacobian in (θ, p) coordinates, evaluated at the pre-step angle
    pub fn jacobian(&self, theta: f64) -> [[f64; 2]; 2] {
        let kc = self.k * theta.cos();
        [[1.0 + kc, 1.0], [kc, 1.0]]
    }
}

impl Default for StandardMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_K)
    }
}

impl DynamicalMap for StandardMap {
    type State = TorusPoint;

    fn step(&self, s: TorusPoint) -> TorusPoint {
        standard_step(s.theta, s.p, self.k)
    }

    fn linearization(&self, s: TorusPoint) -> Linearization {
        Linearization::Jacobian(self.jacobian(s.theta))
    }

    fn observable(s: TorusPoint) -> f64 {
        s.p
    }

    fn family(&self) -> MapFamily {
        MapFamily::Torus
    }
}

impl Controllable for StandardMap {
    fn control_parameter(&self) -> f64 {
        self.k
    }

    fn with_control_parameter(&self, value: f64) -> Self {
        Self::new(value)
    }

    fn parameter_name(&self) -> &'static str {
        "K"
    }
}
