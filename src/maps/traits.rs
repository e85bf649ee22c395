//! Dynamical Map Traits: Shared API for Trajectory and Stability Analysis
//!
//! Every map family implements these traits so that the analysis drivers
//! (orbits, bifurcation sweeps, Lyapunov estimates) are written once:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DynamicalMap Trait                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + step()           - One application of the kernel         │
//! │  + linearization()  - Local derivative or Jacobian          │
//! │  + observable()     - Coordinate sampled by sweeps          │
//! │  + family()         - Scalar / Planar / Torus               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Debug;

/// Kind of state space a map acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapFamily {
    /// Single real variable (logistic map)
    Scalar,
    /// Real plane (Hénon map)
    Planar,
    /// Two-torus [0, 2π)² (standard map)
    Torus,
}

/// Local linear approximation of a map at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Linearization {
    /// Closed-form dominant derivative f'(x)
    Derivative(f64),
    /// Full 2×2 Jacobian, row-major
    Jacobian([[f64; 2]; 2]),
}

impl Linearization {
    /// Determinant (the derivative itself in one dimension)
    pub fn determinant(&self) -> f64 {
        match *self {
            Linearization::Derivative(d) => d,
            Linearization::Jacobian(j) => j[0][0] * j[1][1] - j[0][1] * j[1][0],
        }
    }

    /// Apply to a tangent vector
    ///
    /// A scalar derivative stretches both components uniformly.
    pub fn apply(&self, v: [f64; 2]) -> [f64; 2] {
        match *self {
            Linearization::Derivative(d) => [d * v[0], d * v[1]],
            Linearization::Jacobian(j) => [
                j[0][0] * v[0] + j[0][1] * v[1],
                j[1][0] * v[0] + j[1][1] * v[1],
            ],
        }
    }
}

/// Discrete-time dynamical system x_{n+1} = f(x_n)
///
/// Implementations are immutable parameter bundles: `step` is a pure
/// function of its argument, so one map value can drive any number of
/// independent orbits.
pub trait DynamicalMap {
    /// State type for this map
    type State: Copy + Debug;

    /// Apply the map once
    fn step(&self, state: Self::State) -> Self::State;

    /// Local linearization at `state`
    fn linearization(&self, state: Self::State) -> Linearization;

    /// Scalar projection of a state, used as the vertical axis of
    /// bifurcation diagrams
    fn observable(state: Self::State) -> f64;

    /// State-space family
    fn family(&self) -> MapFamily;

    /// Whether Lyapunov sums take the linearization at the image f(state)
    /// instead of at the state itself
    fn linearize_after_step(&self) -> bool {
        false
    }

    /// Apply the map `n` times
    fn iterate(&self, state: Self::State, n: usize) -> Self::State {
        (0..n).fold(state, |s, _| self.step(s))
    }
}

/// Maps with a single swept control parameter
pub trait Controllable: Sized {
    /// Current control parameter (r, a or K)
    fn control_parameter(&self) -> f64;

    /// Copy of this map with the control parameter replaced
    fn with_control_parameter(&self, value: f64) -> Self;

    /// Name of the control parameter, for reports and errors
    fn parameter_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jacobian_determinant() {
        let lin = Linearization::Jacobian([[2.0, 1.0], [3.0, 4.0]]);
        assert!((lin.determinant() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_jacobian() {
        let lin = Linearization::Jacobian([[1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(lin.apply([1.0, 2.0]), [3.0, 2.0]);
    }

    #[test]
    fn test_apply_derivative() {
        let lin = Linearization::Derivative(-2.0);
        assert_eq!(lin.apply([1.0, 0.5]), [-2.0, -1.0]);
        assert_eq!(lin.determinant(), -2.0);
    }
}
