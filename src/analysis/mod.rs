//! Analysis Module: Orbits, Bifurcations and Stability
//!
//! Drivers written once over [`DynamicalMap`](crate::maps::DynamicalMap)
//! and [`Controllable`](crate::maps::Controllable):
//!
//! - **Trajectories**: plain orbits, attractor samples, cobwebs, phase
//!   portraits
//! - **Bifurcation diagrams**: attractor samples against a swept parameter
//! - **Lyapunov exponents**: derivative averaging or tangent-vector
//!   renormalization, plus parameter sweeps of the estimate
//!
//! Every driver is a pure function of its arguments. Sweeps over
//! parameters or initial conditions share no state, so callers may split
//! them across threads freely.

mod sweep;
mod trajectory;
mod bifurcation;
mod lyapunov;

/// Steps discarded before sampling an attractor
pub const DEFAULT_TRANSIENT: usize = 100;

pub use sweep::ParameterSweep;
pub use trajectory::{Orbit, trajectory, attractor, cobweb, orbits, torus_grid, phase_portrait};
pub use bifurcation::{BifurcationPoint, bifurcation_diagram, logistic_bifurcation};
pub use lyapunov::{
    LyapunovSample,
    STABILITY_ITERATIONS,
    lyapunov_exponent,
    lyapunov_with_transient,
    lyapunov_sweep,
    stability_transition,
    rotation_number,
};
