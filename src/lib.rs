//! # Chaos-Dynamics
//!
//! Trajectories and Statistical Diagnostics of Low-Dimensional Chaotic Maps
//!
//! ## Systems
//!
//! | Family  | Map                  | State            | Control |
//! |---------|----------------------|------------------|---------|
//! | Scalar  | Logistic             | x ∈ ℝ            | r       |
//! | Planar  | Hénon                | (x, y) ∈ ℝ²      | a       |
//! | Torus   | Standard (Chirikov)  | (θ, p) ∈ [0,2π)² | K       |
//! | Lattice | Coupled logistic CML | x ∈ [0,1]ⁿ       | r, ε    |
//!
//! ## Diagnostics
//!
//! 1. **Trajectories**: plain orbits, attractor samples after a transient,
//!    cobweb pairs, torus phase portraits
//!
//! 2. **Bifurcation diagrams**: attractor samples against a swept control
//!    parameter, from a fixed reference initial condition
//!
//! 3. **Lyapunov exponents**: closed-form derivative averaging (scalar,
//!    planar) or tangent-vector renormalization (torus), and K sweeps that
//!    locate the onset of global chaos in the standard map
//!
//! 4. **Spatial power spectra** of lattice snapshots
//!
//! ## Conventions
//!
//! Every operation is a pure function returning freshly allocated results.
//! Out-of-range parameters are evaluated, not rejected: divergence shows up
//! as ±∞/NaN. Only caller bugs (empty lattices, counts below their minimum,
//! inverted sweeps) produce a [`ChaosError`].
//!
//! ## References
//!
//! - Strogatz, "Nonlinear Dynamics and Chaos" (2015)
//! - Ott, "Chaos in Dynamical Systems" (2002)
//! - Kaneko, "Theory and Applications of Coupled Map Lattices" (1993)

pub mod error;
pub mod config;
pub mod maps;
pub mod lattice;
pub mod analysis;

pub use error::{ChaosError, ChaosResult};
pub use config::ExplorerConfig;

// Re-exports from maps
pub use maps::{
    // Traits
    DynamicalMap,
    Controllable,
    Linearization,
    MapFamily,
    // Logistic
    LogisticMap,
    logistic_step,
    // Hénon
    HenonMap,
    PlanarPoint,
    henon_step,
    // Standard
    StandardMap,
    TorusPoint,
    standard_step,
    wrap_angle,
};

// Re-exports from lattice
pub use lattice::{
    Coupling,
    CoupledMapLattice,
    evolve_lattice,
    random_lattice,
    power_spectrum,
    mean_power_spectrum,
};

// Re-exports from analysis
pub use analysis::{
    DEFAULT_TRANSIENT,
    ParameterSweep,
    // Trajectories
    Orbit,
    trajectory,
    attractor,
    cobweb,
    orbits,
    phase_portrait,
    // Bifurcation
    BifurcationPoint,
    bifurcation_diagram,
    logistic_bifurcation,
    // Lyapunov
    LyapunovSample,
    lyapunov_exponent,
    lyapunov_with_transient,
    lyapunov_sweep,
    stability_transition,
    rotation_number,
};
