//! Error hierarchy for the chaos engine.
//!
//! Kernels never fail. Only caller bugs are rejected here: empty lattices,
//! counts below their minimum and inverted or non-finite sweep ranges.
//! Divergence, overflow and `ln(0)` are dynamical behavior and surface as
//! NaN/±∞ in the returned values instead.

use thiserror::Error;

/// Root error type for all engine failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChaosError {
    /// Lattice with zero sites (mean field and spectrum divide by `n`).
    #[error("empty lattice: a coupled map lattice needs at least one site")]
    EmptyLattice,

    /// Iteration/step/sample count below its minimum.
    #[error("invalid count: {name} must be >= {min}, got {got}")]
    InvalidCount {
        name: &'static str,
        min: usize,
        got: usize,
    },

    /// Sweep bounds inverted or not finite.
    #[error("invalid range: {name} requires finite bounds with min <= max, got [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Sampling distribution could not be constructed.
    #[error("distribution error: {0}")]
    Distribution(String),
}

pub type ChaosResult<T> = Result<T, ChaosError>;

/// Reject counts below `min`.
pub(crate) fn require_count(name: &'static str, got: usize, min: usize) -> ChaosResult<()> {
    if got < min {
        return Err(ChaosError::InvalidCount { name, min, got });
    }
    Ok(())
}

/// Reject inverted or non-finite ranges.
pub(crate) fn require_range(name: &'static str, min: f64, max: f64) -> ChaosResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ChaosError::InvalidRange { name, min, max });
    }
    Ok(())
}
