//! Parameter grids for bifurcation and stability sweeps.

use serde::{Deserialize, Serialize};

use crate::error::{require_count, require_range, ChaosResult};

/// Evenly spaced parameter values over a closed interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSweep {
    pub min: f64,
    pub max: f64,
    /// Number of values, both ends included
    pub count: usize,
}

impl ParameterSweep {
    /// `steps` equal increments over [min, max]: `steps + 1` values
    pub fn increments(min: f64, max: f64, steps: usize) -> ChaosResult<Self> {
        require_range("parameter sweep", min, max)?;
        require_count("steps", steps, 1)?;
        Ok(Self { min, max, count: steps + 1 })
    }

    /// `count` values over [min, max]; a single value sits at `min`
    pub fn points(min: f64, max: f64, count: usize) -> ChaosResult<Self> {
        require_range("parameter sweep", min, max)?;
        require_count("count", count, 1)?;
        Ok(Self { min, max, count })
    }

    /// Spacing between consecutive values
    pub fn spacing(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.max - self.min) / (self.count - 1) as f64
        }
    }

    /// i-th value, i < count
    pub fn value(&self, i: usize) -> f64 {
        self.min + i as f64 * self.spacing()
    }

    /// All values in ascending order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.value(i))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
