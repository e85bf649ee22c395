//! Lyapunov Exponents: Average Exponential Divergence Rate
//!
//! After a transient, the leading exponent is estimated as
//!
//!   λ ≈ (1/N) Σᵢ ln ‖Dfᵢ‖
//!
//! with the local stretching factor taken from the map's linearization:
//!
//! - **Derivative** (logistic, Hénon): ln|f'(x)| at each visited state
//!   for the logistic map, at each new image for the Hénon map
//! - **Jacobian** (standard map): a unit tangent vector is pushed through
//!   the local Jacobian, its log-norm accumulated, and the vector
//!   renormalized before the next step (power iteration for the leading
//!   exponent of a 2-D map)
//!
//! λ < 0 signals a stable orbit, λ ≈ 0 marginal, λ > 0 chaos. Orbits that
//! hit a critical point (f' = 0) give ln 0 = −∞, which is returned as is.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::sweep::ParameterSweep;
use super::DEFAULT_TRANSIENT;
use crate::error::{require_count, ChaosResult};
use crate::maps::{Controllable, DynamicalMap, Linearization, StandardMap, TorusPoint};

/// Iterations per K value in a stability transition sweep
pub const STABILITY_ITERATIONS: usize = 1000;

/// Lyapunov exponent at one value of a control parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LyapunovSample {
    pub parameter: f64,
    pub exponent: f64,
}

/// Leading Lyapunov exponent after the default 100-step transient
pub fn lyapunov_exponent<M: DynamicalMap>(map: &M, initial: M::State, iterations: usize) -> ChaosResult<f64> {
    lyapunov_with_transient(map, initial, DEFAULT_TRANSIENT, iterations)
}

/// Leading Lyapunov exponent with an explicit transient
pub fn lyapunov_with_transient<M: DynamicalMap>(
    map: &M,
    initial: M::State,
    transient: usize,
    iterations: usize,
) -> ChaosResult<f64> {
    require_count("iterations", iterations, 1)?;

    let mut state = map.iterate(initial, transient);
    let mut tangent = [1.0, 0.0];
    let mut sum = 0.0;

    let after_step = map.linearize_after_step();
    for _ in 0..iterations {
        let next = map.step(state);
        let at = if after_step { next } else { state };
        match map.linearization(at) {
            Linearization::Derivative(d) => {
                sum += d.abs().ln();
            }
            lin @ Linearization::Jacobian(_) => {
                let [dx, dy] = lin.apply(tangent);
                let norm = dx.hypot(dy);
                sum += norm.ln();
                tangent = [dx / norm, dy / norm];
            }
        }
        state = next;
    }

    let exponent = sum / iterations as f64;
    if !exponent.is_finite() {
        log::warn!("Lyapunov estimate is {} ({:?} map, {} iterations)", exponent, map.family(), iterations);
    }

    Ok(exponent)
}

/// Lyapunov exponent at each value of a parameter sweep
///
/// Every value restarts from `initial`.
pub fn lyapunov_sweep<M>(
    template: &M,
    initial: M::State,
    sweep: &ParameterSweep,
    iterations: usize,
) -> ChaosResult<Vec<LyapunovSample>>
where
    M: DynamicalMap + Controllable,
{
    require_count("iterations", iterations, 1)?;
    log::debug!(
        "Lyapunov sweep over {} in [{}, {}]: {} values x {} iterations",
        template.parameter_name(), sweep.min, sweep.max, sweep.len(), iterations
    );

    sweep
        .values()
        .map(|parameter| {
            let map = template.with_control_parameter(parameter);
            let exponent = lyapunov_exponent(&map, initial, iterations)?;
            Ok(LyapunovSample { parameter, exponent })
        })
        .collect()
}

/// Onset of chaos in the standard map as K increases
///
/// `count` evenly spaced K values over [k_min, k_max], each estimated from
/// (θ₀, p₀) = (π, 0.5) with 1000 iterations.
pub fn stability_transition(k_min: f64, k_max: f64, count: usize) -> ChaosResult<Vec<LyapunovSample>> {
    let sweep = ParameterSweep::points(k_min, k_max, count)?;
    lyapunov_sweep(
        &StandardMap::default(),
        StandardMap::REFERENCE_INITIAL,
        &sweep,
        STABILITY_ITERATIONS,
    )
}

/// Mean rotation per step of a standard-map orbit, in turns
///
/// Averages p/2π over `iterations` steps after the default transient.
pub fn rotation_number(map: &StandardMap, initial: TorusPoint, iterations: usize) -> ChaosResult<f64> {
    require_count("iterations", iterations, 1)?;

    let mut state = map.iterate(initial, DEFAULT_TRANSIENT);
    let mut total = 0.0;
    for _ in 0..iterations {
        state = map.step(state);
        total += state.p / TAU;
    }

    Ok(total / iterations as f64)
}
