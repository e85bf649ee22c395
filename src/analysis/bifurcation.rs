//! Bifurcation Diagrams: Attractor Samples Against a Swept Parameter
//!
//! For every parameter value the state is reset to a fixed reference
//! initial condition, a transient is discarded, and the following
//! `iterations` states are recorded against the parameter. Output order
//! is parameter ascending, then iteration ascending.

use serde::{Deserialize, Serialize};

use super::sweep::ParameterSweep;
use crate::error::ChaosResult;
use crate::maps::{Controllable, DynamicalMap, LogisticMap};

/// One (parameter, sampled state) pair of a bifurcation diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BifurcationPoint {
    pub parameter: f64,
    pub value: f64,
}

/// Bifurcation diagram of any controllable map
///
/// The map's current control parameter is ignored; only its other
/// parameters (e.g. Hénon's b) carry over to each sweep value.
pub fn bifurcation_diagram<M>(
    template: &M,
    initial: M::State,
    sweep: &ParameterSweep,
    transient: usize,
    iterations: usize,
) -> Vec<BifurcationPoint>
where
    M: DynamicalMap + Controllable,
{
    log::debug!(
        "bifurcation sweep over {} in [{}, {}]: {} values x {} samples (transient {})",
        template.parameter_name(), sweep.min, sweep.max, sweep.len(), iterations, transient
    );

    let mut points = Vec::with_capacity(sweep.len() * iterations);

    for parameter in sweep.values() {
        let map = template.with_control_parameter(parameter);
        let mut state = map.iterate(initial, transient);

        for _ in 0..iterations {
            state = map.step(state);
            points.push(BifurcationPoint {
                parameter,
                value: M::observable(state),
            });
        }
        log::trace!("{} = {}: sampled {} states", template.parameter_name(), parameter, iterations);
    }

    points
}

/// Logistic bifurcation diagram over r ∈ [r_min, r_max]
///
/// `steps` equal increments give `steps + 1` values of r, each
/// contributing `iterations` points from x₀ = 0.5.
pub fn logistic_bifurcation(
    r_min: f64,
    r_max: f64,
    steps: usize,
    transient: usize,
    iterations: usize,
) -> ChaosResult<Vec<BifurcationPoint>> {
    let sweep = ParameterSweep::increments(r_min, r_max, steps)?;
    Ok(bifurcation_diagram(
        &LogisticMap::default(),
        LogisticMap::REFERENCE_X0,
        &sweep,
        transient,
        iterations,
    ))
}
