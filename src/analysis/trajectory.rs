//! Trajectory Generation: Orbits, Attractor Samples and Cobwebs
//!
//! All drivers sit on [`Orbit`], a lazy iterator that yields the initial
//! state first and then its successive images. No transient is discarded
//! unless asked for; attractor sampling discards [`DEFAULT_TRANSIENT`]
//! steps so samples lie on the attractor rather than on the decay to it.

use std::f64::consts::TAU;

use super::DEFAULT_TRANSIENT;
use crate::maps::{DynamicalMap, PlanarPoint, StandardMap, TorusPoint};

/// Infinite forward orbit of a map
#[derive(Debug, Clone)]
pub struct Orbit<'a, M: DynamicalMap> {
    map: &'a M,
    state: M::State,
}

impl<'a, M: DynamicalMap> Orbit<'a, M> {
    pub fn new(map: &'a M, initial: M::State) -> Self {
        Self { map, state: initial }
    }

    /// Orbit starting after `transient` discarded steps
    pub fn after_transient(map: &'a M, initial: M::State, transient: usize) -> Self {
        Self::new(map, map.iterate(initial, transient))
    }

    /// State the next call to `next` will yield
    pub fn current(&self) -> M::State {
        self.state
    }
}

impl<M: DynamicalMap> Iterator for Orbit<'_, M> {
    type Item = M::State;

    fn next(&mut self) -> Option<M::State> {
        let current = self.state;
        self.state = self.map.step(current);
        Some(current)
    }
}

/// `iterations` consecutive states after discarding `transient` steps
///
/// With `transient = 0` the first element is `initial` itself.
pub fn trajectory<M: DynamicalMap>(
    map: &M,
    initial: M::State,
    iterations: usize,
    transient: usize,
) -> Vec<M::State> {
    Orbit::after_transient(map, initial, transient)
        .take(iterations)
        .collect()
}

/// `iterations` states sampled on the attractor (100-step transient)
pub fn attractor<M: DynamicalMap>(map: &M, initial: M::State, iterations: usize) -> Vec<M::State> {
    trajectory(map, initial, iterations, DEFAULT_TRANSIENT)
}

/// Cobweb pairs (xᵢ, f(xᵢ)) of a scalar map, with x_{i+1} = f(xᵢ)
pub fn cobweb<M: DynamicalMap<State = f64>>(map: &M, x0: f64, iterations: usize) -> Vec<PlanarPoint> {
    Orbit::new(map, x0)
        .take(iterations)
        .map(|x| PlanarPoint::new(x, map.step(x)))
        .collect()
}

/// Independent orbits from several initial conditions
///
/// Each orbit holds its initial state plus `iterations` further states.
pub fn orbits<M: DynamicalMap>(map: &M, initials: &[M::State], iterations: usize) -> Vec<Vec<M::State>> {
    initials
        .iter()
        .map(|&init| Orbit::new(map, init).take(iterations + 1).collect())
        .collect()
}

/// Grid of initial conditions covering the torus
///
/// Uses a `side × side` grid, `side = ⌈√count⌉`, filled row by row in p
/// and truncated to `count` points.
pub fn torus_grid(count: usize) -> Vec<TorusPoint> {
    if count == 0 {
        return Vec::new();
    }

    let side = (count as f64).sqrt().ceil() as usize;
    let spacing = TAU / side as f64;

    (0..count)
        .map(|i| TorusPoint::new((i % side) as f64 * spacing, (i / side) as f64 * spacing))
        .collect()
}

/// Phase portrait of the standard map from a grid of initial conditions
pub fn phase_portrait(map: &StandardMap, n_trajectories: usize, iterations: usize) -> Vec<Vec<TorusPoint>> {
    log::debug!(
        "phase portrait: K = {}, {} trajectories x {} iterations",
        map.k, n_trajectories, iterations
    );
    orbits(map, &torus_grid(n_trajectories), iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::{HenonMap, LogisticMap};

    #[test]
    fn test_orbit_yields_initial_first() {
        let map = LogisticMap::new(3.9);
        let mut orbit = Orbit::new(&map, 0.2);
        assert_eq!(orbit.next(), Some(0.2));
        assert_eq!(orbit.next(), Some(map.step(0.2)));
        assert_eq!(orbit.current(), map.step(map.step(0.2)));
    }

    #[test]
    fn test_trajectory_length_and_start() {
        let map = LogisticMap::new(3.5);
        let traj = trajectory(&map, 0.5, 50, 0);
        assert_eq!(traj.len(), 50);
        assert_eq!(traj[0], 0.5);
        for w in traj.windows(2) {
            assert_eq!(w[1], map.step(w[0]));
        }
        assert!(trajectory(&map, 0.5, 0, 10).is_empty());
    }

    #[test]
    fn test_transient_not_included() {
        let map = HenonMap::default();
        let init = HenonMap::REFERENCE_INITIAL;
        let full = trajectory(&map, init, 110, 0);
        let skipped = trajectory(&map, init, 10, 100);
        assert_eq!(&full[100..], &skipped[..]);
    }

    #[test]
    fn test_henon_attractor_is_bounded() {
        let map = HenonMap::default();
        let points = attractor(&map, HenonMap::REFERENCE_INITIAL, 1000);
        assert_eq!(points.len(), 1000);
        for p in &points {
            assert!(p.x.abs() < 1.5 && p.y.abs() < 0.5, "Off attractor: {:?}", p);
        }
    }

    #[test]
    fn test_logistic_attractor_period_two() {
        // r = 3.2 settles on a 2-cycle
        let map = LogisticMap::new(3.2);
        let points = attractor(&map, 0.5, 20);
        for w in points.windows(3) {
            assert!((w[0] - w[2]).abs() < 1e-6, "Not period 2: {} vs {}", w[0], w[2]);
            assert!((w[0] - w[1]).abs() > 0.1);
        }
    }

    #[test]
    fn test_cobweb_pairs() {
        let map = LogisticMap::new(3.9);
        let web = cobweb(&map, 0.5, 30);
        assert_eq!(web.len(), 30);
        assert_eq!(web[0].x, 0.5);
        for w in web.windows(2) {
            assert_eq!(w[0].y, map.step(w[0].x));
            assert_eq!(w[1].x, w[0].y);
        }
    }

    #[test]
    fn test_torus_grid() {
        let grid = torus_grid(9);
        assert_eq!(grid.len(), 9);
        assert_eq!(grid[0], TorusPoint::new(0.0, 0.0));
        assert!((grid[4].theta - TAU / 3.0).abs() < 1e-12);
        assert!((grid[4].p - TAU / 3.0).abs() < 1e-12);

        // Non-square counts truncate a ⌈√n⌉ grid
        let partial = torus_grid(5);
        assert_eq!(partial.len(), 5);
        assert!((partial[2].theta - 2.0 * TAU / 3.0).abs() < 1e-12);
        assert!((partial[3].p - TAU / 3.0).abs() < 1e-12);

        assert!(torus_grid(0).is_empty());
    }

    #[test]
    fn test_phase_portrait_shape() {
        let map = StandardMap::new(0.9);
        let portrait = phase_portrait(&map, 16, 200);
        assert_eq!(portrait.len(), 16);
        for (orbit, init) in portrait.iter().zip(torus_grid(16)) {
            assert_eq!(orbit.len(), 201);
            assert_eq!(orbit[0], init);
        }
    }
}
