//! Hénon Map: Two-Dimensional Strange Attractor
//!
//!   x_{n+1} = 1 − a·x_n² + y_n
//!   y_{n+1} = b·x_n
//!
//! For the classical parameters a = 1.4, b = 0.3 orbits settle onto a
//! strange attractor of fractal dimension ≈ 1.26. The map contracts area
//! uniformly by |det J| = |b| per step.
//!
//! The Lyapunov estimate uses only the x-partial of the first Jacobian
//! row, −2ax. This tracks the dominant stretching direction but is not the
//! full two-dimensional Lyapunov spectrum.
//!
//! ## References
//!
//! - Hénon, M. (1976). A two-dimensional mapping with a strange attractor.
//!   Commun. Math. Phys.

use serde::{Deserialize, Serialize};

use super::traits::{Controllable, DynamicalMap, Linearization, MapFamily};

/// Point in the plane: Hénon state or a cobweb/trajectory sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlanarPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One application of the Hénon map
#[inline]
pub fn henon_step(x: f64, y: f64, a: f64, b: f64) -> PlanarPoint {
    PlanarPoint {
        x: 1.0 - a * x * x + y,
        y: b * x,
    }
}

/// Hénon map with parameters (a, b)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HenonMap {
    /// Nonlinearity a (control parameter)
    pub a: f64,
    /// Contraction b
    pub b: f64,
}

impl HenonMap {
    pub const DEFAULT_A: f64 = 1.4;
    pub const DEFAULT_B: f64 = 0.3;

    /// Default initial condition used by the attractor plots
    pub const REFERENCE_INITIAL: PlanarPoint = PlanarPoint { x: 0.1, y: 0.1 };

    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Full Jacobian [[−2ax, 1], [b, 0]]
    pub fn jacobian(&self, point: PlanarPoint) -> [[f64; 2]; 2] {
        [[-2.0 * self.a * point.x, 1.0], [self.b, 0.0]]
    }

    /// Fixed points of the map (real roots of a·x² + (1 − b)·x − 1 = 0)
    pub fn fixed_points(&self) -> Vec<PlanarPoint> {
        let a = self.a;
        let c = 1.0 - self.b;

        if a == 0.0 {
            if c == 0.0 {
                return Vec::new();
            }
            let x = 1.0 / c;
            return vec![PlanarPoint::new(x, self.b * x)];
        }

        let disc = c * c + 4.0 * a;
        if disc < 0.0 {
            return Vec::new();
        }

        let sqrt_disc = disc.sqrt();
        [(-c + sqrt_disc) / (2.0 * a), (-c - sqrt_disc) / (2.0 * a)]
            .iter()
            .map(|&x| PlanarPoint::new(x, self.b * x))
            .collect()
    }
}

impl Default for HenonMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_A, Self::DEFAULT_B)
    }
}

impl DynamicalMap for HenonMap {
    type State = PlanarPoint;

    fn step(&self, p: PlanarPoint) -> PlanarPoint {
        henon_step(p.x, p.y, self.a, self.b)
    }

    /// Dominant derivative ∂x'/∂x = −2ax
    fn linearization(&self, p: PlanarPoint) -> Linearization {
        Linearization::Derivative(-2.0 * self.a * p.x)
    }

    fn observable(p: PlanarPoint) -> f64 {
        p.x
    }

    fn family(&self) -> MapFamily {
        MapFamily::Planar
    }

    /// Stretch factors are read off the freshly stepped x
    fn linearize_after_step(&self) -> bool {
        true
    }
}

impl Controllable for HenonMap {
    fn control_parameter(&self) -> f64 {
        self.a
    }

    fn with_control_parameter(&self, value: f64) -> Self {
        Self { a: value, b: self.b }
    }

    fn parameter_name(&self) -> &'static str {
        "a"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_henon_from_origin() {
        let p = henon_step(0.0, 0.0, 1.4, 0.3);
        assert_eq!(p, PlanarPoint::new(1.0, 0.0));
    }

    #[test]
    fn test_henon_step_matches_map() {
        let map = HenonMap::default();
        let p = map.step(PlanarPoint::new(0.5, 0.2));
        // 1 - 1.4·0.25 + 0.2 = 0.85, 0.3·0.5 = 0.15
        assert!((p.x - 0.85).abs() < 1e-12, "x = {}", p.x);
        assert!((p.y - 0.15).abs() < 1e-12, "y = {}", p.y);
    }

    #[test]
    fn test_fixed_points_are_fixed() {
        let map = HenonMap::default();
        let fps = map.fixed_points();
        assert_eq!(fps.len(), 2);
        for fp in fps {
            let next = map.step(fp);
            assert!((next.x - fp.x).abs() < 1e-12 && (next.y - fp.y).abs() < 1e-12,
                "Fixed point {:?} moved to {:?}", fp, next);
        }
    }

    #[test]
    fn test_area_contraction() {
        let map = HenonMap::default();
        for &x in &[-1.0, 0.0, 0.3, 1.2] {
            let j = map.jacobian(PlanarPoint::new(x, 0.0));
            let det = j[0][0] * j[1][1] - j[0][1] * j[1][0];
            assert!((det + map.b).abs() < 1e-12, "det = {}", det);
        }
    }

    #[test]
    fn test_linearization_is_dominant_partial() {
        let map = HenonMap::new(1.4, 0.3);
        assert_eq!(
            map.linearization(PlanarPoint::new(0.5, 9.0)),
            Linearization::Derivative(-1.4)
        );
        assert_eq!(map.family(), MapFamily::Planar);
    }

    #[test]
    fn test_with_control_parameter_keeps_b() {
        let map = HenonMap::new(1.4, 0.2).with_control_parameter(1.0);
        assert_eq!(map, HenonMap::new(1.0, 0.2));
    }
}
