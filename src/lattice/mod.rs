//! Lattice Module: Coupled Map Lattices and Their Spatial Structure
//!
//! A coupled map lattice (CML) places an identical logistic map on every
//! site of a ring and mixes neighboring images each step. Depending on
//! ε and the topology the lattice shows frozen domains, spatiotemporal
//! intermittency, traveling waves or fully developed turbulence.
//!
//! ## Representation
//!
//! - `LatticeState`: `Array1<f64>`, one value per site, kept in [0, 1]
//! - `LatticeHistory`: `Array2<f64>` of shape (time, site), row 0 initial
//!
//! ## References
//!
//! - Kaneko, K. (1989). Pattern dynamics in spatiotemporal chaos.
//!   Physica D.

mod coupling;
mod spectrum;

pub use coupling::{Coupling, CoupledMapLattice, evolve_lattice, random_lattice};
pub use spectrum::{power_spectrum, mean_power_spectrum};
