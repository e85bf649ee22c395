//! Map Kernels: Low-Dimensional Chaotic Recurrences
//!
//! - **Logistic**: Scalar period-doubling route to chaos
//! - **Hénon**: Planar dissipative strange attractor
//! - **Standard**: Area-preserving map on the torus (Hamiltonian chaos)
//!
//! Each kernel is a pure function of its arguments plus a small parameter
//! struct implementing [`DynamicalMap`] and [`Controllable`].

mod traits;
mod logistic;
mod henon;
mod standard;

pub use traits::{DynamicalMap, Controllable, Linearization, MapFamily};
pub use logistic::{LogisticMap, logistic_step};
pub use henon::{HenonMap, PlanarPoint, henon_step};
pub use standard::{StandardMap, TorusPoint, standard_step, wrap_angle};
