//! Coordinate reference system transformations.
//!
//! Geodesics are solved by the `geo` crate; the projection formulas sit
//! on top of them.

pub mod aeqd;
pub mod ellipsoid;
pub mod error;

pub use aeqd::AzimuthalEquidistant;
pub use ellipsoid::Ellipsoid;
pub use error::{ProjectionError, ProjectionResult};
