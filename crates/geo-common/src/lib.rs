//! Common types shared by the area-of-interest and grid crates.

pub mod bbox;
pub mod error;

pub use bbox::BoundingBox;
pub use error::{DownloadError, GeoError, GeoResult};
