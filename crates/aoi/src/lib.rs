//! Area-of-interest envelopes for imagery requests.
//!
//! Given a point and a radius in kilometres, [`area_of_interest`] returns
//! the WGS84 bounding box of a circular buffer drawn in a local azimuthal
//! equidistant projection, so the radius is a true ground distance.
//!
//! # Example
//!
//! ```
//! let [xmin, ymin, xmax, ymax] = aoi::area_of_interest(51.5, -0.12, 10.0).unwrap();
//! assert!(xmin < xmax && ymin < ymax);
//! ```

pub mod buffer;
pub mod config;
pub mod envelope;

pub use buffer::buffer_point;
pub use config::AoiConfig;
pub use envelope::{area_of_interest, area_of_interest_bbox, area_of_interest_with};
pub use geo_common::{BoundingBox, DownloadError, GeoError, GeoResult};
