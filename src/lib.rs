//! # svy21
//!
//! Conversion between the SVY21 plane coordinate system (the Singapore
//! Transverse Mercator grid) and WGS84 latitude/longitude.
//!
//! ## Features
//!
//! - Closed-form forward (lat/lon → northing/easting) and inverse transforms
//! - Reproduces the published SVY21 reference points to survey accuracy
//! - `geo` types for interoperability with the Rust geospatial ecosystem
//! - Whole-geometry reprojection (Point, LineString, Polygon, Multi*)
//!
//! ## Usage
//!
//! ```rust
//! use svy21::Svy21;
//!
//! let proj = Svy21::new();
//!
//! // City Hall, roughly
//! let (northing, easting) = proj.to_svy21(1.2931, 103.8520);
//! let (lat, lon) = proj.to_lat_lon(northing, easting);
//!
//! assert!((lat - 1.2931).abs() < 1e-9);
//! assert!((lon - 103.8520).abs() < 1e-9);
//! ```

pub mod ellipsoid;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod types;

pub use ellipsoid::Wgs84;
pub use error::ProjectionError;
pub use projection::Svy21;
pub use types::{LatLonCoordinate, Svy21Coordinate};
