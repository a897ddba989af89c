//! Coordinate value types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Svy21;

/// Geodetic coordinate on the WGS84 ellipsoid, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLonCoordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl LatLonCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Projects onto the SVY21 grid
    pub fn to_svy21(self, projection: &Svy21) -> Svy21Coordinate {
        let (northing, easting) = projection.to_svy21(self.latitude, self.longitude);
        Svy21Coordinate { northing, easting }
    }
}

impl fmt::Display for LatLonCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {} lon {}", self.latitude, self.longitude)
    }
}

/// `x` = longitude, `y` = latitude
impl From<geo::Point> for LatLonCoordinate {
    fn from(p: geo::Point) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl From<LatLonCoordinate> for geo::Point {
    fn from(c: LatLonCoordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

/// Plane coordinate on the SVY21 grid, in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Svy21Coordinate {
    /// Northing in metres
    pub northing: f64,
    /// Easting in metres
    pub easting: f64,
}

impl Svy21Coordinate {
    pub fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// Unprojects back to WGS84 latitude/longitude
    pub fn to_lat_lon(self, projection: &Svy21) -> LatLonCoordinate {
        let (latitude, longitude) = projection.to_lat_lon(self.northing, self.easting);
        LatLonCoordinate {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Svy21Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N {} E {}", self.northing, self.easting)
    }
}

/// `x` = easting, `y` = northing
impl From<geo::Point> for Svy21Coordinate {
    fn from(p: geo::Point) -> Self {
        Self {
            northing: p.y(),
            easting: p.x(),
        }
    }
}

impl From<Svy21Coordinate> for geo::Point {
    fn from(c: Svy21Coordinate) -> Self {
        geo::Point::new(c.easting, c.northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_shortcuts() {
        let proj = Svy21::new();
        let origin = LatLonCoordinate::new(Svy21::ORIGIN_LAT, Svy21::ORIGIN_LON);

        let grid = origin.to_svy21(&proj);
        assert!((grid.northing - Svy21::FALSE_NORTHING).abs() < 1e-3);
        assert!((grid.easting - Svy21::FALSE_EASTING).abs() < 1e-3);

        let back = grid.to_lat_lon(&proj);
        assert!((back.latitude - origin.latitude).abs() < 1e-9);
        assert!((back.longitude - origin.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_geo_point_axis_order() {
        let p = geo::Point::new(28001.642, 38744.572);
        let c = Svy21Coordinate::from(p);
        assert_eq!(c.easting, 28001.642);
        assert_eq!(c.northing, 38744.572);
        assert_eq!(geo::Point::from(c), p);
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = Svy21Coordinate::new(38744.572, 28001.642);
        let json = serde_json::to_string(&c).unwrap();
        let back: Svy21Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
