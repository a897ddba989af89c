//! Ellipsoid definitions

/// WGS84 ellipsoid, the datum surface SVY21 is defined on
pub struct Wgs84;

impl Wgs84 {
    /// Semi-major axis (equatorial radius) in metres
    pub const A: f64 = 6378137.0;

    /// Flattening
    pub const F: f64 = 1.0 / 298.257223563;

    /// Semi-minor axis (polar radius) in metres
    pub const B: f64 = Self::A * (1.0 - Self::F);

    /// First eccentricity squared
    pub const E2: f64 = 2.0 * Self::F - Self::F * Self::F;
}
