//! SVY21 Transverse Mercator projection
//!
//! Forward and inverse transforms between WGS84 geodetic coordinates and the
//! SVY21 grid, using the closed-form series from the LINZ transverse-Mercator
//! projection computations. The series coefficients and term ordering follow
//! the published reference implementation so results stay bit-comparable.

use crate::ellipsoid::Wgs84;

const RAD_RATIO: f64 = std::f64::consts::PI / 180.0;

/// SVY21 projection engine.
///
/// All derived constants are computed once in [`Svy21::new`] and never written
/// afterwards, so a single instance is safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Svy21 {
    /// Semi-minor axis, `a * (1 - f)`
    pub b: f64,
    /// First eccentricity squared and its powers
    pub e2: f64,
    pub e4: f64,
    pub e6: f64,
    /// Meridian-arc series coefficients
    pub a0: f64,
    pub a2: f64,
    pub a4: f64,
    pub a6: f64,
}

impl Svy21 {
    /// Origin latitude in degrees (Base 7 at Pierce Reservoir)
    pub const ORIGIN_LAT: f64 = 1.366666;

    /// Origin longitude in degrees
    pub const ORIGIN_LON: f64 = 103.833333;

    /// False northing in metres
    pub const FALSE_NORTHING: f64 = 38744.572;

    /// False easting in metres
    pub const FALSE_EASTING: f64 = 28001.642;

    /// Scale factor at the central meridian
    pub const SCALE_FACTOR: f64 = 1.0;

    /// Derives the projection constants from the WGS84 ellipsoid. Infallible.
    pub fn new() -> Self {
        let b = Wgs84::B;

        let e2 = Wgs84::E2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let a0 = 1.0 - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0);
        let a2 = (3.0 / 8.0) * (e2 + (e4 / 4.0) + (15.0 * e6 / 128.0));
        let a4 = (15.0 / 256.0) * (e4 + (3.0 * e6 / 4.0));
        let a6 = 35.0 * e6 / 3072.0;

        Self {
            b,
            e2,
            e4,
            e6,
            a0,
            a2,
            a4,
            a6,
        }
    }

    /// Meridian arc length from the equator to `lat` (degrees), in metres
    fn meridian_arc(&self, lat: f64) -> f64 {
        let lat_r = lat * RAD_RATIO;
        Wgs84::A
            * ((self.a0 * lat_r) - (self.a2 * (2.0 * lat_r).sin())
                + (self.a4 * (4.0 * lat_r).sin())
                - (self.a6 * (6.0 * lat_r).sin()))
    }

    /// Radius of curvature in the meridian, ρ
    fn radius_meridian(&self, sin2_lat: f64) -> f64 {
        let num = Wgs84::A * (1.0 - self.e2);
        let denom = (1.0 - self.e2 * sin2_lat).powf(1.5);
        num / denom
    }

    /// Radius of curvature in the prime vertical, ν
    fn radius_prime_vertical(&self, sin2_lat: f64) -> f64 {
        let poly = 1.0 - self.e2 * sin2_lat;
        Wgs84::A / poly.sqrt()
    }

    /// Forward transform: WGS84 latitude/longitude (decimal degrees) to SVY21
    /// `(northing, easting)` in metres.
    ///
    /// Total over the reals. Inputs far outside Singapore extrapolate the
    /// series and return mathematically valid but meaningless numbers.
    pub fn to_svy21(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let lat_r = latitude * RAD_RATIO;
        let sin_lat = lat_r.sin();
        let sin2_lat = sin_lat * sin_lat;
        let cos_lat = lat_r.cos();
        let cos2_lat = cos_lat * cos_lat;
        let cos3_lat = cos2_lat * cos_lat;
        let cos4_lat = cos3_lat * cos_lat;
        let cos5_lat = cos3_lat * cos2_lat;
        let cos6_lat = cos5_lat * cos_lat;
        let cos7_lat = cos5_lat * cos2_lat;

        let rho = self.radius_meridian(sin2_lat);
        let v = self.radius_prime_vertical(sin2_lat);
        let psi = v / rho;
        let t = lat_r.tan();
        let w = (longitude - Self::ORIGIN_LON) * RAD_RATIO;

        let m = self.meridian_arc(latitude);
        let m0 = self.meridian_arc(Self::ORIGIN_LAT);

        let w2 = w * w;
        let w4 = w2 * w2;
        let w6 = w4 * w2;
        let w8 = w6 * w2;

        let psi2 = psi * psi;
        let psi3 = psi2 * psi;
        let psi4 = psi2 * psi2;

        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        // Northing
        let n_term1 = w2 / 2.0 * v * sin_lat * cos_lat;
        let n_term2 = w4 / 24.0 * v * sin_lat * cos3_lat * (4.0 * psi2 + psi - t2);
        let n_term3 = w6 / 720.0
            * v
            * sin_lat
            * cos5_lat
            * ((8.0 * psi4) * (11.0 - 24.0 * t2) - (28.0 * psi3) * (1.0 - 6.0 * t2)
                + psi2 * (1.0 - 32.0 * t2)
                - psi * 2.0 * t2
                + t4);
        let n_term4 =
            w8 / 40320.0 * v * sin_lat * cos7_lat * (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6);
        let northing = Self::FALSE_NORTHING
            + Self::SCALE_FACTOR * (m - m0 + n_term1 + n_term2 + n_term3 + n_term4);

        // Easting
        let e_term1 = w2 / 6.0 * cos2_lat * (psi - t2);
        let e_term2 = w4 / 120.0
            * cos4_lat
            * ((4.0 * psi3) * (1.0 - 6.0 * t2) + psi2 * (1.0 + 8.0 * t2) - psi * 2.0 * t2 + t4);
        let e_term3 = w6 / 5040.0 * cos6_lat * (61.0 - 479.0 * t2 + 179.0 * t4 - t6);
        let easting = Self::FALSE_EASTING
            + Self::SCALE_FACTOR * v * w * cos_lat * (1.0 + e_term1 + e_term2 + e_term3);

        (northing, easting)
    }

    /// Inverse transform: SVY21 `(northing, easting)` in metres to WGS84
    /// latitude/longitude in decimal degrees.
    ///
    /// The footpoint latitude comes from the four-term inverse meridian
    /// series; the longitude secant deliberately uses the final latitude, not
    /// the footpoint latitude, matching the reference implementation.
    pub fn to_lat_lon(&self, northing: f64, easting: f64) -> (f64, f64) {
        let n_prime = northing - Self::FALSE_NORTHING;
        let m0 = self.meridian_arc(Self::ORIGIN_LAT);
        let m_prime = m0 + (n_prime / Self::SCALE_FACTOR);
        let n = (Wgs84::A - self.b) / (Wgs84::A + self.b);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;
        let g = Wgs84::A
            * (1.0 - n)
            * (1.0 - n2)
            * (1.0 + (9.0 * n2 / 4.0) + (225.0 * n4 / 64.0))
            * RAD_RATIO;
        let sigma = (m_prime / g) * RAD_RATIO;

        // Footpoint latitude
        let lat_prime_t1 = ((3.0 * n / 2.0) - (27.0 * n3 / 32.0)) * (2.0 * sigma).sin();
        let lat_prime_t2 = ((21.0 * n2 / 16.0) - (55.0 * n4 / 32.0)) * (4.0 * sigma).sin();
        let lat_prime_t3 = (151.0 * n3 / 96.0) * (6.0 * sigma).sin();
        let lat_prime_t4 = (1097.0 * n4 / 512.0) * (8.0 * sigma).sin();
        let lat_prime = sigma + lat_prime_t1 + lat_prime_t2 + lat_prime_t3 + lat_prime_t4;

        let sin_lat_prime = lat_prime.sin();
        let sin2_lat_prime = sin_lat_prime * sin_lat_prime;

        let rho_prime = self.radius_meridian(sin2_lat_prime);
        let v_prime = self.radius_prime_vertical(sin2_lat_prime);
        let psi_prime = v_prime / rho_prime;
        let psi_prime2 = psi_prime * psi_prime;
        let psi_prime3 = psi_prime2 * psi_prime;
        let psi_prime4 = psi_prime3 * psi_prime;
        let t_prime = lat_prime.tan();
        let t_prime2 = t_prime * t_prime;
        let t_prime4 = t_prime2 * t_prime2;
        let t_prime6 = t_prime4 * t_prime2;
        let e_prime = easting - Self::FALSE_EASTING;
        let x = e_prime / (Self::SCALE_FACTOR * v_prime);
        let x2 = x * x;
        let x3 = x2 * x;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        // Latitude
        let lat_factor = t_prime / (Self::SCALE_FACTOR * rho_prime);
        let lat_term1 = lat_factor * ((e_prime * x) / 2.0);
        let lat_term2 = lat_factor
            * ((e_prime * x3) / 24.0)
            * ((-4.0 * psi_prime2) + (9.0 * psi_prime) * (1.0 - t_prime2) + (12.0 * t_prime2));
        let lat_term3 = lat_factor
            * ((e_prime * x5) / 720.0)
            * ((8.0 * psi_prime4) * (11.0 - 24.0 * t_prime2)
                - (12.0 * psi_prime3) * (21.0 - 71.0 * t_prime2)
                + (15.0 * psi_prime2) * (15.0 - 98.0 * t_prime2 + 15.0 * t_prime4)
                + (180.0 * psi_prime) * (5.0 * t_prime2 - 3.0 * t_prime4)
                + 360.0 * t_prime4);
        let lat_term4 = lat_factor
            * ((e_prime * x7) / 40320.0)
            * (1385.0 - 3633.0 * t_prime2 + 4095.0 * t_prime4 + 1575.0 * t_prime6);
        let lat = lat_prime - lat_term1 + lat_term2 - lat_term3 + lat_term4;

        // Longitude
        let sec_lat_prime = 1.0 / lat.cos();
        let lon_term1 = x * sec_lat_prime;
        let lon_term2 = ((x3 * sec_lat_prime) / 6.0) * (psi_prime + 2.0 * t_prime2);
        let lon_term3 = ((x5 * sec_lat_prime) / 120.0)
            * ((-4.0 * psi_prime3) * (1.0 - 6.0 * t_prime2)
                + psi_prime2 * (9.0 - 68.0 * t_prime2)
                + 72.0 * psi_prime * t_prime2
                + 24.0 * t_prime4);
        let lon_term4 = ((x7 * sec_lat_prime) / 5040.0)
            * (61.0 + 662.0 * t_prime2 + 1320.0 * t_prime4 + 720.0 * t_prime6);
        let lon = (Self::ORIGIN_LON * RAD_RATIO) + lon_term1 - lon_term2 + lon_term3 - lon_term4;

        (lat / RAD_RATIO, lon / RAD_RATIO)
    }
}

impl Default for Svy21 {
    fn default() -> Self {
        Self::new()
    }
}
