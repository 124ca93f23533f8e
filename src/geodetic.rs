//! # Geodetic ↔ geocentric conversion
//!
//! Field synthesis works in **geocentric spherical** coordinates while inputs and outputs are
//! **geodetic** (WGS84 latitude, height above the ellipsoid). This module converts the input
//! position and carries the small rotation between the two local frames so that the
//! synthesized X/Z components can be turned back into geodetic north/down components.
//!
//! ```text
//!   geodetic (lat, alt) ──► geocentric (r, sinφ, cosφ)  +  rotation (sinδ, cosδ)
//!   geocentric (X, Y, Z) ──rotation──► geodetic (X, Y, Z)
//! ```
//!
//! The ellipsoid enters through the squared semi-axes
//! [`WGS84_A2`](crate::constants::WGS84_A2) and [`WGS84_B2`](crate::constants::WGS84_B2).

use nalgebra::Vector3;

use crate::constants::{
    Degree, Kilometer, CLAMPED_POLE_LATITUDE, GEOGRAPHIC_POLE_TOLERANCE, WGS84_A2, WGS84_B2,
};

/// Geocentric position of a geodetic site and the frame rotation back to geodetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    /// Distance from the Earth's center, in kilometers.
    pub radius: Kilometer,
    /// Sine of the geocentric latitude (cosine of the colatitude).
    pub sin_lat: f64,
    /// Cosine of the geocentric latitude (sine of the colatitude).
    pub cos_lat: f64,
    /// Sine of the angle between the geodetic and geocentric verticals.
    pub sin_delta: f64,
    /// Cosine of the angle between the geodetic and geocentric verticals.
    pub cos_delta: f64,
}

/// Latitude used for the cosine term: within [`GEOGRAPHIC_POLE_TOLERANCE`] of a pole the
/// site is moved to ±[`CLAMPED_POLE_LATITUDE`] so that the colatitude never vanishes.
fn clamp_polar_latitude(lat: Degree) -> Degree {
    if 90.0 - lat < GEOGRAPHIC_POLE_TOLERANCE {
        CLAMPED_POLE_LATITUDE
    } else if 90.0 + lat < GEOGRAPHIC_POLE_TOLERANCE {
        -CLAMPED_POLE_LATITUDE
    } else {
        lat
    }
}

/// Convert a geodetic latitude and altitude into geocentric coordinates.
///
/// Arguments
/// ---------
/// * `lat` - Geodetic latitude in **degrees**.
/// * `alt` - Height above the WGS84 ellipsoid in **kilometers**.
///
/// Returns
/// -------
/// A [`GeocentricPosition`] with the geocentric radius, the sine/cosine of the geocentric
/// latitude and the sine/cosine of the rotation between the two frames.
///
/// Details
/// -------
/// With `a²`, `b²` the squared semi-axes and `φ` the geodetic latitude:
///
/// ```text
/// ρ  = sqrt(a² cos²φ + b² sin²φ)
/// r² = h (h + 2ρ) + (a⁴ cos²φ + b⁴ sin²φ) / ρ²
/// cosδ = (h + ρ) / r
/// sinδ = (a² − b²) / ρ · sinφ cosφ / r
/// ```
///
/// The geocentric latitude is then `φ − δ`. Only the cosine of the latitude is clamped near
/// the poles; the sine keeps the requested latitude.
pub fn geodetic_to_geocentric(lat: Degree, alt: Kilometer) -> GeocentricPosition {
    let sin_lat = lat.to_radians().sin();
    let cos_lat = clamp_polar_latitude(lat).to_radians().cos();

    let aa = WGS84_A2 * cos_lat * cos_lat;
    let bb = WGS84_B2 * sin_lat * sin_lat;
    let cc = aa + bb;
    let rho = cc.sqrt();

    let radius = (alt * (alt + 2.0 * rho) + (WGS84_A2 * aa + WGS84_B2 * bb) / cc).sqrt();
    let cos_delta = (alt + rho) / radius;
    let sin_delta = (WGS84_A2 - WGS84_B2) / rho * sin_lat * cos_lat / radius;

    GeocentricPosition {
        radius,
        sin_lat: sin_lat * cos_delta - cos_lat * sin_delta,
        cos_lat: cos_lat * cos_delta + sin_lat * sin_delta,
        sin_delta,
        cos_delta,
    }
}

impl GeocentricPosition {
    /// Rotate a geocentric (X north, Y east, Z down) vector into the geodetic frame.
    ///
    /// Only X and Z change; the east component is common to both frames.
    pub fn rotate_to_geodetic(&self, field: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            field.x * self.cos_delta + field.z * self.sin_delta,
            field.y,
            field.z * self.cos_delta - field.x * self.sin_delta,
        )
    }
}

#[cfg(test)]
mod geodetic_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_equator_sea_level() {
        let pos = geodetic_to_geocentric(0.0, 0.0);
        assert_relative_eq!(pos.radius, WGS84_A2.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(pos.sin_lat, 0.0, epsilon = 1e-15);
        assert_relative_eq!(pos.cos_lat, 1.0, epsilon = 1e-15);
        assert_relative_eq!(pos.sin_delta, 0.0, epsilon = 1e-15);
        assert_relative_eq!(pos.cos_delta, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pole_sea_level() {
        let pos = geodetic_to_geocentric(90.0, 0.0);
        assert_relative_eq!(pos.radius, WGS84_B2.sqrt(), epsilon = 1e-3);
        assert!(pos.cos_lat > 0.0);
        assert_relative_eq!(pos.sin_lat, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_altitude_increases_radius() {
        let ground = geodetic_to_geocentric(45.0, 0.0);
        let orbit = geodetic_to_geocentric(45.0, 400.0);
        assert_relative_eq!(orbit.radius - ground.radius, 400.0, epsilon = 1e-2);
    }

    #[test]
    fn test_geocentric_latitude_is_smaller() {
        // on an oblate ellipsoid the geocentric latitude lies closer to the equator
        let pos = geodetic_to_geocentric(45.0, 0.0);
        let geocentric_lat = pos.sin_lat.atan2(pos.cos_lat).to_degrees();
        assert!(geocentric_lat < 45.0);
        assert_relative_eq!(geocentric_lat, 44.8076, epsilon = 1e-3);
        assert_relative_eq!(
            pos.sin_lat * pos.sin_lat + pos.cos_lat * pos.cos_lat,
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let pos = geodetic_to_geocentric(59.9, 0.0);
        let v = Vector3::new(14000.0, 3500.0, 51000.0);
        let rotated = pos.rotate_to_geodetic(&v);
        assert_eq!(rotated.y, v.y);
        assert_relative_eq!(rotated.norm(), v.norm(), epsilon = 1e-8);
    }
}
