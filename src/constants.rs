//! # Constants and type definitions for geomag
//!
//! This module centralizes the **reference-model constants**, **numerical thresholds**, and
//! **unit type aliases** used throughout the `geomag` library.
//!
//! ## Overview
//!
//! - Geomagnetic reference radius and the WGS84 ellipsoid used for geodetic → geocentric
//!   conversion
//! - Thresholds that decide when a direction (declination, inclination) is undefined
//! - Pole proximity constants
//! - Unit aliases shared by the resolver, the synthesizer and the orchestrator
//!
//! The ellipsoid is given by the **squares** of its semi-axes in km², which is the form the
//! conversion formulas consume directly.

// -------------------------------------------------------------------------------------------------
// Reference model geometry
// -------------------------------------------------------------------------------------------------

/// Geomagnetic reference radius in kilometers (mean Earth radius used by IGRF).
pub const EARTH_REFERENCE_RADIUS: f64 = 6371.2;

/// Square of the WGS84 semi-major axis, in km².
pub const WGS84_A2: f64 = 40_680_631.59;

/// Square of the WGS84 semi-minor axis, in km².
pub const WGS84_B2: f64 = 40_408_299.98;

/// Highest spherical-harmonic degree the synthesis tables are sized for.
pub const MAX_SUPPORTED_DEGREE: usize = 13;

/// Number of (n, m) Legendre terms for [`MAX_SUPPORTED_DEGREE`], plus the unused slot 0.
pub const LEGENDRE_TABLE_SIZE: usize = MAX_SUPPORTED_DEGREE * (MAX_SUPPORTED_DEGREE + 3) / 2 + 1;

// -------------------------------------------------------------------------------------------------
// Numerical thresholds
// -------------------------------------------------------------------------------------------------

/// Below this intensity (nT) a field direction cannot be determined.
pub const DIRECTION_EPS: f64 = 1e-4;

/// Geodetic latitude used in place of ±90° for the colatitude cosine term.
pub const CLAMPED_POLE_LATITUDE: Degree = 89.999;

/// Distance to a geographic pole (degrees of latitude) within which X, Y and D are undefined.
pub const GEOGRAPHIC_POLE_TOLERANCE: Degree = 0.001;

/// Horizontal intensity (nT) below which declination is reported as undefined.
pub const MAGNETIC_POLE_THRESHOLD: NanoTesla = 100.0;

/// Minutes of arc per degree, used to express angular secular variation.
pub const ARCMIN_PER_DEGREE: f64 = 60.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Magnetic flux density in nanotesla
pub type NanoTesla = f64;
/// Decimal calendar year (e.g. `2019.123`)
pub type DecimalYear = f64;

/// Number of Gauss coefficients (g and h) of a model truncated at degree `nmax`.
///
/// Every degree `n` contributes one `g(n,0)` plus a `(g, h)` pair for each order
/// `m = 1..=n`, hence `2n + 1` values, summing to `nmax·(nmax + 2)`.
#[inline]
pub const fn coefficient_count(nmax: usize) -> usize {
    nmax * (nmax + 2)
}
