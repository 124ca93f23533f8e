//! # Spherical-harmonic field synthesis
//!
//! This module evaluates the internal geomagnetic field of a Gauss coefficient model at one
//! site, for **two coefficient vectors at once**: the model at the requested date and the
//! model one year later. The secular variation is the difference of the two results, so both
//! must come from the very same Legendre and longitude tables; evaluating them separately
//! would let rounding differences leak into that difference.
//!
//! ## Algorithm
//!
//! 1. Geodetic → geocentric conversion of the site
//!    ([`geodetic_to_geocentric`](crate::geodetic::geodetic_to_geocentric)).
//! 2. `cos(mλ)`, `sin(mλ)` by angle addition.
//! 3. Schmidt quasi-normalized `P(n,m)` and `∂P/∂θ` by recurrence.
//! 4. One walk over the canonical (n, m) order with a running coefficient index, scaling
//!    each degree by `(a/r)^(n+2)` and accumulating X (north), Y (east) and Z (down) for
//!    both vectors.
//! 5. Rotation of both results back to the geodetic frame.
//!
//! ## Units
//!
//! Coefficients and outputs are in **nT**; latitude and longitude in **degrees**; altitude in
//! **km** above the WGS84 ellipsoid.

pub(crate) mod legendre;

use nalgebra::Vector3;

use crate::constants::{
    coefficient_count, Degree, Kilometer, EARTH_REFERENCE_RADIUS, MAX_SUPPORTED_DEGREE,
};
use crate::geodetic::{geodetic_to_geocentric, GeocentricPosition};
use crate::geomag_errors::GeomagError;
use legendre::{LegendreTable, LongitudeHarmonics};

/// Field vectors synthesized for the requested date and one year later.
///
/// Components are `(X north, Y east, Z down)` in the geodetic frame, in nT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVectors {
    pub now: Vector3<f64>,
    pub future: Vector3<f64>,
}

impl FieldVectors {
    /// Annual change of each component, in nT/yr.
    pub fn secular_variation(&self) -> Vector3<f64> {
        self.future - self.now
    }
}

/// Running (X, Y, Z) sums in the geocentric frame.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    x: f64,
    y: f64,
    z: f64,
}

impl Accumulator {
    fn into_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Synthesize the field of two coefficient vectors at one site.
///
/// Arguments
/// -----------------
/// * `lat`: geodetic latitude in degrees.
/// * `lon`: longitude in degrees, east positive.
/// * `alt`: height above the WGS84 ellipsoid in km.
/// * `nmax`: truncation degree shared by both vectors.
/// * `now`, `future`: coefficient vectors in canonical order, at least
///   `nmax·(nmax + 2)` long.
///
/// Return
/// ----------
/// * A [`FieldVectors`] with the geodetic (X, Y, Z) of both vectors.
///
/// Errors
/// ----------
/// * [`GeomagError::InvalidCoefficientTable`] if `nmax` is outside
///   `1..=MAX_SUPPORTED_DEGREE` or a vector is too short.
///
/// See also
/// ------------
/// * [`CoefficientStore::resolve`](crate::coefficients::CoefficientStore::resolve) – produces
///   matching `now`/`future` vectors and their degree.
/// * [`decompose`](crate::field_elements::decompose) – D, I, H, F from a field vector.
pub fn synthesize(
    lat: Degree,
    lon: Degree,
    alt: Kilometer,
    nmax: usize,
    now: &[f64],
    future: &[f64],
) -> Result<FieldVectors, GeomagError> {
    if nmax == 0 || nmax > MAX_SUPPORTED_DEGREE {
        return Err(GeomagError::InvalidCoefficientTable(format!(
            "synthesis degree {nmax} is outside 1..={MAX_SUPPORTED_DEGREE}"
        )));
    }
    let needed = coefficient_count(nmax);
    if now.len() < needed || future.len() < needed {
        return Err(GeomagError::InvalidCoefficientTable(format!(
            "degree {nmax} needs {needed} coefficients, got {} and {}",
            now.len(),
            future.len()
        )));
    }

    let site = geodetic_to_geocentric(lat, alt);
    let harmonics = LongitudeHarmonics::new(nmax, lon.to_radians());
    let legendre = LegendreTable::new(nmax, site.sin_lat, site.cos_lat);

    let [now_sum, future_sum] = accumulate(&site, &legendre, &harmonics, nmax, [now, future]);

    Ok(FieldVectors {
        now: site.rotate_to_geodetic(&now_sum.into_vector()),
        future: site.rotate_to_geodetic(&future_sum.into_vector()),
    })
}

/// Walk the (n, m) terms once and sum every coefficient vector against the shared tables.
fn accumulate<const N: usize>(
    site: &GeocentricPosition,
    legendre: &LegendreTable,
    harmonics: &LongitudeHarmonics,
    nmax: usize,
    vectors: [&[f64]; N],
) -> [Accumulator; N] {
    let mut sums = [Accumulator::default(); N];
    let ratio = EARTH_REFERENCE_RADIUS / site.radius;
    let mut l = 0;

    for n in 1..=nmax {
        let fn_ = n as f64;
        let radial = ratio.powi(n as i32 + 2);

        for m in 0..=n {
            let p = legendre.p(n, m);
            let q = legendre.q(n, m);

            if m == 0 {
                for (sum, gh) in sums.iter_mut().zip(vectors) {
                    let g = radial * gh[l];
                    sum.x += g * q;
                    sum.z -= g * p;
                }
                l += 1;
                continue;
            }

            let fm = m as f64;
            let (cos_m, sin_m) = (harmonics.cos(m), harmonics.sin(m));

            for (sum, gh) in sums.iter_mut().zip(vectors) {
                let g = radial * gh[l];
                let h = radial * gh[l + 1];

                let c = g * cos_m + h * sin_m;
                sum.x += c * q;
                sum.z -= c * p;

                let s = g * sin_m - h * cos_m;
                sum.y += if site.cos_lat > 0.0 {
                    s * fm * p / ((fn_ + 1.0) * site.cos_lat)
                } else {
                    s * q * site.sin_lat
                };
            }
            l += 2;
        }
    }

    sums
}
