//! # Geomag: main field and secular variation at a site
//!
//! [`Geomag`] is the entry point of the library. It holds a shared, read-only
//! [`CoefficientStore`] together with the [`GeomagParams`] that define the accepted input
//! domain, and chains the pipeline for a single query:
//!
//! 1. **Input validation** against the latitude, longitude and altitude ranges.
//! 2. **Coefficient resolution** at the date and one year later
//!    ([`CoefficientStore::resolve`]).
//! 3. **Synthesis** of both field vectors from shared tables
//!    ([`synthesize`](crate::synthesis::synthesize)).
//! 4. **Decomposition** of both vectors into D, I, H, F
//!    ([`decompose`](crate::field_elements::decompose)).
//! 5. **Differencing** into annual rates, with the declination change wrapped into
//!    `(-180°, 180°]` before conversion to arcmin/yr.
//! 6. **Pole overrides**: near a magnetic pole the declination is undefined; at a geographic
//!    pole the north/east split is undefined as well.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use geomag::coefficients::{CoefficientStore, EpochRecord};
//! use geomag::geomag::Geomag;
//!
//! # fn records() -> Vec<EpochRecord> { unimplemented!() }
//! let store = CoefficientStore::new(records()).unwrap();
//! let geomag = Geomag::new(store);
//!
//! let field = geomag.compute_field(59.9, 39.9, 0.0, 2019.123).unwrap();
//! println!("{field}");
//! ```
//!
//! ## Concurrency
//!
//! The store is immutable and kept behind an [`Arc`]; `Geomag` is cheap to clone and can be
//! queried from several threads at once. Each query works on stack-allocated tables.
//!
//! ## See also
//! ------------
//! * [`GeomagneticField`] – the 14 values returned per query.
//! * [`GeomagParams`] – input domain and pole thresholds.
//! * [`GeomagError`] – every failure mode of a query.

pub mod params;
pub mod result;

use std::sync::Arc;

pub use params::{GeomagParams, GeomagParamsBuilder};
pub use result::GeomagneticField;

use crate::coefficients::CoefficientStore;
use crate::constants::{DecimalYear, Degree, Kilometer, ARCMIN_PER_DEGREE};
use crate::field_elements::decompose;
use crate::geomag_errors::{GeomagError, InputField};
use crate::synthesis::synthesize;

#[derive(Debug, Clone)]
pub struct Geomag {
    store: Arc<CoefficientStore>,
    params: GeomagParams,
}

impl Geomag {
    /// Build a calculator over `store` with the default [`GeomagParams`].
    pub fn new(store: impl Into<Arc<CoefficientStore>>) -> Self {
        Self::with_params(store, GeomagParams::default())
    }

    /// Build a calculator over `store` with custom parameters.
    pub fn with_params(store: impl Into<Arc<CoefficientStore>>, params: GeomagParams) -> Self {
        Geomag {
            store: store.into(),
            params,
        }
    }

    pub fn store(&self) -> &Arc<CoefficientStore> {
        &self.store
    }

    pub fn params(&self) -> &GeomagParams {
        &self.params
    }

    /// Compute the seven field elements and their annual rates of change.
    ///
    /// Arguments
    /// -----------------
    /// * `lat`: geodetic latitude in degrees, north positive.
    /// * `lon`: longitude in degrees, east positive.
    /// * `alt`: height above the WGS84 ellipsoid in km.
    /// * `date`: decimal year (e.g. `2019.123`).
    ///
    /// Return
    /// ----------
    /// * A [`GeomagneticField`]; see its documentation for units and `NaN` conventions.
    ///
    /// Errors
    /// ----------
    /// * [`GeomagError::InputRange`] if a coordinate is outside the configured ranges or
    ///   not a number. Latitude is checked first, then longitude, then altitude.
    /// * [`GeomagError::DateRange`] if `date` is outside the coefficient table.
    /// * [`GeomagError::DegreeMismatch`] if the last bracket cannot be extrapolated.
    pub fn compute_field(
        &self,
        lat: Degree,
        lon: Degree,
        alt: Kilometer,
        date: DecimalYear,
    ) -> Result<GeomagneticField, GeomagError> {
        check_range(InputField::Latitude, lat, &self.params.latitude_range)?;
        check_range(InputField::Longitude, lon, &self.params.longitude_range)?;
        check_range(InputField::Altitude, alt, &self.params.altitude_range)?;

        let resolved = self.store.resolve(date)?;
        let vectors = synthesize(
            lat,
            lon,
            alt,
            resolved.max_degree,
            &resolved.now,
            &resolved.future,
        )?;

        let now = decompose(vectors.now.x, vectors.now.y, vectors.now.z);
        let future = decompose(vectors.future.x, vectors.future.y, vectors.future.z);
        let rates = vectors.secular_variation();

        let mut field = GeomagneticField {
            declination: now.declination.to_degrees(),
            declination_sv: wrap_180(future.declination.to_degrees() - now.declination.to_degrees())
                * ARCMIN_PER_DEGREE,
            inclination: now.inclination.to_degrees(),
            inclination_sv: (future.inclination.to_degrees() - now.inclination.to_degrees())
                * ARCMIN_PER_DEGREE,
            horizontal_intensity: now.horizontal,
            horizontal_sv: future.horizontal - now.horizontal,
            north_component: vectors.now.x,
            north_sv: rates.x,
            east_component: vectors.now.y,
            east_sv: rates.y,
            vertical_component: vectors.now.z,
            vertical_sv: rates.z,
            total_intensity: now.total,
            total_sv: future.total - now.total,
        };

        if now.horizontal < self.params.magnetic_pole_threshold {
            log::debug!(
                "H = {:.3} nT below {} nT at ({lat}, {lon}): declination undefined",
                now.horizontal,
                self.params.magnetic_pole_threshold
            );
            field.declination = f64::NAN;
            field.declination_sv = f64::NAN;
        }

        if 90.0 - lat.abs() <= self.params.geographic_pole_tolerance {
            log::debug!("latitude {lat} at a geographic pole: X, Y and D undefined");
            field.north_component = f64::NAN;
            field.east_component = f64::NAN;
            field.declination = f64::NAN;
            field.north_sv = f64::NAN;
            field.east_sv = f64::NAN;
            field.declination_sv = f64::NAN;
        }

        Ok(field)
    }
}

fn check_range(
    field: InputField,
    value: f64,
    range: &std::ops::RangeInclusive<f64>,
) -> Result<(), GeomagError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GeomagError::InputRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Bring an angle difference in degrees into `(-180, 180]`.
fn wrap_180(angle: Degree) -> Degree {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
