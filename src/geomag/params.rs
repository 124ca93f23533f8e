//! # Geomag configuration
//!
//! [`GeomagParams`] gathers the input domain accepted by
//! [`Geomag::compute_field`](crate::geomag::Geomag::compute_field) and the two thresholds
//! that decide when directional elements are reported as undefined.
//!
//! ## Quick start
//!
//! ```rust
//! use geomag::geomag::GeomagParams;
//!
//! // Defaults: full globe, -1..=600 km altitude
//! let params = GeomagParams::default();
//!
//! // Restrict the altitude window and loosen the magnetic pole threshold
//! let params = GeomagParams::builder()
//!     .altitude_range(0.0, 100.0)
//!     .magnetic_pole_threshold(500.0)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Parameters
//!
//! | Field | Default | Meaning |
//! |---|---|---|
//! | `latitude_range` | −90..=90 ° | accepted geodetic latitudes |
//! | `longitude_range` | −180..=180 ° | accepted longitudes |
//! | `altitude_range` | −1..=600 km | accepted heights above the ellipsoid |
//! | `magnetic_pole_threshold` | 100 nT | below this H, D and its rate are `NaN` |
//! | `geographic_pole_tolerance` | 0.001 ° | within this of a pole, X, Y, D and their rates are `NaN` |

use std::fmt;
use std::ops::RangeInclusive;

use crate::constants::{
    Degree, Kilometer, NanoTesla, GEOGRAPHIC_POLE_TOLERANCE, MAGNETIC_POLE_THRESHOLD,
};
use crate::geomag_errors::GeomagError;

/// Tunable input domain and pole thresholds for field computation.
///
/// Build a custom instance with [`GeomagParams::builder`]; the builder validates every
/// field before handing the parameters out.
#[derive(Debug, Clone, PartialEq)]
pub struct GeomagParams {
    /// Accepted geodetic latitudes, in degrees. Must lie inside ±90.
    pub latitude_range: RangeInclusive<Degree>,
    /// Accepted longitudes, in degrees.
    pub longitude_range: RangeInclusive<Degree>,
    /// Accepted heights above the WGS84 ellipsoid, in km.
    pub altitude_range: RangeInclusive<Kilometer>,
    /// Horizontal intensity (nT) below which declination is undefined.
    pub magnetic_pole_threshold: NanoTesla,
    /// Latitude distance (degrees) to a geographic pole inside which X, Y and D are undefined.
    pub geographic_pole_tolerance: Degree,
}

impl GeomagParams {
    /// Same as [`GeomagParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a [`GeomagParamsBuilder`] initialized with the defaults.
    pub fn builder() -> GeomagParamsBuilder {
        GeomagParamsBuilder::new()
    }
}

impl Default for GeomagParams {
    fn default() -> Self {
        GeomagParams {
            latitude_range: -90.0..=90.0,
            longitude_range: -180.0..=180.0,
            altitude_range: -1.0..=600.0,
            magnetic_pole_threshold: MAGNETIC_POLE_THRESHOLD,
            geographic_pole_tolerance: GEOGRAPHIC_POLE_TOLERANCE,
        }
    }
}

/// Builder for [`GeomagParams`], with validation.
#[derive(Debug, Clone)]
pub struct GeomagParamsBuilder {
    params: GeomagParams,
}

impl Default for GeomagParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeomagParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: GeomagParams::default(),
        }
    }

    // --- Input domain ---
    pub fn latitude_range(mut self, min: Degree, max: Degree) -> Self {
        self.params.latitude_range = min..=max;
        self
    }
    pub fn longitude_range(mut self, min: Degree, max: Degree) -> Self {
        self.params.longitude_range = min..=max;
        self
    }
    pub fn altitude_range(mut self, min: Kilometer, max: Kilometer) -> Self {
        self.params.altitude_range = min..=max;
        self
    }

    // --- Pole handling ---
    pub fn magnetic_pole_threshold(mut self, v: NanoTesla) -> Self {
        self.params.magnetic_pole_threshold = v;
        self
    }
    pub fn geographic_pole_tolerance(mut self, v: Degree) -> Self {
        self.params.geographic_pole_tolerance = v;
        self
    }

    #[inline]
    fn ordered(range: &RangeInclusive<f64>) -> bool {
        range.start().is_finite() && range.end().is_finite() && range.start() <= range.end()
    }

    #[inline]
    fn ge0(x: f64) -> bool {
        x.is_finite() && x >= 0.0
    }

    /// Validate and produce the [`GeomagParams`].
    ///
    /// Errors
    /// ----------
    /// * [`GeomagError::InvalidParameter`] if a range is inverted or not finite, if the
    ///   latitude range leaves ±90°, or if a threshold is negative or not finite.
    pub fn build(self) -> Result<GeomagParams, GeomagError> {
        let p = &self.params;

        if !Self::ordered(&p.latitude_range) {
            return Err(GeomagError::InvalidParameter(
                "latitude_range must be finite with min <= max".into(),
            ));
        }
        if *p.latitude_range.start() < -90.0 || *p.latitude_range.end() > 90.0 {
            return Err(GeomagError::InvalidParameter(
                "latitude_range must lie inside [-90, 90]".into(),
            ));
        }
        if !Self::ordered(&p.longitude_range) {
            return Err(GeomagError::InvalidParameter(
                "longitude_range must be finite with min <= max".into(),
            ));
        }
        if !Self::ordered(&p.altitude_range) {
            return Err(GeomagError::InvalidParameter(
                "altitude_range must be finite with min <= max".into(),
            ));
        }
        if !Self::ge0(p.magnetic_pole_threshold) {
            return Err(GeomagError::InvalidParameter(
                "magnetic_pole_threshold must be >= 0".into(),
            ));
        }
        if !Self::ge0(p.geographic_pole_tolerance) {
            return Err(GeomagError::InvalidParameter(
                "geographic_pole_tolerance must be >= 0".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for GeomagParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Geomag Parameters")?;
        writeln!(f, "-----------------")?;
        writeln!(
            f,
            "  latitude_range            = [{}, {}] deg",
            self.latitude_range.start(),
            self.latitude_range.end()
        )?;
        writeln!(
            f,
            "  longitude_range           = [{}, {}] deg",
            self.longitude_range.start(),
            self.longitude_range.end()
        )?;
        writeln!(
            f,
            "  altitude_range            = [{}, {}] km",
            self.altitude_range.start(),
            self.altitude_range.end()
        )?;
        writeln!(
            f,
            "  magnetic_pole_threshold   = {} nT",
            self.magnetic_pole_threshold
        )?;
        write!(
            f,
            "  geographic_pole_tolerance = {} deg",
            self.geographic_pole_tolerance
        )
    }
}
