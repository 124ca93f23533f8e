//! # Coefficient resolution for an arbitrary date
//!
//! Given a decimal date, [`CoefficientStore::resolve`](crate::coefficients::CoefficientStore::resolve)
//! returns two coefficient vectors: one valid at the date itself and one valid exactly one
//! year later. Synthesizing both and differencing the results gives the annual secular
//! variation.
//!
//! ## Interpolation inside a bracket
//!
//! Between two consecutive epochs `start` and `end` every coefficient is linear in time.
//! The fraction of the bracket elapsed is measured in calendar seconds
//! ([`date_factor`](crate::time::date_factor)). When the two models have different
//! truncation degrees, the indices present in only one of them follow one of two policies:
//!
//! | degree change      | extra indices                            | resolved degree |
//! |--------------------|------------------------------------------|-----------------|
//! | `n_s == n_e`       | none                                     | `n_s`           |
//! | `n_s > n_e`        | frozen at the `start` value              | `n_s`           |
//! | `n_s < n_e`        | ramp from zero at `start` to `end` value | `n_e`           |
//!
//! The two policies are separate branches of [`DegreeTransition`].
//!
//! ## Extrapolation past the last epoch
//!
//! The final epoch of a table is a predictive model built from annual rates. For the one-year
//! lookahead near or beyond it, [`extrapolate`] applies the rate `(v_e − v_s) / interval`
//! for the elapsed years since `start`. This requires the predictive model to have a lower
//! degree than the last published model; anything else is reported as
//! [`GeomagError::DegreeMismatch`].

use crate::coefficients::{CoefficientStore, EpochRecord};
use crate::constants::{coefficient_count, DecimalYear};
use crate::geomag_errors::GeomagError;
use crate::time::date_factor;

/// How coefficients beyond the shared degree are handled inside a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeTransition {
    /// Both epochs share the same degree.
    Constant,
    /// The degree decreases: extra terms keep their `start` value.
    Freeze,
    /// The degree increases: extra terms grow linearly from zero.
    RampFromZero,
}

impl DegreeTransition {
    pub fn between(start_degree: usize, end_degree: usize) -> Self {
        match start_degree.cmp(&end_degree) {
            std::cmp::Ordering::Equal => DegreeTransition::Constant,
            std::cmp::Ordering::Greater => DegreeTransition::Freeze,
            std::cmp::Ordering::Less => DegreeTransition::RampFromZero,
        }
    }
}

/// Coefficients resolved for a date and for one year later.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCoefficients {
    /// Coefficient vector valid at the requested date.
    pub now: Vec<f64>,
    /// Coefficient vector valid one year after the requested date.
    pub future: Vec<f64>,
    /// Truncation degree of both vectors.
    pub max_degree: usize,
    /// Degree policy applied in the bracket.
    pub transition: DegreeTransition,
    /// Years of the bracket used for both vectors.
    pub bracket: (i32, i32),
    /// Whether `future` came from the extrapolation branch.
    pub future_extrapolated: bool,
}

/// Interpolate between two epochs.
///
/// Arguments
/// -----------------
/// * `start`, `end`: consecutive epoch records.
/// * `date`: decimal year; values past `end` are allowed and continue the same line.
///
/// Return
/// ----------
/// * `(coefficients, max_degree, transition)` where `coefficients` has
///   `coefficient_count(max_degree)` entries.
///
/// See also
/// ------------
/// * [`date_factor`] – fraction of the bracket elapsed at `date`.
/// * [`extrapolate`] – rate-based continuation past the last epoch.
pub fn interpolate(
    start: &EpochRecord,
    end: &EpochRecord,
    date: DecimalYear,
) -> (Vec<f64>, usize, DegreeTransition) {
    let factor = date_factor(start.year, end.year, date);
    let lerp = |a: f64, b: f64| a + factor * (b - a);
    let transition = DegreeTransition::between(start.max_degree, end.max_degree);

    match transition {
        DegreeTransition::Constant => {
            let coefficients = start
                .coefficients
                .iter()
                .zip(&end.coefficients)
                .map(|(&a, &b)| lerp(a, b))
                .collect();
            (coefficients, start.max_degree, transition)
        }
        DegreeTransition::Freeze => {
            let shared = coefficient_count(end.max_degree);
            let coefficients = start
                .coefficients
                .iter()
                .enumerate()
                .map(|(i, &a)| if i < shared { lerp(a, end.coefficients[i]) } else { a })
                .collect();
            (coefficients, start.max_degree, transition)
        }
        DegreeTransition::RampFromZero => {
            let shared = coefficient_count(start.max_degree);
            let coefficients = end
                .coefficients
                .iter()
                .enumerate()
                .map(|(i, &b)| {
                    if i < shared {
                        lerp(start.coefficients[i], b)
                    } else {
                        factor * b
                    }
                })
                .collect();
            (coefficients, end.max_degree, transition)
        }
    }
}

/// Extrapolate past the last epoch with the annualized rate of the final bracket.
///
/// `date - start.year` is the number of elapsed years (not a bracket fraction). Indices
/// beyond the degree of `end` keep their `start` value.
///
/// Errors
/// ----------
/// * [`GeomagError::DegreeMismatch`] if `start.max_degree <= end.max_degree`.
pub fn extrapolate(
    start: &EpochRecord,
    end: &EpochRecord,
    date: DecimalYear,
) -> Result<Vec<f64>, GeomagError> {
    if start.max_degree <= end.max_degree {
        return Err(GeomagError::DegreeMismatch {
            start_degree: start.max_degree,
            end_degree: end.max_degree,
        });
    }

    let interval = (end.year - start.year) as f64;
    let elapsed = date - start.year as f64;
    let shared = coefficient_count(end.max_degree);

    Ok(start
        .coefficients
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            if i < shared {
                let rate = (end.coefficients[i] - a) / interval;
                a + elapsed * rate
            } else {
                a
            }
        })
        .collect())
}

impl CoefficientStore {
    /// Resolve the coefficient vectors at `date` and at `date + 1`.
    ///
    /// Both vectors come from the bracket enclosing `date`: the lookahead keeps
    /// interpolating along the same line even slightly past the bracket end, so secular
    /// variation is constant inside a bracket. Once the lookahead reaches the final epoch,
    /// it is extrapolated instead.
    ///
    /// Arguments
    /// -----------------
    /// * `date`: decimal year within `[min_epoch, max_epoch]`.
    ///
    /// Return
    /// ----------
    /// * A [`ResolvedCoefficients`] holding both vectors and the resolved degree.
    ///
    /// Errors
    /// ----------
    /// * [`GeomagError::DateRange`] if `date` is outside the table (or NaN).
    /// * [`GeomagError::DegreeMismatch`] if extrapolation is needed and the final bracket
    ///   does not decrease in degree.
    pub fn resolve(&self, date: DecimalYear) -> Result<ResolvedCoefficients, GeomagError> {
        let min = self.min_epoch() as f64;
        let max = self.max_epoch() as f64;
        if !(min..=max).contains(&date) {
            return Err(GeomagError::DateRange { date, min, max });
        }

        let (start, end) = self.bracket(date);
        let (now, max_degree, transition) = interpolate(start, end, date);

        let lookahead = date + 1.0;
        let future_extrapolated = lookahead >= max;
        let future = if future_extrapolated {
            log::debug!(
                "extrapolating {lookahead} from epochs {} (degree {}) and {} (degree {})",
                start.year,
                start.max_degree,
                end.year,
                end.max_degree
            );
            extrapolate(start, end, lookahead)?
        } else {
            interpolate(start, end, lookahead).0
        };

        log::trace!(
            "resolved {date} in bracket {}-{}: degree {max_degree}, {transition:?}",
            start.year,
            end.year
        );

        Ok(ResolvedCoefficients {
            now,
            future,
            max_degree,
            transition,
            bracket: (start.year, end.year),
            future_extrapolated,
        })
    }
}
