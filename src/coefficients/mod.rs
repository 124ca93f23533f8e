//! # Epoch coefficient table
//!
//! This module holds the **immutable table of Gauss coefficients** a geomagnetic reference
//! model publishes at fixed epochs, and the resolver that turns it into coefficient vectors
//! for an arbitrary decimal date.
//!
//! ## Layout of a coefficient vector
//!
//! Each [`EpochRecord`](crate::coefficients::EpochRecord) stores the Schmidt quasi-normalized
//! coefficients of one epoch, truncated at its own maximum degree `nmax`, in the canonical order:
//!
//! ```text
//! g(1,0) g(1,1) h(1,1) g(2,0) g(2,1) h(2,1) g(2,2) h(2,2) ... g(nmax,nmax) h(nmax,nmax)
//! ```
//!
//! i.e. degree ascending, order ascending, `g` before `h`, no `h` for `m = 0`. The vector
//! therefore has [`coefficient_count(nmax)`](crate::constants::coefficient_count) entries.
//!
//! ## Degree history
//!
//! The truncation degree is **data**, not a rule: IGRF-13 publishes degree 10 up to 1995,
//! degree 13 from 2000 to 2020, and a degree-8 predictive model for 2025. The resolver
//! handles a degree change inside a bracket with two distinct policies (see
//! [`resolver`](crate::coefficients::resolver)); nothing here assumes a monotonic sequence.
//!
//! ## Construction
//!
//! - [`CoefficientStore::new`](crate::coefficients::CoefficientStore::new) validates a full
//!   list of records (sorted years, one uniform spacing, consistent vector lengths, finite
//!   values) and either returns a complete store or an error; a partially-populated table is
//!   never exposed.
//! - [`CoefficientStore::with_secular_variation`](crate::coefficients::CoefficientStore::with_secular_variation)
//!   builds the trailing predictive epoch from the last published epoch and an annual rate
//!   column, the way the published tables express it.
//!
//! Once built the store is read-only and can be shared between threads behind an `Arc`.

pub mod resolver;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::{coefficient_count, DecimalYear, MAX_SUPPORTED_DEGREE};
use crate::geomag_errors::GeomagError;

pub use resolver::{extrapolate, interpolate, DegreeTransition, ResolvedCoefficients};

/// Coefficient set published at one epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    /// Calendar year of the epoch.
    pub year: i32,
    /// Truncation degree of this model.
    pub max_degree: usize,
    /// `max_degree·(max_degree + 2)` Gauss coefficients in nT, canonical order.
    pub coefficients: Vec<f64>,
}

impl EpochRecord {
    pub fn new(year: i32, max_degree: usize, coefficients: Vec<f64>) -> Self {
        EpochRecord {
            year,
            max_degree,
            coefficients,
        }
    }

    fn validate(&self) -> Result<(), GeomagError> {
        if self.max_degree == 0 || self.max_degree > MAX_SUPPORTED_DEGREE {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "epoch {} has degree {}, expected 1..={MAX_SUPPORTED_DEGREE}",
                self.year, self.max_degree
            )));
        }

        let expected = coefficient_count(self.max_degree);
        if self.coefficients.len() != expected {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "epoch {} holds {} coefficients, degree {} needs {expected}",
                self.year,
                self.coefficients.len(),
                self.max_degree
            )));
        }

        if let Some(index) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "epoch {} has a non-finite coefficient at index {index}",
                self.year
            )));
        }

        Ok(())
    }
}

/// Immutable, validated table of epoch records sorted by year.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientStore {
    records: Vec<EpochRecord>,
    interval: i32,
}

impl CoefficientStore {
    /// Build a store from a complete list of epoch records.
    ///
    /// Arguments
    /// -----------------
    /// * `records`: every epoch of the model, including the trailing predictive epoch,
    ///   sorted by ascending year.
    ///
    /// Return
    /// ----------
    /// * The validated store.
    ///
    /// Errors
    /// ----------
    /// * [`GeomagError::InvalidCoefficientTable`] when fewer than two records are given, when
    ///   years are not strictly increasing with one uniform spacing, when a degree lies
    ///   outside `1..=MAX_SUPPORTED_DEGREE`, when a vector length does not match its degree,
    ///   or when a coefficient is not finite.
    pub fn new(records: Vec<EpochRecord>) -> Result<Self, GeomagError> {
        if records.len() < 2 {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "at least two epochs are required, got {}",
                records.len()
            )));
        }

        records.iter().try_for_each(EpochRecord::validate)?;

        let spacings: Vec<i32> = records
            .iter()
            .tuple_windows()
            .map(|(a, b)| b.year - a.year)
            .collect();

        if spacings.iter().any(|&s| s <= 0) {
            return Err(GeomagError::InvalidCoefficientTable(
                "epoch years must be strictly increasing".into(),
            ));
        }
        if !spacings.iter().all_equal() {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "epochs must be evenly spaced, found spacings {spacings:?}"
            )));
        }

        let interval = spacings[0];
        log::debug!(
            "coefficient store: {} epochs from {} to {} every {interval} years",
            records.len(),
            records[0].year,
            records[records.len() - 1].year
        );

        Ok(CoefficientStore { records, interval })
    }

    /// Build a store from published epochs plus an annual secular-variation column.
    ///
    /// The published tables close with a column of annual rates valid after the last
    /// published epoch. It becomes a predictive record one interval later:
    ///
    /// ```text
    /// predicted[i] = last[i] + rates[i] · interval     for i < sv_degree·(sv_degree + 2)
    /// ```
    ///
    /// The predictive record is truncated at `sv_degree`.
    ///
    /// Arguments
    /// -----------------
    /// * `published`: published epochs sorted by year (at least two, to fix the interval).
    /// * `sv_degree`: truncation degree of the rate column.
    /// * `rates`: annual rates in nT/yr, canonical order.
    ///
    /// Errors
    /// ----------
    /// * [`GeomagError::InvalidCoefficientTable`] if `rates` does not match `sv_degree`,
    ///   if `sv_degree` exceeds the degree of the last published epoch, or if the resulting
    ///   table fails the checks of [`CoefficientStore::new`].
    pub fn with_secular_variation(
        published: Vec<EpochRecord>,
        sv_degree: usize,
        rates: &[f64],
    ) -> Result<Self, GeomagError> {
        let expected = coefficient_count(sv_degree);
        if rates.len() != expected {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "secular variation of degree {sv_degree} needs {expected} rates, got {}",
                rates.len()
            )));
        }

        let (last, previous) = match published.as_slice() {
            [.., previous, last] => (last, previous),
            _ => {
                return Err(GeomagError::InvalidCoefficientTable(
                    "at least two published epochs are required".into(),
                ))
            }
        };

        if sv_degree > last.max_degree || last.coefficients.len() < expected {
            return Err(GeomagError::InvalidCoefficientTable(format!(
                "secular variation degree {sv_degree} exceeds the degree {} of epoch {}",
                last.max_degree, last.year
            )));
        }

        let interval = last.year - previous.year;
        let predicted = last
            .coefficients
            .iter()
            .zip(rates)
            .map(|(value, rate)| value + rate * interval as f64)
            .collect();

        let predictive = EpochRecord::new(last.year + interval, sv_degree, predicted);

        let mut records = published;
        records.push(predictive);
        CoefficientStore::new(records)
    }

    /// All records, sorted by year.
    pub fn records(&self) -> &[EpochRecord] {
        &self.records
    }

    /// Spacing between consecutive epochs, in years.
    pub fn interval(&self) -> i32 {
        self.interval
    }

    /// Year of the first epoch.
    pub fn min_epoch(&self) -> i32 {
        self.records[0].year
    }

    /// Year of the last epoch (the predictive one, when present).
    pub fn max_epoch(&self) -> i32 {
        self.records[self.records.len() - 1].year
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record published at `year`.
    pub fn record(&self, year: i32) -> Option<&EpochRecord> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|index| &self.records[index])
    }

    /// Pair of consecutive records enclosing `date`.
    ///
    /// A date equal to an epoch opens the bracket starting at that epoch; dates at or after
    /// the final epoch use the final bracket. Callers check the table range first.
    pub(crate) fn bracket(&self, date: DecimalYear) -> (&EpochRecord, &EpochRecord) {
        let after = self.records.partition_point(|r| (r.year as f64) <= date);
        let start = after.saturating_sub(1).min(self.records.len() - 2);
        (&self.records[start], &self.records[start + 1])
    }
}
