use std::fmt;

use thiserror::Error;

use crate::constants::DecimalYear;

/// Input parameter checked by [`Geomag::compute_field`](crate::geomag::Geomag::compute_field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Latitude,
    Longitude,
    Altitude,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Latitude => write!(f, "latitude"),
            InputField::Longitude => write!(f, "longitude"),
            InputField::Altitude => write!(f, "altitude"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GeomagError {
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    InputRange {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Date {date} is outside the coefficient table range [{min}, {max}]")]
    DateRange {
        date: DecimalYear,
        min: DecimalYear,
        max: DecimalYear,
    },

    #[error(
        "Cannot extrapolate from degree {start_degree} to degree {end_degree}: the last published model must have a higher degree than the predictive model"
    )]
    DegreeMismatch {
        start_degree: usize,
        end_degree: usize,
    },

    #[error("Invalid coefficient table: {0}")]
    InvalidCoefficientTable(String),

    #[error("Invalid geomag parameter: {0}")]
    InvalidParameter(String),
}

impl PartialEq for GeomagError {
    fn eq(&self, other: &Self) -> bool {
        use GeomagError::*;
        match (self, other) {
            (
                InputRange {
                    field: f1,
                    value: v1,
                    min: lo1,
                    max: hi1,
                },
                InputRange {
                    field: f2,
                    value: v2,
                    min: lo2,
                    max: hi2,
                },
            ) => f1 == f2 && v1.to_bits() == v2.to_bits() && lo1 == lo2 && hi1 == hi2,
            (
                DateRange {
                    date: d1,
                    min: lo1,
                    max: hi1,
                },
                DateRange {
                    date: d2,
                    min: lo2,
                    max: hi2,
                },
            ) => d1.to_bits() == d2.to_bits() && lo1 == lo2 && hi1 == hi2,
            (
                DegreeMismatch {
                    start_degree: s1,
                    end_degree: e1,
                },
                DegreeMismatch {
                    start_degree: s2,
                    end_degree: e2,
                },
            ) => s1 == s2 && e1 == e2,
            (InvalidCoefficientTable(a), InvalidCoefficientTable(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            _ => false,
        }
    }
}
