//! Shared fixtures: the IGRF-13 model from 2015 to the 2025 predictive epoch.
#![allow(dead_code)]

use geomag::coefficients::{CoefficientStore, EpochRecord};
use geomag::GeomagneticField;
use serde::Deserialize;

/// Definitive 2015 main field, degree 13, nT.
pub const DGRF_2015: [f64; 195] = [
    // n = 1
    -29441.46, -1501.77, 4795.99,
    // n = 2
    -2445.88, 3012.20, -2845.41, 1676.35, -642.17,
    // n = 3
    1350.33, -2352.26, -115.29, 1225.85, 245.04, 581.69, -538.70,
    // n = 4
    907.42, 813.68, 283.54, 120.49, -188.43, -334.85, 180.95, 70.38, -329.23,
    // n = 5
    -232.91, 360.14, 46.98, 192.35, 196.98, -140.94, -119.14, -157.40, 15.98, 4.30, 100.12,
    // n = 6
    69.55, 67.57, -20.61, 72.79, 33.30, -129.85, 58.74, -28.93, -66.64, 13.14, 7.35, -70.85,
    62.41,
    // n = 7
    81.29, -75.99, -54.27, -6.79, -19.53, 51.82, 5.59, 15.07, 24.45, 9.32, 3.27, -2.88, -27.50,
    6.61, -2.32,
    // n = 8
    23.98, 8.89, 10.04, -16.78, -18.26, -3.16, 13.18, -20.56, -14.60, 13.33, 16.16, 11.76, 5.69,
    -15.98, -9.10, -2.02, 2.26,
    // n = 9
    5.33, 8.83, -21.77, 3.02, 10.76, -3.22, 11.74, 0.67, -6.74, -13.20, -6.88, -0.10, 7.79,
    8.68, 1.04, -9.06, -3.89, -10.54, 8.44,
    // n = 10
    -2.01, -6.26, 3.28, 0.17, -0.40, 0.55, 4.55, -0.55, 4.40, 1.70, -7.92, -0.67, -0.61, 2.13,
    -4.16, 2.33, -2.85, -1.80, -1.12, -3.59, -8.72,
    // n = 11
    3.00, -1.40, 0.00, -2.30, 2.11, 2.08, -0.60, -0.79, -1.05, 0.58, 0.76, -0.70, -0.20, 0.14,
    -2.12, 1.70, -1.44, -0.22, -2.57, 0.44, -2.01, 3.49, -2.34,
    // n = 12
    -2.09, -0.16, -1.08, 0.46, 0.37, 1.23, 1.75, -0.89, -2.19, 0.85, 0.27, 0.10, 0.72, 0.54,
    -0.09, -0.37, 0.29, -0.43, 0.23, 0.22, -0.89, -0.94, -0.16, -0.03, 0.72,
    // n = 13
    -0.02, -0.92, -0.88, 0.42, 0.49, 0.63, 1.56, -0.42, -0.50, 0.96, -1.24, -0.19, -0.10, 0.81,
    0.42, -0.13, -0.04, 0.38, 0.48, 0.08, 0.48, 0.46, -0.30, -0.35, -0.43, -0.36, -0.71,
];

/// 2020 main field, degree 13, nT.
pub const IGRF_2020: [f64; 195] = [
    // n = 1
    -29404.80, -1450.90, 4652.50,
    // n = 2
    -2499.60, 2982.00, -2991.60, 1677.00, -734.60,
    // n = 3
    1363.20, -2381.20, -82.10, 1236.20, 241.90, 525.70, -543.40,
    // n = 4
    903.00, 809.50, 281.90, 86.30, -158.40, -309.40, 199.70, 48.00, -349.70,
    // n = 5
    -234.30, 363.20, 47.70, 187.80, 208.30, -140.70, -121.20, -151.20, 32.30, 13.50, 98.90,
    // n = 6
    66.00, 65.50, -19.10, 72.90, 25.10, -121.50, 52.80, -36.20, -64.50, 13.50, 8.90, -64.70,
    68.10,
    // n = 7
    80.60, -76.70, -51.50, -8.20, -16.90, 56.50, 2.20, 15.80, 23.50, 6.40, -2.20, -7.20, -27.20,
    9.80, -1.80,
    // n = 8
    23.70, 9.70, 8.40, -17.60, -15.30, -0.50, 12.80, -21.10, -11.70, 15.30, 14.90, 13.70, 3.60,
    -16.50, -6.90, -0.30, 2.80,
    // n = 9
    5.00, 8.40, -23.40, 2.90, 11.00, -1.50, 9.80, -1.10, -5.10, -13.20, -6.30, 1.10, 7.80, 8.80,
    0.40, -9.30, -1.40, -11.90, 9.60,
    // n = 10
    -1.90, -6.20, 3.40, -0.10, -0.20, 1.70, 3.60, -0.90, 4.80, 0.70, -8.60, -0.90, -0.10, 1.90,
    -4.30, 1.40, -3.40, -2.40, -0.10, -3.80, -8.80,
    // n = 11
    3.00, -1.40, 0.00, -2.50, 2.50, 2.30, -0.60, -0.90, -0.40, 0.30, 0.60, -0.70, -0.20, -0.10,
    -1.70, 1.40, -1.60, -0.60, -3.00, 0.20, -2.00, 3.10, -2.60,
    // n = 12
    -2.00, -0.10, -1.20, 0.50, 0.50, 1.30, 1.40, -1.20, -1.80, 0.70, 0.10, 0.30, 0.80, 0.50,
    -0.20, -0.30, 0.60, -0.50, 0.20, 0.10, -0.90, -1.10, 0.00, -0.30, 0.50,
    // n = 13
    0.10, -0.90, -0.90, 0.50, 0.60, 0.70, 1.40, -0.30, -0.40, 0.80, -1.30, 0.00, -0.10, 0.80,
    0.30, 0.00, -0.10, 0.40, 0.50, 0.10, 0.50, 0.50, -0.40, -0.50, -0.40, -0.40, -0.60,
];

/// Predictive secular variation for 2020-2025, degree 8, nT/yr.
pub const IGRF13_SV_2020: [f64; 80] = [
    // n = 1
    5.7, 7.4, -25.9,
    // n = 2
    -11.0, -7.0, -30.2, -2.1, -22.4,
    // n = 3
    2.2, -5.9, 6.0, 3.1, -1.1, -12.0, 0.5,
    // n = 4
    -1.2, -1.6, -0.1, -5.9, 6.5, 5.2, 3.6, -5.1, -5.0,
    // n = 5
    -0.3, 0.5, 0.0, -0.6, 2.5, 0.2, -0.6, 1.3, 3.0, 0.9, 0.3,
    // n = 6
    -0.5, -0.3, 0.0, 0.4, -1.6, 1.3, -1.3, -1.4, 0.8, 0.0, 0.0, 0.9, 1.0,
    // n = 7
    -0.1, -0.2, 0.6, 0.0, 0.6, 0.7, -0.8, 0.1, -0.2, -0.5, -1.1, -0.8, 0.1, 0.8, 0.3,
    // n = 8
    0.0, 0.1, -0.2, -0.1, 0.6, 0.4, -0.2, -0.1, 0.5, 0.4, -0.3, 0.3, -0.4, -0.1, 0.5, 0.4, 0.0,
];

/// Store with epochs 2015, 2020 and the predictive 2025 record (degree 8).
pub fn igrf13_store() -> CoefficientStore {
    let published = vec![
        EpochRecord::new(2015, 13, DGRF_2015.to_vec()),
        EpochRecord::new(2020, 13, IGRF_2020.to_vec()),
    ];
    CoefficientStore::with_secular_variation(published, 8, &IGRF13_SV_2020).unwrap()
}

/// One row of `tests/data/igrf13_reference.csv`.
#[derive(Debug, Deserialize)]
pub struct ReferenceRow {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub date: f64,
    pub declination: f64,
    pub declination_sv: f64,
    pub inclination: f64,
    pub inclination_sv: f64,
    pub horizontal_intensity: f64,
    pub horizontal_sv: f64,
    pub north_component: f64,
    pub north_sv: f64,
    pub east_component: f64,
    pub east_sv: f64,
    pub vertical_component: f64,
    pub vertical_sv: f64,
    pub total_intensity: f64,
    pub total_sv: f64,
}

pub fn read_reference_rows() -> Vec<ReferenceRow> {
    let mut reader = csv::Reader::from_path("tests/data/igrf13_reference.csv").unwrap();
    reader.deserialize().map(|row| row.unwrap()).collect()
}

/// Compare two values, treating two NaNs as equal.
pub fn assert_close(name: &str, actual: f64, expected: f64, epsilon: f64) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{name}: expected NaN, got {actual}");
    } else {
        assert!(
            (actual - expected).abs() <= epsilon,
            "{name}: expected {expected}, got {actual}"
        );
    }
}

pub fn assert_field_close(actual: &GeomagneticField, expected: &ReferenceRow, epsilon: f64) {
    assert_close("declination", actual.declination, expected.declination, epsilon);
    assert_close(
        "declination_sv",
        actual.declination_sv,
        expected.declination_sv,
        epsilon,
    );
    assert_close("inclination", actual.inclination, expected.inclination, epsilon);
    assert_close(
        "inclination_sv",
        actual.inclination_sv,
        expected.inclination_sv,
        epsilon,
    );
    assert_close(
        "horizontal_intensity",
        actual.horizontal_intensity,
        expected.horizontal_intensity,
        epsilon,
    );
    assert_close("horizontal_sv", actual.horizontal_sv, expected.horizontal_sv, epsilon);
    assert_close(
        "north_component",
        actual.north_component,
        expected.north_component,
        epsilon,
    );
    assert_close("north_sv", actual.north_sv, expected.north_sv, epsilon);
    assert_close("east_component", actual.east_component, expected.east_component, epsilon);
    assert_close("east_sv", actual.east_sv, expected.east_sv, epsilon);
    assert_close(
        "vertical_component",
        actual.vertical_component,
        expected.vertical_component,
        epsilon,
    );
    assert_close("vertical_sv", actual.vertical_sv, expected.vertical_sv, epsilon);
    assert_close("total_intensity", actual.total_intensity, expected.total_intensity, epsilon);
    assert_close("total_sv", actual.total_sv, expected.total_sv, epsilon);
}
