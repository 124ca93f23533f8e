//! Field direction and intensity elements (D, I, H, F) of a field vector.

use serde::Serialize;

use crate::constants::{NanoTesla, Radian, DIRECTION_EPS};

/// Declination, inclination, horizontal and total intensity of a field vector.
///
/// Angles are in **radians**, intensities in **nT**. Directions that cannot be determined
/// are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldElements {
    pub declination: Radian,
    pub inclination: Radian,
    pub horizontal: NanoTesla,
    pub total: NanoTesla,
}

/// Compute D, I, H and F from the (X north, Y east, Z down) components.
///
/// The declination uses the half-angle form `D = 2·atan2(Y, H + X)`, which stays accurate
/// when the field points almost due south. Thresholds compare against
/// [`DIRECTION_EPS`](crate::constants::DIRECTION_EPS):
///
/// * `F < eps`: D and I are `NaN`.
/// * `H < eps`: D is `NaN`, I is `±π/2`.
/// * `H + X < eps`: the field points due south and D is `π`.
pub fn decompose(x: NanoTesla, y: NanoTesla, z: NanoTesla) -> FieldElements {
    let horizontal = x.hypot(y);
    let total = horizontal.hypot(z);

    if total < DIRECTION_EPS {
        return FieldElements {
            declination: f64::NAN,
            inclination: f64::NAN,
            horizontal,
            total,
        };
    }

    let inclination = z.atan2(horizontal);
    let declination = if horizontal < DIRECTION_EPS {
        f64::NAN
    } else if horizontal + x < DIRECTION_EPS {
        std::f64::consts::PI
    } else {
        2.0 * y.atan2(horizontal + x)
    };

    FieldElements {
        declination,
        inclination,
        horizontal,
        total,
    }
}
