use std::fmt;

use serde::Serialize;

use crate::constants::{Degree, NanoTesla};

/// The seven field elements at one site and date, each with its annual rate of change.
///
/// Units
/// -----
/// * `declination`, `inclination`: degrees; their rates in arcmin/yr.
/// * Intensities and components: nT; their rates in nT/yr.
///
/// Undefined values are `NaN`: declination and its rate near a magnetic pole, and the north
/// and east components, the declination and their rates at a geographic pole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeomagneticField {
    pub declination: Degree,
    pub declination_sv: f64,
    pub inclination: Degree,
    pub inclination_sv: f64,
    pub horizontal_intensity: NanoTesla,
    pub horizontal_sv: NanoTesla,
    pub north_component: NanoTesla,
    pub north_sv: NanoTesla,
    pub east_component: NanoTesla,
    pub east_sv: NanoTesla,
    pub vertical_component: NanoTesla,
    pub vertical_sv: NanoTesla,
    pub total_intensity: NanoTesla,
    pub total_sv: NanoTesla,
}

impl fmt::Display for GeomagneticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);

        macro_rules! line {
            ($name:expr, $value:expr, $unit:expr, $sv:expr, $sv_unit:expr) => {
                writeln!(
                    f,
                    "{:<22} {:>14.prec$} {:<3} {:>12.prec$} {}",
                    $name,
                    $value,
                    $unit,
                    $sv,
                    $sv_unit,
                    prec = prec
                )
            };
        }

        line!("Declination (D)", self.declination, "°", self.declination_sv, "arcmin/yr")?;
        line!("Inclination (I)", self.inclination, "°", self.inclination_sv, "arcmin/yr")?;
        line!(
            "Horizontal (H)",
            self.horizontal_intensity,
            "nT",
            self.horizontal_sv,
            "nT/yr"
        )?;
        line!("North (X)", self.north_component, "nT", self.north_sv, "nT/yr")?;
        line!("East (Y)", self.east_component, "nT", self.east_sv, "nT/yr")?;
        line!("Vertical (Z)", self.vertical_component, "nT", self.vertical_sv, "nT/yr")?;
        write!(
            f,
            "{:<22} {:>14.prec$} {:<3} {:>12.prec$} nT/yr",
            "Total (F)",
            self.total_intensity,
            "nT",
            self.total_sv,
            prec = prec
        )
    }
}
