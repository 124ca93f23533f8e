pub mod coefficients;
pub mod constants;
pub mod field_elements;
pub mod geodetic;
pub mod geomag;
pub mod geomag_errors;
pub mod synthesis;
pub mod time;

pub use coefficients::{CoefficientStore, EpochRecord};
pub use geomag::{Geomag, GeomagParams, GeomagneticField};
pub use geomag_errors::GeomagError;
