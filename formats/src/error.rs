//! Error module
//!

use std::io;

use thiserror::Error;

use survol_geo::GeoError;

/// Boundary errors: file level first, then EXIF level, then the geometry
/// core underneath.
///
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O: {0}")]
    Io(#[from] io::Error),
    #[error("No EXIF data: {0}")]
    NoExif(String),
    #[error("No GPS tag {0}")]
    NoGpsData(String),
    #[error("Unusable GPS tag {0}")]
    BadTag(String),
    #[error(transparent)]
    Geo(#[from] GeoError),
}
