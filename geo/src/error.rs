//! Error module
//!

use thiserror::Error;

/// Everything that can go wrong in a single conversion or corner computation.
///
/// Each failure is local to one item; callers processing a batch are expected
/// to report the item and carry on with the rest.
///
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Malformed DMS component: {0}")]
    MalformedInput(String),
    #[error("Unrecognized hemisphere {0}")]
    UnrecognizedHemisphere(String),
    #[error("Invalid block size {0}")]
    InvalidBlockSize(f64),
    #[error("Centre latitude {0} too close to a pole")]
    PolarSingularity(f64),
}
