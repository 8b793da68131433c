//! Error module
//!

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Status {
    #[error("Bad file version {0}")]
    BadFileVersion(usize),
    #[error("{0} is not a directory")]
    NotADirectory(String),
    #[error("Need either a centre (--lat/--lon) or a scan CSV file")]
    NoCentre,
}
