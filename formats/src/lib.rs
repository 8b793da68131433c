//! Value records at the boundary of the survol pipeline.
//!
//! Images come in with raw GPS tags (rational triples plus hemisphere
//! letters), go through the `survol-geo` conversion and leave as flat
//! `ImagePoint` records, serialised as CSV for whatever consumes them next.
//!
//! The actual EXIF/TIFF parsing is delegated to the `kamadak-exif` crate;
//! this crate only knows which tags to pull and what shape to hand back.
//!

// Re-export for convenience
//
pub use error::*;
pub use metadata::*;
pub use record::*;

mod error;
mod metadata;
mod record;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
