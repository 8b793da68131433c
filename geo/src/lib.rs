//! Geometry core for the survol toolkit.
//!
//! Everything here is pure arithmetic over value types: DMS angles as found
//! in EXIF GPS tags, signed decimal positions, and the corners of a square
//! block around a centre point.  No I/O, no shared state, every call is O(1)
//! and freely parallelisable.
//!

pub use bbox::*;
pub use coord::*;
pub use error::*;

mod bbox;
mod coord;
mod error;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
