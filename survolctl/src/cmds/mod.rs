//! This is the main driver module for all the different commands.
//!

pub use centres::*;
pub use corners::*;
pub use scan::*;

mod centres;
mod corners;
mod scan;
