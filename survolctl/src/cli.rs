//! Module describing all possible commands and sub-commands to the `survolctl`
//! main driver.
//!
//! We have two main commands:
//!
//! - `scan`
//! - `corners`
//!
//! `scan` walks a directory of images, pulls the GPS tags out of each one,
//! converts them to decimal degrees and dumps the batch as CSV into a file or
//! `stdout`.  A failed image is logged and skipped, never aborting the batch.
//!
//! `corners` computes the corner coordinates of the square block around a
//! centre point, either one centre given on the command line or every row of
//! a CSV previously produced by `scan`.
//!
//! `completion` is here just to configure the various shells completion
//! system.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser, ValueEnum};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Hierarchical log output.
    #[clap(short = 'T', long)]
    pub tree: bool,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `corners [-B size] (--lat LAT --lon LON | FILE)`
/// `list centres`
/// `scan [-n N] [-o FILE] DIR`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Block corners around a centre or around every row of a scan CSV
    Corners(CornersOpts),
    /// List known data
    List(ListOpts),
    /// Extract and convert image coordinates from a directory
    Scan(ScanOpts),
    /// Display all module versions
    Version,
}

// ------

/// Options for scanning a directory of images into a CSV.
///
#[derive(Debug, Parser)]
pub struct ScanOpts {
    /// Stop after this many images.
    #[clap(short = 'n', long)]
    pub limit: Option<usize>,
    /// Output file (stdout by default).
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Directory holding the images.
    pub directory: PathBuf,
}

// ------

/// Options for the corner calculation.
///
#[derive(Debug, Parser)]
pub struct CornersOpts {
    /// Offset in metres on each side of the centre (default from config).
    #[clap(short = 'B', long)]
    pub block_size: Option<f64>,
    /// Centre latitude in decimal degrees.
    #[clap(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Centre longitude in decimal degrees.
    #[clap(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,
    /// CSV file produced by `scan`.
    pub file: Option<PathBuf>,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All `list` sub-commands:
///
/// `list centres`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
}

/// These are the sub-commands for `list`
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// List the named centre points from the configuration
    Centres,
}
