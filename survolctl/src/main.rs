//! Main driver for the `survolctl` utility.
//!

use std::fs;
use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::trace;

use survol_common::init_logging;

use crate::cli::{ListSubCommand, Opts, SubCommand};
use crate::cmds::{calculate_corners, list_centres, scan_directory};
use crate::config::Config;

mod cli;
mod cmds;
mod config;
mod error;

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging early, filter level from -v unless RUST_LOG is set
    //
    let filter = match opts.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    init_logging(opts.tree, filter)?;
    trace!("Logging initialised.");

    // Config holds the default block size and the named centre points
    //
    let cfg = Config::load(opts.config.as_deref())?;

    // Banner
    //
    banner()?;

    handle_subcmd(&cfg, &opts)
}

pub fn handle_subcmd(cfg: &Config, opts: &Opts) -> Result<()> {
    match &opts.subcmd {
        // Handle `scan dir`
        //
        SubCommand::Scan(sopts) => {
            trace!("scan");

            let csv = scan_directory(sopts)?;
            match &sopts.output {
                Some(output) => fs::write(output, csv)?,
                None => println!("{csv}"),
            }
        }

        // Handle `corners`
        //
        SubCommand::Corners(copts) => {
            trace!("corners");

            let table = calculate_corners(cfg, copts)?;
            println!("{table}");
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => match lopts.cmd {
            ListSubCommand::Centres => {
                let str = list_centres(cfg)?;
                eprintln!("{}", str);
            }
        },

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and
        //       vice-versa.  Not worth trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", survol_common::version());
            eprintln!("\t{}", survol_geo::version());
            eprintln!("\t{}", survol_formats::version());
        }
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}
