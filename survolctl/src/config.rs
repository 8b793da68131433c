//! survolctl configuration.
//!
//! The configuration file holds the default block size for corner
//! calculations and a table of named centre points.  Loaded from the default
//! per-user location or an explicit `-c` path, with an embedded fallback when
//! neither exists.
//!

use std::collections::BTreeMap;
use std::path::Path;

use eyre::{eyre, Result};
use serde::Deserialize;
use tracing::trace;

use survol_common::{ConfigFile, Versioned};

use crate::error::Status;

/// Current version
pub const CVERSION: usize = 1;

/// A named centre point from the configuration file.
///
#[derive(Clone, Debug, Deserialize)]
pub struct Centre {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// Configuration for the CLI tool: default block size and the named centre
/// points used by `corners` and `list`.
///
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Version number for safety
    pub version: usize,
    /// Default block size in metres
    pub block_size: f64,
    /// Named centre points
    pub centre: BTreeMap<String, Centre>,
}

impl Versioned for Config {
    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Load from the given file, the default location, or the embedded
    /// default when neither exists.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Config> {
        let cfg = match ConfigFile::<Config>::load(fname) {
            Ok(cfg) => cfg
                .into_inner()
                .ok_or_else(|| eyre!("empty configuration"))?,
            Err(e) => {
                // An explicitly requested file has to exist
                //
                if fname.is_some() {
                    return Err(e);
                }
                trace!("no config file, using defaults");
                hcl::from_str(include_str!("config.hcl"))?
            }
        };

        if cfg.version() != CVERSION {
            return Err(Status::BadFileVersion(cfg.version()).into());
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() -> Result<()> {
        let cfg: Config = hcl::from_str(include_str!("config.hcl"))?;

        assert_eq!(CVERSION, cfg.version());
        assert!(cfg.block_size > 0.);
        assert!(cfg.centre.contains_key("narrabri"));
        Ok(())
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let cfg = Config::load(Some(Path::new("testdata/nonexistent.hcl")));
        assert!(cfg.is_err());
    }
}
