//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the various survol
//! configuration files.  This is a configuration file/struct neutral loading
//! engine, storing only the base directory and with `load()` read the proper
//! file or the default one.
//!
//! The deserialized configuration is available with `.inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "survol";

/// Every configuration struct carries a version number, checked by the caller
/// against the one it expects.
///
pub trait Versioned {
    fn version(&self) -> usize;
}

/// Configuration loading engine, neutral about the actual file contents.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: Option<T>,
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    fn new() -> Self {
        let basedir = match BaseDirs::new() {
            Some(base) => base.config_dir().join(TAG),
            None => PathBuf::from(".").join(TAG),
        };
        debug!("base = {basedir:?}");

        ConfigFile {
            basedir,
            inner: None,
        }
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        let cfg = self.config_path().join(CONFIG);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on the per-user config directory)
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<ConfigFile<T>> {
        trace!("enter");

        let mut cfg = ConfigFile::<T>::new();

        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => cfg.default_file(),
        };

        if !fname.exists() {
            return Err(eyre!(
                "Unknown config file {:?} and no default in {:?}",
                fname,
                cfg.default_file()
            ));
        }

        trace!("Loading config file {fname:?}");

        let data = fs::read_to_string(fname)?;
        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        cfg.inner = Some(data);
        Ok(cfg)
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Consume the engine and hand back the configuration itself
    ///
    pub fn into_inner(self) -> Option<T> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Foo {
        pub version: usize,
        pub name: String,
    }

    impl Versioned for Foo {
        fn version(&self) -> usize {
            self.version
        }
    }

    #[test]
    fn test_config_engine_load_file() -> Result<()> {
        let cfg = ConfigFile::<Foo>::load(Some(Path::new("testdata/local.hcl")))?;
        let inner = cfg.inner().unwrap();
        assert_eq!(1, inner.version());
        assert_eq!("local", inner.name);
        Ok(())
    }

    #[test]
    fn test_config_engine_load_missing() {
        let cfg = ConfigFile::<Foo>::load(Some(Path::new("testdata/nonexistent.hcl")));
        assert!(cfg.is_err());
    }

    #[test]
    fn test_config_engine_into_inner() -> Result<()> {
        let cfg = ConfigFile::<Foo>::load(Some(Path::new("testdata/local.hcl")))?;
        let inner = cfg.into_inner().unwrap();
        assert_eq!("local", inner.name);
        Ok(())
    }
}
