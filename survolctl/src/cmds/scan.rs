//! `scan`: directory of images in, CSV of converted coordinates out.
//!

use std::fs;

use eyre::Result;
use tracing::{info, trace, warn};

use survol_formats::{prepare_csv, read_gps, ImagePoint};

use crate::cli::ScanOpts;
use crate::error::Status;

/// Walk the directory, convert every image that carries GPS tags and return
/// the batch as CSV text.
///
/// Each image is an independent item: extraction or conversion failures are
/// logged and skipped, the batch goes on.
///
#[tracing::instrument]
pub fn scan_directory(opts: &ScanOpts) -> Result<String> {
    trace!("enter");

    let dir = &opts.directory;
    if !dir.is_dir() {
        return Err(Status::NotADirectory(dir.display().to_string()).into());
    }

    // Deterministic order, the filesystem has none
    //
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    let limit = opts.limit.unwrap_or(usize::MAX);

    let mut points = vec![];
    for path in entries.iter().take(limit) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        match read_gps(path) {
            Ok(tags) => match tags.to_position() {
                Ok(pos) => {
                    trace!("{name} at {pos:?}");
                    points.push(ImagePoint::new(&name, tags.time, pos));
                }
                Err(e) => warn!("skipping {name}: {e}"),
            },
            Err(e) => warn!("skipping {name}: {e}"),
        }
    }
    info!(
        "{} images converted out of {}",
        points.len(),
        entries.len().min(limit)
    );

    prepare_csv(points, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    #[test]
    fn test_scan_not_a_directory() {
        let opts = ScanOpts {
            limit: None,
            output: None,
            directory: PathBuf::from("testdata/nonexistent"),
        };

        let r = scan_directory(&opts);
        assert!(r.is_err());
    }

    #[test]
    fn test_scan_empty_directory() -> Result<()> {
        let dir = std::env::temp_dir().join("survol-scan-empty");
        fs::create_dir_all(&dir)?;

        let opts = ScanOpts {
            limit: None,
            output: None,
            directory: dir,
        };

        // No images found means headers only
        //
        let csv = scan_directory(&opts)?;
        assert!(csv.is_empty() || csv.starts_with("Images"));
        Ok(())
    }
}
