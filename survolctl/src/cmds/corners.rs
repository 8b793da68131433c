//! `corners`: block corners around one centre or a whole scan CSV.
//!

use std::fs;

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{trace, warn};

use survol_formats::read_csv;
use survol_geo::{BoundingBox, Position};

use crate::cli::CornersOpts;
use crate::config::Config;
use crate::error::Status;

/// Resolve the centres to process, then render all corner sets as one table.
///
/// With a single `--lat/--lon` centre a failure is fatal; going through a
/// scan CSV each row is independent, bad ones are logged and skipped.
///
#[tracing::instrument(skip(cfg))]
pub fn calculate_corners(cfg: &Config, opts: &CornersOpts) -> Result<String> {
    trace!("enter");

    let block_size = opts.block_size.unwrap_or(cfg.block_size);
    let single = opts.file.is_none();

    // Single centre from the command line, or every row of a scan CSV
    //
    let centres: Vec<(String, Position)> = match (opts.lat, opts.lon, &opts.file) {
        (Some(lat), Some(lon), None) => {
            vec![(format!("{lat:.4}, {lon:.4}"), Position::new(lat, lon))]
        }
        (None, None, Some(file)) => read_csv(&fs::read_to_string(file)?)?
            .iter()
            .map(|p| (p.image.clone(), p.position()))
            .collect(),
        _ => return Err(Status::NoCentre.into()),
    };

    let header = vec!["Centre", "Southwest", "Southeast", "Northwest", "Northeast"];
    let mut builder = Builder::default();
    builder.push_record(header);

    for (name, centre) in &centres {
        let bb = match BoundingBox::around(*centre, block_size) {
            Ok(bb) => bb,
            Err(e) if single => return Err(e.into()),
            Err(e) => {
                warn!("skipping {name}: {e}");
                continue;
            }
        };

        let row = vec![
            name.clone(),
            point(&bb.southwest),
            point(&bb.southeast),
            point(&bb.northwest),
            point(&bb.northeast),
        ];
        builder.push_record(row);
    }

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("Corners ({block_size} m):\n{allf}"))
}

/// Fixed precision lat/lon cell.
///
#[inline]
fn point(p: &Position) -> String {
    format!("{:.6}, {:.6}", p.latitude, p.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    fn sample_config() -> Config {
        Config {
            version: 1,
            block_size: 2.,
            centre: BTreeMap::new(),
        }
    }

    #[test]
    fn test_corners_single_centre() -> Result<()> {
        let opts = CornersOpts {
            block_size: None,
            lat: Some(-30.2744),
            lon: Some(149.7981),
            file: None,
        };

        let table = calculate_corners(&sample_config(), &opts)?;
        assert!(table.contains("Southwest"));
        assert!(table.contains("-30.27"));
        Ok(())
    }

    #[test]
    fn test_corners_no_centre() {
        let opts = CornersOpts {
            block_size: None,
            lat: None,
            lon: None,
            file: None,
        };

        let r = calculate_corners(&sample_config(), &opts);
        assert!(r.is_err());
    }

    #[test]
    fn test_corners_single_polar_fails() {
        let opts = CornersOpts {
            block_size: None,
            lat: Some(90.),
            lon: Some(0.),
            file: None,
        };

        let r = calculate_corners(&sample_config(), &opts);
        assert!(r.is_err());
    }
}
