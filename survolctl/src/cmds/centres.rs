//! `list centres`: show the named centre points from the configuration.
//!

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{trace, warn};

use survol_geo::{BoundingBox, Position};

use crate::config::Config;

/// List the configured centre points with their block corners at the default
/// block size.
///
#[tracing::instrument(skip(cfg))]
pub fn list_centres(cfg: &Config) -> Result<String> {
    trace!("enter");

    let header = vec!["Centre", "Lat/Lon", "Southwest", "Northeast"];

    let mut builder = Builder::default();
    builder.push_record(header);

    cfg.centre.iter().for_each(|(name, c)| {
        let centre = Position::new(c.lat, c.lon);
        let mut row = vec![name.clone(), format!("{:.4}, {:.4}", c.lat, c.lon)];

        match BoundingBox::around(centre, cfg.block_size) {
            Ok(bb) => {
                row.push(format!(
                    "{:.6}, {:.6}",
                    bb.southwest.latitude, bb.southwest.longitude
                ));
                row.push(format!(
                    "{:.6}, {:.6}",
                    bb.northeast.latitude, bb.northeast.longitude
                ));
            }
            Err(e) => {
                warn!("{name}: {e}");
                row.push("-".to_string());
                row.push("-".to_string());
            }
        }
        builder.push_record(row);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("List all centres ({} m):\n{allf}", cfg.block_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use crate::config::Centre;

    #[test]
    fn test_list_centres() -> Result<()> {
        let mut centre = BTreeMap::new();
        centre.insert(
            "narrabri".to_string(),
            Centre {
                lat: -30.2744,
                lon: 149.7981,
            },
        );
        let cfg = Config {
            version: 1,
            block_size: 2.,
            centre,
        };

        let table = list_centres(&cfg)?;
        assert!(table.contains("narrabri"));
        assert!(table.contains("-30.27"));
        Ok(())
    }
}
