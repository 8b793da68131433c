//! Flat record produced by the pipeline, one per image.
//!
//! The CSV column layout matches what downstream consumers expect:
//! `Images,Time,Latitude,Longitude`.
//!

use std::fmt::Debug;

use chrono::NaiveDateTime;
use csv::WriterBuilder;
use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::trace;

use survol_geo::Position;

/// One georeferenced image.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImagePoint {
    /// Image file name
    #[serde(rename = "Images")]
    pub image: String,
    /// Capture time from `DateTimeOriginal`, when present
    #[serde(rename = "Time")]
    pub time: Option<NaiveDateTime>,
    /// Latitude in decimal degrees
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl ImagePoint {
    pub fn new(image: &str, time: Option<NaiveDateTime>, pos: Position) -> Self {
        ImagePoint {
            image: image.to_string(),
            time,
            latitude: pos.latitude,
            longitude: pos.longitude,
        }
    }

    /// Position back out of the flat row.
    ///
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}

/// Output the final csv.
///
#[tracing::instrument(skip(data))]
pub fn prepare_csv<T>(data: Vec<T>, header: bool) -> Result<String>
where
    T: Serialize + Debug,
{
    trace!("Generating output…");

    // Prepare the writer
    //
    let mut wtr = WriterBuilder::new()
        .has_headers(header)
        .from_writer(vec![]);

    // Insert data
    //
    data.iter().try_for_each(|rec| wtr.serialize(rec))?;

    // Output final csv
    //
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Load back a CSV produced by `prepare_csv`.
///
#[tracing::instrument(skip(data))]
pub fn read_csv(data: &str) -> Result<Vec<ImagePoint>> {
    trace!("enter");

    let mut rdr = csv::Reader::from_reader(data.as_bytes());
    let points = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(points)
}
