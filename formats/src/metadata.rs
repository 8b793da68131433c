//! EXIF GPS extraction.
//!
//! Pull the GPS IFD fields out of one image file and hand the raw rationals
//! to `survol-geo`.  Rationals are kept undivided on the way out so the zero
//! denominator guard in the conversion sees the original pairs.
//!

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use tracing::trace;

use survol_geo::{Position, RawPosition};

use crate::FormatError;

/// EXIF datetime layout, "2023:01:23 10:12:43"
const EXIF_TIME: &str = "%Y:%m:%d %H:%M:%S";

/// Raw GPS payload of one image, before conversion.
///
#[derive(Clone, Debug)]
pub struct GpsTags {
    /// Both axes, rationals plus reference letters
    pub raw: RawPosition,
    /// `DateTimeOriginal` when present
    pub time: Option<NaiveDateTime>,
}

impl GpsTags {
    /// Run the conversion, one image worth of tags into a decimal position.
    ///
    pub fn to_position(&self) -> Result<Position, FormatError> {
        Ok(self.raw.to_position()?)
    }
}

/// Read the GPS IFD of one image file.
///
/// Reads EXIF from JPEG, TIFF, PNG, WebP and HEIF containers; a file without
/// EXIF or without the four GPS tags is an error, not a default position.
///
#[tracing::instrument]
pub fn read_gps(path: &Path) -> Result<GpsTags, FormatError> {
    trace!("enter");

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| FormatError::NoExif(e.to_string()))?;

    let latitude = rationals(&exif, Tag::GPSLatitude)?;
    let latitude_ref = reference(&exif, Tag::GPSLatitudeRef)?;
    let longitude = rationals(&exif, Tag::GPSLongitude)?;
    let longitude_ref = reference(&exif, Tag::GPSLongitudeRef)?;

    // Capture time, nice to have but optional
    //
    let time = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .map(|f| f.display_value().to_string())
        .and_then(|s| parse_exif_time(&s));

    Ok(GpsTags {
        raw: RawPosition {
            latitude,
            latitude_ref,
            longitude,
            longitude_ref,
        },
        time,
    })
}

/// The three rational pairs of a GPS angle tag, kept undivided.
///
fn rationals(exif: &exif::Exif, tag: Tag) -> Result<[(u32, u32); 3], FormatError> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or_else(|| FormatError::NoGpsData(tag.to_string()))?;

    match &field.value {
        Value::Rational(r) if r.len() >= 3 => Ok([
            (r[0].num, r[0].denom),
            (r[1].num, r[1].denom),
            (r[2].num, r[2].denom),
        ]),
        _ => Err(FormatError::BadTag(tag.to_string())),
    }
}

/// Reference letter ("N", "S", "E" or "W") of a GPS ref tag.
///
fn reference(exif: &exif::Exif, tag: Tag) -> Result<String, FormatError> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or_else(|| FormatError::NoGpsData(tag.to_string()))?;

    match &field.value {
        Value::Ascii(v) if !v.is_empty() => Ok(String::from_utf8_lossy(&v[0]).into_owned()),
        _ => Err(FormatError::BadTag(tag.to_string())),
    }
}

/// EXIF display values for ascii tags come back quoted.
///
fn parse_exif_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim_matches('"'), EXIF_TIME).ok()
}
