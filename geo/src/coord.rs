//! DMS to decimal degrees conversion.
//!
//! GPS EXIF tags carry each angle as three rationals (degrees, minutes,
//! seconds) plus a one-letter reference giving the hemisphere.  The sign of
//! the decimal value comes from the hemisphere alone, the components
//! themselves are non-negative.
//!

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::trace;

use crate::GeoError;

/// Direction indicator attached to a DMS angle, straight from the EXIF
/// `GPSLatitudeRef`/`GPSLongitudeRef` tags.
///
/// The enumeration is exhaustive on purpose: an indicator that is none of
/// the four values is an error, never a positive-sign default.
///
#[derive(Copy, Clone, Debug, Eq, PartialEq, strum::Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Hemisphere {
    #[strum(serialize = "N", to_string = "North")]
    North,
    #[strum(serialize = "S", to_string = "South")]
    South,
    #[strum(serialize = "E", to_string = "East")]
    East,
    #[strum(serialize = "W", to_string = "West")]
    West,
}

impl Hemisphere {
    /// Parse an EXIF reference string ("N", "South", …).
    ///
    pub fn parse(s: &str) -> Result<Self, GeoError> {
        Hemisphere::from_str(s.trim())
            .map_err(|_| GeoError::UnrecognizedHemisphere(s.to_string()))
    }

    /// Sign carried by the indicator, South and West negate.
    ///
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.,
            Hemisphere::South | Hemisphere::West => -1.,
        }
    }
}

/// One angle in degrees/minutes/seconds.
///
/// Components are validated at construction so that `to_decimal()` can stay
/// infallible.  Minutes and seconds are conventionally below 60 but the
/// accumulation does not require it.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    /// Build from pre-divided components, non-negative and finite.
    ///
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Result<Self, GeoError> {
        for v in [degrees, minutes, seconds] {
            if !v.is_finite() || v < 0. {
                return Err(GeoError::MalformedInput(format!(
                    "{v} in {degrees}/{minutes}/{seconds}"
                )));
            }
        }
        Ok(Dms {
            degrees,
            minutes,
            seconds,
        })
    }

    /// Build from the three EXIF rational pairs.
    ///
    /// The zero denominator check has to happen here: the accumulation
    /// formula divides unconditionally.
    ///
    pub fn from_rationals(r: &[(u32, u32); 3]) -> Result<Self, GeoError> {
        if let Some((num, den)) = r.iter().find(|(_, den)| *den == 0) {
            return Err(GeoError::MalformedInput(format!(
                "zero denominator in {num}/{den}"
            )));
        }
        Dms::new(
            r[0].0 as f64 / r[0].1 as f64,
            r[1].0 as f64 / r[1].1 as f64,
            r[2].0 as f64 / r[2].1 as f64,
        )
    }

    /// Accumulate into signed decimal degrees.
    ///
    pub fn to_decimal(&self, hemisphere: Hemisphere) -> f64 {
        hemisphere.sign() * (self.degrees + self.minutes / 60. + self.seconds / 3600.)
    }
}

/// This structure holds a general location object with lat/long in signed
/// decimal degrees.
///
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
        }
    }

    /// Convert both axes independently and assemble the pair.  The two axes
    /// are never cross-validated against each other.
    ///
    pub fn from_dms(lat: &Dms, lat_ref: Hemisphere, lon: &Dms, lon_ref: Hemisphere) -> Self {
        Position {
            latitude: lat.to_decimal(lat_ref),
            longitude: lon.to_decimal(lon_ref),
        }
    }
}

/// Unconverted per-image payload: rational triples plus reference strings,
/// exactly what the GPS IFD carries before any arithmetic.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RawPosition {
    /// Latitude angle as (num, den) pairs
    pub latitude: [(u32, u32); 3],
    /// `GPSLatitudeRef` content
    pub latitude_ref: String,
    /// Longitude angle as (num, den) pairs
    pub longitude: [(u32, u32); 3],
    /// `GPSLongitudeRef` content
    pub longitude_ref: String,
}

impl RawPosition {
    /// Full conversion for one item, first failure wins.
    ///
    pub fn to_position(&self) -> Result<Position, GeoError> {
        let lat = Dms::from_rationals(&self.latitude)?;
        let lat_ref = Hemisphere::parse(&self.latitude_ref)?;
        let lon = Dms::from_rationals(&self.longitude)?;
        let lon_ref = Hemisphere::parse(&self.longitude_ref)?;

        Ok(Position::from_dms(&lat, lat_ref, &lon, lon_ref))
    }
}

/// Convert a whole batch, keeping each output tied to its originating
/// identifier.  A failed item is reported in place, the batch goes on.
///
#[tracing::instrument(skip(items))]
pub fn convert_batch<T, I>(items: I) -> Vec<(T, Result<Position, GeoError>)>
where
    I: IntoIterator<Item = (T, RawPosition)>,
{
    trace!("enter");

    items
        .into_iter()
        .map(|(id, raw)| {
            let res = raw.to_position();
            (id, res)
        })
        .collect()
}
