//! Corner calculation for a square block around a centre point.
//!
//! Local equirectangular approximation: metre offsets become degree offsets
//! at the centre latitude.  Only meaningful for blocks small relative to the
//! Earth radius and for centres away from the poles.
//!

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{GeoError, Position};

/// WGS84 equatorial radius in metres.  Ellipsoidal flattening is ignored.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Centres closer than this (in degrees) to a pole are rejected, cos(lat)
/// degenerates there.
const POLAR_EPS: f64 = 0.1;

/// The four corners of a square block, with the centre and block size they
/// were derived from.
///
/// Corner latitudes pair up along the south and north sides, corner
/// longitudes along the west and east sides, and the centre is the midpoint
/// of all four.
///
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BoundingBox {
    pub southwest: Position,
    pub southeast: Position,
    pub northwest: Position,
    pub northeast: Position,
    /// Centre the corners were computed around
    pub center: Position,
    /// Offset used, in metres
    pub block_size: f64,
}

impl BoundingBox {
    /// Compute the corners of the block around `center`.
    ///
    /// NOTE: each side sits at the full `block_size` metres from the centre,
    /// so the block spans twice that on each axis.
    ///
    #[tracing::instrument]
    pub fn around(center: Position, block_size: f64) -> Result<Self, GeoError> {
        trace!("enter");

        if !(block_size > 0.) || !block_size.is_finite() {
            return Err(GeoError::InvalidBlockSize(block_size));
        }
        if center.latitude.abs() >= 90. - POLAR_EPS {
            return Err(GeoError::PolarSingularity(center.latitude));
        }

        // One metre in degrees, along a meridian and along the local parallel
        //
        let lat_deg_per_metre = 180. / (EARTH_RADIUS * PI);
        let lon_deg_per_metre = 180. / (EARTH_RADIUS * center.latitude.to_radians().cos() * PI);

        let lat_offset = block_size * lat_deg_per_metre;
        let lon_offset = block_size * lon_deg_per_metre;

        Ok(BoundingBox {
            southwest: Position::new(center.latitude - lat_offset, center.longitude - lon_offset),
            southeast: Position::new(center.latitude - lat_offset, center.longitude + lon_offset),
            northwest: Position::new(center.latitude + lat_offset, center.longitude - lon_offset),
            northeast: Position::new(center.latitude + lat_offset, center.longitude + lon_offset),
            center,
            block_size,
        })
    }

    /// Generate an array with the four corners, (southwest, southeast,
    /// northwest, northeast) order.
    ///
    pub fn to_polygon(&self) -> [Position; 4] {
        [self.southwest, self.southeast, self.northwest, self.northeast]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_around_narrabri() {
        let centre = Position::new(-30.2744, 149.7981);
        let bb = BoundingBox::around(centre, 2.).unwrap();

        assert!(bb.northeast.latitude > centre.latitude);
        assert!(bb.northeast.longitude > centre.longitude);
        assert!(bb.southwest.latitude < centre.latitude);
        assert!(bb.southwest.longitude < centre.longitude);

        // 2 m along a meridian, in degrees
        //
        let lat_offset = 2. * 180. / (EARTH_RADIUS * PI);
        assert_relative_eq!(
            centre.latitude + lat_offset,
            bb.northeast.latitude,
            epsilon = 1e-12
        );

        // and along the parallel at 30.2744 S
        //
        let lon_offset = lat_offset / centre.latitude.to_radians().cos();
        assert_relative_eq!(
            centre.longitude + lon_offset,
            bb.northeast.longitude,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_around_invariants() {
        let bb = BoundingBox::around(Position::new(50.8, 4.4), 10.).unwrap();

        assert_eq!(bb.southwest.latitude, bb.southeast.latitude);
        assert_eq!(bb.northwest.latitude, bb.northeast.latitude);
        assert_eq!(bb.southwest.longitude, bb.northwest.longitude);
        assert_eq!(bb.southeast.longitude, bb.northeast.longitude);
        assert!(bb.southwest.latitude < bb.northwest.latitude);
        assert!(bb.southwest.longitude < bb.southeast.longitude);
    }

    #[test]
    fn test_around_midpoint_is_centre() {
        let centre = Position::new(-30.2744, 149.7981);
        let bb = BoundingBox::around(centre, 2.).unwrap();

        let mid_lat = (bb.southwest.latitude + bb.northeast.latitude) / 2.;
        let mid_lon = (bb.southwest.longitude + bb.northeast.longitude) / 2.;
        assert_relative_eq!(centre.latitude, mid_lat, epsilon = 1e-9);
        assert_relative_eq!(centre.longitude, mid_lon, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.)]
    #[case(-2.)]
    #[case(f64::NAN)]
    fn test_around_bad_block_size(#[case] sz: f64) {
        let r = BoundingBox::around(Position::new(50.8, 4.4), sz);
        assert!(matches!(r, Err(GeoError::InvalidBlockSize(_))));
    }

    #[rstest]
    #[case(89.95)]
    #[case(-89.9)]
    #[case(90.)]
    fn test_around_polar(#[case] lat: f64) {
        let r = BoundingBox::around(Position::new(lat, 0.), 2.);
        assert!(matches!(r, Err(GeoError::PolarSingularity(_))));
    }

    #[test]
    fn test_lon_offset_grows_with_latitude() {
        let eq = BoundingBox::around(Position::new(0., 0.), 100.).unwrap();
        let mid = BoundingBox::around(Position::new(60., 0.), 100.).unwrap();

        let eq_width = eq.southeast.longitude - eq.southwest.longitude;
        let mid_width = mid.southeast.longitude - mid.southwest.longitude;
        assert!(mid_width > eq_width);
    }

    #[test]
    fn test_to_polygon() {
        let bb = BoundingBox::around(Position::new(50.8, 4.4), 25.).unwrap();

        let poly = bb.to_polygon();
        assert_eq!(bb.southwest, poly[0]);
        assert_eq!(bb.southeast, poly[1]);
        assert_eq!(bb.northwest, poly[2]);
        assert_eq!(bb.northeast, poly[3]);
    }
}
