pub mod codec;
pub mod hit_testing;
pub mod projection;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use codec::{CodecError, decode, encode, encode_box, encode_point};
pub use projection::Viewport;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Shifts the coordinate by the given offsets in degrees.
    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}

/// An axis-aligned box described by two opposite corners.
///
/// Built through [`LatLngBounds::from_corners`] the corners are normalized so
/// that `north_east` holds the larger latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub north_east: LatLng,
    pub south_west: LatLng,
}

impl LatLngBounds {
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.north_east.lat == self.south_west.lat || self.north_east.lng == self.south_west.lng
    }

    pub fn translate(&self, d_lat: f64, d_lng: f64) -> Self {
        Self {
            north_east: self.north_east.offset(d_lat, d_lng),
            south_west: self.south_west.offset(d_lat, d_lng),
        }
    }
}

/// The geometry committed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point { latitude: f64, longitude: f64 },
    BoundingBox { north_east: LatLng, south_west: LatLng },
}

impl Shape {
    pub fn point(pos: LatLng) -> Self {
        Self::Point {
            latitude: pos.lat,
            longitude: pos.lng,
        }
    }

    pub fn bounding_box(bounds: LatLngBounds) -> Self {
        Self::BoundingBox {
            north_east: bounds.north_east,
            south_west: bounds.south_west,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Point { .. } => "point",
            Self::BoundingBox { .. } => "bounding box",
        }
    }

    /// The single location a consumer would query for this shape: the point
    /// itself, or the midpoint of the two box corners.
    pub fn center(&self) -> LatLng {
        match *self {
            Self::Point { latitude, longitude } => LatLng::new(latitude, longitude),
            Self::BoundingBox {
                north_east,
                south_west,
            } => LatLng::new(
                (north_east.lat + south_west.lat) / 2.0,
                (north_east.lng + south_west.lng) / 2.0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_from_corners_normalizes_orientation() {
        let bounds = LatLngBounds::from_corners(LatLng::new(-23.0, -43.1), LatLng::new(-22.9, -43.3));
        assert_eq!(bounds.north_east, LatLng::new(-22.9, -43.1));
        assert_eq!(bounds.south_west, LatLng::new(-23.0, -43.3));
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn zero_extent_bounds_are_degenerate() {
        let corner = LatLng::new(10.0, 20.0);
        assert!(LatLngBounds::from_corners(corner, corner).is_degenerate());
        assert!(LatLngBounds::from_corners(corner, LatLng::new(11.0, 20.0)).is_degenerate());
    }

    #[test]
    fn center_of_box_is_midpoint() {
        let shape = Shape::BoundingBox {
            north_east: LatLng::new(2.0, 4.0),
            south_west: LatLng::new(0.0, 0.0),
        };
        assert_eq!(shape.center(), LatLng::new(1.0, 2.0));
    }

    #[test]
    fn center_of_point_is_itself() {
        let shape = Shape::point(LatLng::new(-22.9068, -43.1729));
        assert_eq!(shape.center(), LatLng::new(-22.9068, -43.1729));
    }
}
