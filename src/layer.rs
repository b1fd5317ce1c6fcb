use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::geometry::{LatLng, LatLngBounds};

/// The kinds of object a map drawing surface can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Marker,
    Rectangle,
    Polygon,
    Polyline,
    Circle,
    CircleMarker,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::Rectangle => "rectangle",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
            Self::Circle => "circle",
            Self::CircleMarker => "circlemarker",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry as the drawing surface describes it, before it is narrowed to a
/// [`crate::geometry::Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeGeometry {
    LatLng(LatLng),
    Bounds(LatLngBounds),
    Path(Vec<LatLng>),
    Circle { center: LatLng, radius_m: f64 },
}

impl NativeGeometry {
    pub fn translate(&self, d_lat: f64, d_lng: f64) -> Self {
        match self {
            Self::LatLng(pos) => Self::LatLng(pos.offset(d_lat, d_lng)),
            Self::Bounds(bounds) => Self::Bounds(bounds.translate(d_lat, d_lng)),
            Self::Path(points) => Self::Path(points.iter().map(|p| p.offset(d_lat, d_lng)).collect()),
            Self::Circle { center, radius_m } => Self::Circle {
                center: center.offset(d_lat, d_lng),
                radius_m: *radius_m,
            },
        }
    }
}

/// A shape object rendered on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLayer {
    /// Unique identifier for the layer
    pub id: Uuid,
    pub kind: LayerKind,
    pub geometry: NativeGeometry,
}

impl DrawnLayer {
    pub fn new(kind: LayerKind, geometry: NativeGeometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            geometry,
        }
    }

    pub fn marker(pos: LatLng) -> Self {
        Self::new(LayerKind::Marker, NativeGeometry::LatLng(pos))
    }

    pub fn rectangle(bounds: LatLngBounds) -> Self {
        Self::new(LayerKind::Rectangle, NativeGeometry::Bounds(bounds))
    }

    /// The same layer moved by the given offsets. The id is kept so the
    /// result is recognised as an edit of this layer.
    pub fn translated(&self, d_lat: f64, d_lng: f64) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            geometry: self.geometry.translate(d_lat, d_lng),
        }
    }
}

/// The display group for drawn shapes. It holds at most one layer.
#[derive(Debug, Clone, Default)]
pub struct LayerGroup {
    slot: Option<DrawnLayer>,
}

impl LayerGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the rendered layer, returning it if there was one.
    pub fn clear_layers(&mut self) -> Option<DrawnLayer> {
        self.slot.take()
    }

    /// Makes `layer` the rendered layer, returning whatever it displaced.
    pub fn add_layer(&mut self, layer: DrawnLayer) -> Option<DrawnLayer> {
        self.slot.replace(layer)
    }

    pub fn layer(&self) -> Option<&DrawnLayer> {
        self.slot.as_ref()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.slot.as_ref().is_some_and(|layer| layer.id == id)
    }

    pub fn len(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_never_holds_more_than_one_layer() {
        let mut group = LayerGroup::new();
        let first = DrawnLayer::marker(LatLng::new(1.0, 2.0));
        let second = DrawnLayer::marker(LatLng::new(3.0, 4.0));

        assert!(group.add_layer(first.clone()).is_none());
        assert_eq!(group.add_layer(second.clone()), Some(first));
        assert_eq!(group.len(), 1);
        assert!(group.contains(second.id));
    }

    #[test]
    fn translated_layer_keeps_its_id() {
        let layer = DrawnLayer::rectangle(LatLngBounds::from_corners(
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 1.0),
        ));
        let moved = layer.translated(0.5, -0.5);
        assert_eq!(moved.id, layer.id);
        assert_eq!(
            moved.geometry,
            NativeGeometry::Bounds(LatLngBounds::from_corners(
                LatLng::new(0.5, -0.5),
                LatLng::new(1.5, 0.5),
            ))
        );
    }
}
