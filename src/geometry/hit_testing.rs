use egui::{Pos2, Rect};

use super::Viewport;
use crate::layer::{DrawnLayer, NativeGeometry};

/// Pick radius around a marker, in screen points.
pub const MARKER_HIT_RADIUS: f32 = 12.0;
/// Extra slack around outlined shapes so thin rectangles stay grabbable.
pub const OUTLINE_PADDING: f32 = 4.0;

/// Screen-space bounding box of a drawn layer.
pub fn layer_screen_rect(layer: &DrawnLayer, viewport: &Viewport, canvas: Rect) -> Rect {
    match &layer.geometry {
        NativeGeometry::LatLng(pos) | NativeGeometry::Circle { center: pos, .. } => {
            Rect::from_center_size(
                viewport.to_screen(*pos, canvas),
                egui::Vec2::splat(MARKER_HIT_RADIUS * 2.0),
            )
        }
        NativeGeometry::Bounds(bounds) => Rect::from_two_pos(
            viewport.to_screen(bounds.north_east, canvas),
            viewport.to_screen(bounds.south_west, canvas),
        )
        .expand(OUTLINE_PADDING),
        NativeGeometry::Path(points) => {
            let screen: Vec<Pos2> = points.iter().map(|p| viewport.to_screen(*p, canvas)).collect();
            Rect::from_points(&screen).expand(OUTLINE_PADDING)
        }
    }
}

/// Whether a pointer at `pos` lands on the layer.
pub fn hit_test(layer: &DrawnLayer, pos: Pos2, viewport: &Viewport, canvas: Rect) -> bool {
    match &layer.geometry {
        NativeGeometry::LatLng(center) | NativeGeometry::Circle { center, .. } => {
            viewport.to_screen(*center, canvas).distance(pos) <= MARKER_HIT_RADIUS
        }
        NativeGeometry::Bounds(_) | NativeGeometry::Path(_) => {
            layer_screen_rect(layer, viewport, canvas).contains(pos)
        }
    }
}
