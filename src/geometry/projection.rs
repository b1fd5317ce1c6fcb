use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::LatLng;

/// Edge length of one Web-Mercator tile at zoom 0, in screen points.
pub const TILE_SIZE: f64 = 256.0;
/// Latitude beyond which Web-Mercator diverges.
pub const MAX_LATITUDE: f64 = 85.051_128_78;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 19.0;

/// The visible part of the map: what is centred, and how far zoomed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: LatLng::new(-22.9068, -43.1729),
            zoom: 12.0,
        }
    }
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        let mut viewport = Self { center, zoom };
        viewport.clamp();
        viewport
    }

    fn scale(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    fn project(&self, pos: LatLng) -> (f64, f64) {
        let scale = self.scale();
        let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (pos.lng + 180.0) / 360.0 * scale;
        let y = (0.5 - lat.tan().asinh() / (2.0 * PI)) * scale;
        (x, y)
    }

    fn unproject(&self, x: f64, y: f64) -> LatLng {
        let scale = self.scale();
        let lng = x / scale * 360.0 - 180.0;
        let n = PI - 2.0 * PI * y / scale;
        LatLng::new(n.sinh().atan().to_degrees(), lng)
    }

    fn clamp(&mut self) {
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.center.lat = self.center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    }

    /// Screen position of a coordinate when the map fills `rect`.
    pub fn to_screen(&self, pos: LatLng, rect: Rect) -> Pos2 {
        let (cx, cy) = self.project(self.center);
        let (x, y) = self.project(pos);
        rect.center() + Vec2::new((x - cx) as f32, (y - cy) as f32)
    }

    /// Coordinate under a screen position when the map fills `rect`.
    pub fn from_screen(&self, pos: Pos2, rect: Rect) -> LatLng {
        let (cx, cy) = self.project(self.center);
        let offset = pos - rect.center();
        self.unproject(cx + f64::from(offset.x), cy + f64::from(offset.y))
    }

    /// Moves the map content by `delta` screen points.
    pub fn pan(&mut self, delta: Vec2) {
        let (cx, cy) = self.project(self.center);
        self.center = self.unproject(cx - f64::from(delta.x), cy - f64::from(delta.y));
        self.clamp();
    }

    /// Changes zoom by `delta` levels while keeping the coordinate under
    /// `anchor` fixed on screen.
    pub fn zoom_around(&mut self, delta: f64, anchor: Pos2, rect: Rect) {
        let pinned = self.from_screen(anchor, rect);
        self.zoom += delta;
        self.clamp();
        let drift = anchor - self.to_screen(pinned, rect);
        self.pan(drift);
    }
}
