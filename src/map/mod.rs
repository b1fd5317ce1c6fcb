mod adapter;
mod surface;

use serde::{Deserialize, Serialize};

use crate::layer::{DrawnLayer, LayerKind};

pub use adapter::MapSurfaceAdapter;
pub use surface::{MapSurface, graticule_step};

/// Native events raised by the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A shape was finished
    Created { layer: DrawnLayer },
    /// The rendered layer was changed in place
    Edited { layer: DrawnLayer },
    /// The rendered layer was removed
    Deleted,
}

/// Which shapes the draw control offers, and whether drawn shapes may be
/// edited or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawControlConfig {
    pub marker: bool,
    pub rectangle: bool,
    pub polygon: bool,
    pub polyline: bool,
    pub circle: bool,
    pub circlemarker: bool,
    pub edit: bool,
    pub remove: bool,
}

impl Default for DrawControlConfig {
    fn default() -> Self {
        Self {
            marker: true,
            rectangle: true,
            polygon: false,
            polyline: false,
            circle: false,
            circlemarker: false,
            edit: true,
            remove: true,
        }
    }
}

impl DrawControlConfig {
    pub fn allows(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Marker => self.marker,
            LayerKind::Rectangle => self.rectangle,
            LayerKind::Polygon => self.polygon,
            LayerKind::Polyline => self.polyline,
            LayerKind::Circle => self.circle,
            LayerKind::CircleMarker => self.circlemarker,
        }
    }
}
