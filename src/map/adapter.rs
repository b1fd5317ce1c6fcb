use crate::error::DrawError;
use crate::geometry::Shape;
use crate::layer::{DrawnLayer, LayerKind, NativeGeometry};
use crate::state::{DrawSessionController, OutputSink};
use crate::tools::{EditTool, MarkerTool, RectangleTool, ToolType};

use super::{DrawControlConfig, SurfaceEvent};

/// Kinds that can be expressed as a [`Shape`].
const SUPPORTED_KINDS: [LayerKind; 2] = [LayerKind::Marker, LayerKind::Rectangle];

/// Bridges the drawing surface and the session controller.
///
/// This is where the "markers and rectangles only" restriction lives: the
/// palette is built from [`MapSurfaceAdapter::available_tools`], and any
/// other kind of layer that still reaches [`MapSurfaceAdapter::handle`] is
/// rejected before the controller sees it.
#[derive(Debug, Clone)]
pub struct MapSurfaceAdapter {
    config: DrawControlConfig,
}

impl Default for MapSurfaceAdapter {
    fn default() -> Self {
        Self::new(DrawControlConfig::default())
    }
}

impl MapSurfaceAdapter {
    /// Kinds enabled in `config` that have no [`Shape`] counterpart are
    /// switched off with a warning.
    pub fn new(mut config: DrawControlConfig) -> Self {
        let requested = [
            (LayerKind::Polygon, &mut config.polygon),
            (LayerKind::Polyline, &mut config.polyline),
            (LayerKind::Circle, &mut config.circle),
            (LayerKind::CircleMarker, &mut config.circlemarker),
        ];
        for (kind, enabled) in requested {
            if *enabled {
                log::warn!("draw tool {kind} cannot be captured; disabling it");
                *enabled = false;
            }
        }
        Self { config }
    }

    pub fn config(&self) -> &DrawControlConfig {
        &self.config
    }

    /// Fresh instances of every tool the draw control offers.
    pub fn available_tools(&self) -> Vec<ToolType> {
        let mut tools = Vec::new();
        if self.config.marker {
            tools.push(ToolType::Marker(MarkerTool::default()));
        }
        if self.config.rectangle {
            tools.push(ToolType::Rectangle(RectangleTool::default()));
        }
        if self.config.edit {
            tools.push(ToolType::Edit(EditTool::default()));
        }
        tools
    }

    /// Narrows a native layer to the shape it represents.
    pub fn shape_of(&self, layer: &DrawnLayer) -> Result<Shape, DrawError> {
        if !SUPPORTED_KINDS.contains(&layer.kind) || !self.config.allows(layer.kind) {
            return Err(DrawError::DisallowedKind(layer.kind));
        }
        match (&layer.kind, &layer.geometry) {
            (LayerKind::Marker, NativeGeometry::LatLng(pos)) => Ok(Shape::point(*pos)),
            (LayerKind::Rectangle, NativeGeometry::Bounds(bounds)) => Ok(Shape::bounding_box(*bounds)),
            (kind, _) => Err(DrawError::GeometryMismatch { kind: *kind }),
        }
    }

    /// Forwards a surface event to the controller.
    pub fn handle<S: OutputSink>(
        &self,
        event: SurfaceEvent,
        controller: &mut DrawSessionController<S>,
    ) -> Result<(), DrawError> {
        match event {
            SurfaceEvent::Created { layer } => {
                let shape = self.shape_of(&layer)?;
                controller.on_shape_created(shape, layer);
            }
            SurfaceEvent::Edited { layer } => {
                if !self.config.edit {
                    return Err(DrawError::EditDisabled);
                }
                let shape = self.shape_of(&layer)?;
                controller.on_shape_edited(shape, layer);
            }
            SurfaceEvent::Deleted => {
                if !self.config.remove {
                    return Err(DrawError::RemoveDisabled);
                }
                controller.on_shape_deleted();
            }
        }
        Ok(())
    }
}
