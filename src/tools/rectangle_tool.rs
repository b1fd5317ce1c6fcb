use crate::geometry::{LatLng, LatLngBounds};
use crate::layer::{DrawnLayer, LayerGroup, NativeGeometry};
use crate::map::SurfaceEvent;
use crate::tools::{DrawTool, PointerInput};

#[derive(Debug, Clone, Copy, PartialEq)]
struct RectangleDrag {
    anchor: LatLng,
    current: LatLng,
}

impl RectangleDrag {
    fn bounds(&self) -> LatLngBounds {
        LatLngBounds::from_corners(self.anchor, self.current)
    }
}

/// Drags out an axis-aligned rectangle from the press point to the release
/// point.
#[derive(Debug, Clone, Default)]
pub struct RectangleTool {
    drag: Option<RectangleDrag>,
}

impl DrawTool for RectangleTool {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn hint(&self) -> &'static str {
        "Drag on the map to draw a rectangle."
    }

    fn on_pointer_down(&mut self, input: &PointerInput, _layers: &LayerGroup) -> Option<SurfaceEvent> {
        self.drag = Some(RectangleDrag {
            anchor: input.pos,
            current: input.pos,
        });
        None
    }

    fn on_pointer_move(&mut self, input: &PointerInput, _layers: &LayerGroup) -> Option<SurfaceEvent> {
        if let Some(drag) = &mut self.drag {
            drag.current = input.pos;
        }
        None
    }

    fn on_pointer_up(&mut self, input: &PointerInput, _layers: &LayerGroup) -> Option<SurfaceEvent> {
        let mut drag = self.drag.take()?;
        drag.current = input.pos;

        let bounds = drag.bounds();
        if bounds.is_degenerate() {
            log::debug!("discarding zero-area rectangle");
            return None;
        }
        Some(SurfaceEvent::Created {
            layer: DrawnLayer::rectangle(bounds),
        })
    }

    fn preview(&self) -> Option<NativeGeometry> {
        self.drag.map(|drag| NativeGeometry::Bounds(drag.bounds()))
    }

    fn cancel(&mut self) {
        self.drag = None;
    }
}
