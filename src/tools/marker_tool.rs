use crate::geometry::LatLng;
use crate::layer::{DrawnLayer, LayerGroup, NativeGeometry};
use crate::map::SurfaceEvent;
use crate::tools::{DrawTool, PointerInput};

/// Places a marker where the pointer is released.
#[derive(Debug, Clone, Default)]
pub struct MarkerTool {
    pressed: Option<LatLng>,
}

impl DrawTool for MarkerTool {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn hint(&self) -> &'static str {
        "Click the map to place a marker."
    }

    fn on_pointer_down(&mut self, input: &PointerInput, _layers: &LayerGroup) -> Option<SurfaceEvent> {
        self.pressed = Some(input.pos);
        None
    }

    fn on_pointer_move(&mut self, input: &PointerInput, _layers: &LayerGroup) -> Option<SurfaceEvent> {
        if let Some(pressed) = &mut self.pressed {
            *pressed = input.pos;
        }
        None
    }

    fn on_pointer_up(&mut self, input: &PointerInput, _layers: &LayerGroup) -> Option<SurfaceEvent> {
        self.pressed.take()?;
        Some(SurfaceEvent::Created {
            layer: DrawnLayer::marker(input.pos),
        })
    }

    fn preview(&self) -> Option<NativeGeometry> {
        self.pressed.map(NativeGeometry::LatLng)
    }

    fn cancel(&mut self) {
        self.pressed = None;
    }
}
