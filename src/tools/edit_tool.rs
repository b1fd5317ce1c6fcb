use crate::geometry::LatLng;
use crate::layer::{DrawnLayer, LayerGroup, NativeGeometry};
use crate::map::SurfaceEvent;
use crate::tools::{DrawTool, PointerInput};

#[derive(Debug, Clone, PartialEq)]
struct MoveDrag {
    layer: DrawnLayer,
    origin: LatLng,
    current: LatLng,
}

impl MoveDrag {
    fn delta(&self) -> (f64, f64) {
        (self.current.lat - self.origin.lat, self.current.lng - self.origin.lng)
    }

    fn moved_layer(&self) -> DrawnLayer {
        let (d_lat, d_lng) = self.delta();
        self.layer.translated(d_lat, d_lng)
    }
}

/// Moves the rendered layer by dragging it.
#[derive(Debug, Clone, Default)]
pub struct EditTool {
    drag: Option<MoveDrag>,
}

impl DrawTool for EditTool {
    fn name(&self) -> &'static str {
        "Edit"
    }

    fn hint(&self) -> &'static str {
        "Drag the drawn shape to move it."
    }

    fn on_pointer_down(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent> {
        self.drag = layers
            .layer()
            .filter(|_| input.over_layer)
            .map(|layer| MoveDrag {
                layer: layer.clone(),
                origin: input.pos,
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
        if drag.delta() == (0.0, 0.0) {
            return None;
        }
        Some(SurfaceEvent::Edited {
            layer: drag.moved_layer(),
        })
    }

    fn preview(&self) -> Option<NativeGeometry> {
        self.drag.as_ref().map(|drag| drag.moved_layer().geometry)
    }

    fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grab(pos: LatLng) -> PointerInput {
        PointerInput {
            pos,
            over_layer: true,
        }
    }

    #[test]
    fn dragging_layer_emits_edit_with_same_id() {
        let mut layers = LayerGroup::new();
        let marker = DrawnLayer::marker(LatLng::new(1.0, 1.0));
        layers.add_layer(marker.clone());

        let mut tool = EditTool::default();
        tool.on_pointer_down(&grab(LatLng::new(1.0, 1.0)), &layers);
        tool.on_pointer_move(&grab(LatLng::new(1.5, 1.0)), &layers);
        let event = tool.on_pointer_up(&grab(LatLng::new(2.0, 3.0)), &layers);

        let Some(SurfaceEvent::Edited { layer }) = event else {
            panic!("expected an edit");
        };
        assert_eq!(layer.id, marker.id);
        assert_eq!(layer.geometry, NativeGeometry::LatLng(LatLng::new(2.0, 3.0)));
    }

    #[test]
    fn press_off_the_layer_grabs_nothing() {
        let mut layers = LayerGroup::new();
        layers.add_layer(DrawnLayer::marker(LatLng::new(1.0, 1.0)));

        let mut tool = EditTool::default();
        tool.on_pointer_down(&PointerInput::at(LatLng::new(5.0, 5.0)), &layers);
        assert!(tool.preview().is_none());
        assert!(tool.on_pointer_up(&PointerInput::at(LatLng::new(6.0, 6.0)), &layers).is_none());
    }

    #[test]
    fn empty_group_grabs_nothing() {
        let mut tool = EditTool::default();
        let layers = LayerGroup::new();
        tool.on_pointer_down(&grab(LatLng::new(0.0, 0.0)), &layers);
        assert!(tool.on_pointer_up(&grab(LatLng::new(1.0, 0.0)), &layers).is_none());
    }
}
