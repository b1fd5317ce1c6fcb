//! The single source of truth for the one active shape.
//!
//! The controller sits between the map surface and the coordinates field. It
//! owns three things that must agree at all times:
//!
//! - the [`SessionState`] (`Empty` or `Committed(shape)`),
//! - the [`LayerGroup`] that renders the committed shape,
//! - the [`OutputSink`] holding the shape's canonical encoding.
//!
//! Every operation updates all three before returning, so no caller can
//! observe one of them stale.
//!
//! # State Transitions
//!
//! ```text
//!             create                 create (replace)
//!  ┌───────┐ ───────► ┌───────────┐ ◄──────┐
//!  │ Empty │          │ Committed │ ───────┘
//!  └───────┘ ◄─────── └───────────┘
//!    ▲   │   delete
//!    └───┘ delete (no-op)
//! ```
use crate::event::{EventBus, SessionEvent};
use crate::geometry::{Shape, codec};
use crate::layer::{DrawnLayer, LayerGroup};

use super::{FormField, OutputSink, SessionState};

#[derive(Debug)]
pub struct DrawSessionController<S: OutputSink = FormField> {
    state: SessionState,
    layers: LayerGroup,
    sink: S,
    event_bus: EventBus,
}

impl<S: OutputSink> DrawSessionController<S> {
    /// Starts an empty session writing into `sink`. Any stale value in the
    /// sink is cleared so the field and state agree from the start.
    pub fn new(mut sink: S) -> Self {
        sink.clear();
        Self {
            state: SessionState::Empty,
            layers: LayerGroup::new(),
            sink,
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn layers(&self) -> &LayerGroup {
        &self.layers
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Current value of the output field.
    pub fn output(&self) -> &str {
        self.sink.read()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Commits `shape`, rendered by `layer`, replacing whatever was there.
    pub fn on_shape_created(&mut self, shape: Shape, layer: DrawnLayer) {
        let displaced = self.layers.clear_layers();
        let layer_id = layer.id;
        self.layers.add_layer(layer);

        let encoded = codec::encode(&shape);
        self.sink.write(&encoded);
        self.state = SessionState::Committed(shape);

        log::info!("committed {} as {encoded:?}", shape.kind_name());

        let event = match displaced {
            Some(old) => SessionEvent::Replaced {
                old_layer_id: old.id,
                layer_id,
                shape,
                encoded,
            },
            None => SessionEvent::Committed {
                layer_id,
                shape,
                encoded,
            },
        };
        self.event_bus.emit(event);
    }

    /// Re-encodes the committed shape after the surface edited its layer in
    /// place. Edits to any other layer are ignored. Returns whether the edit
    /// was applied.
    pub fn on_shape_edited(&mut self, shape: Shape, layer: DrawnLayer) -> bool {
        if !self.layers.contains(layer.id) {
            log::warn!("ignoring edit of layer {} which is not committed", layer.id);
            return false;
        }

        let layer_id = layer.id;
        self.layers.add_layer(layer);

        let encoded = codec::encode(&shape);
        self.sink.write(&encoded);
        self.state = SessionState::Committed(shape);

        log::info!("edited {} to {encoded:?}", shape.kind_name());
        self.event_bus.emit(SessionEvent::Edited {
            layer_id,
            shape,
            encoded,
        });
        true
    }

    /// Empties the session. Safe to call when nothing is committed.
    pub fn on_shape_deleted(&mut self) {
        let removed = self.layers.clear_layers();
        self.sink.clear();
        let was_committed = !self.state.is_empty();
        self.state = SessionState::Empty;

        if was_committed {
            log::info!("cleared committed shape");
            self.event_bus.emit(SessionEvent::Cleared {
                layer_id: removed.map(|layer| layer.id),
            });
        } else {
            log::debug!("delete on empty session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LatLng, LatLngBounds};

    fn controller() -> DrawSessionController {
        DrawSessionController::new(FormField::new("coordinates"))
    }

    #[test]
    fn starts_empty_and_clears_stale_sink() {
        let mut field = FormField::new("coordinates");
        field.write("left over");
        let controller = DrawSessionController::new(field);
        assert!(controller.state().is_empty());
        assert_eq!(controller.output(), "");
        assert!(controller.layers().is_empty());
    }

    #[test]
    fn create_commits_point() {
        let mut controller = controller();
        let pos = LatLng::new(-22.9068, -43.1729);
        controller.on_shape_created(Shape::point(pos), DrawnLayer::marker(pos));
        assert_eq!(controller.output(), "-22.90680, -43.17290");
        assert_eq!(controller.state().name(), "Committed");
        assert_eq!(controller.layers().len(), 1);
    }

    #[test]
    fn edit_of_foreign_layer_is_ignored() {
        let mut controller = controller();
        let pos = LatLng::new(1.0, 1.0);
        controller.on_shape_created(Shape::point(pos), DrawnLayer::marker(pos));

        let stranger = DrawnLayer::marker(LatLng::new(5.0, 5.0));
        let applied = controller.on_shape_edited(Shape::point(LatLng::new(5.0, 5.0)), stranger);

        assert!(!applied);
        assert_eq!(controller.output(), "1.00000, 1.00000");
    }

    #[test]
    fn edit_of_committed_layer_rewrites_output() {
        let mut controller = controller();
        let bounds = LatLngBounds::from_corners(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0));
        let layer = DrawnLayer::rectangle(bounds);
        controller.on_shape_created(Shape::bounding_box(bounds), layer.clone());

        let moved = layer.translated(1.0, 1.0);
        let moved_bounds = bounds.translate(1.0, 1.0);
        assert!(controller.on_shape_edited(Shape::bounding_box(moved_bounds), moved));
        assert_eq!(controller.output(), codec::encode(&Shape::bounding_box(moved_bounds)));
        assert_eq!(controller.state().shape(), Some(&Shape::bounding_box(moved_bounds)));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut controller = controller();
        controller.on_shape_deleted();
        controller.on_shape_deleted();
        assert!(controller.state().is_empty());
        assert_eq!(controller.output(), "");
    }
}
