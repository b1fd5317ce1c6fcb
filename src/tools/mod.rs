use crate::geometry::LatLng;
use crate::layer::{LayerGroup, NativeGeometry};
use crate::map::SurfaceEvent;

/// Pointer state handed to a tool, already converted to map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pos: LatLng,
    /// Whether the pointer is over the rendered layer
    pub over_layer: bool,
}

impl PointerInput {
    pub fn at(pos: LatLng) -> Self {
        Self {
            pos,
            over_layer: false,
        }
    }
}

/// DrawTool defines the interface for everything that turns pointer gestures
/// on the map into surface events.
pub trait DrawTool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Short instruction shown while the tool is active.
    fn hint(&self) -> &'static str;

    /// Handle pointer press on the map.
    fn on_pointer_down(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent>;

    /// Handle pointer movement while the button is held.
    fn on_pointer_move(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent>;

    /// Handle pointer release. Finished shapes are returned from here.
    fn on_pointer_up(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent>;

    /// Geometry of the gesture in progress, for preview rendering.
    fn preview(&self) -> Option<NativeGeometry>;

    /// Abandon any gesture in progress.
    fn cancel(&mut self);
}

mod edit_tool;
mod marker_tool;
mod rectangle_tool;

pub use edit_tool::EditTool;
pub use marker_tool::MarkerTool;
pub use rectangle_tool::RectangleTool;

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Marker(MarkerTool),
    Rectangle(RectangleTool),
    Edit(EditTool),
}

impl DrawTool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Marker(tool) => tool.name(),
            Self::Rectangle(tool) => tool.name(),
            Self::Edit(tool) => tool.name(),
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::Marker(tool) => tool.hint(),
            Self::Rectangle(tool) => tool.hint(),
            Self::Edit(tool) => tool.hint(),
        }
    }

    fn on_pointer_down(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent> {
        match self {
            Self::Marker(tool) => tool.on_pointer_down(input, layers),
            Self::Rectangle(tool) => tool.on_pointer_down(input, layers),
            Self::Edit(tool) => tool.on_pointer_down(input, layers),
        }
    }

    fn on_pointer_move(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent> {
        match self {
            Self::Marker(tool) => tool.on_pointer_move(input, layers),
            Self::Rectangle(tool) => tool.on_pointer_move(input, layers),
            Self::Edit(tool) => tool.on_pointer_move(input, layers),
        }
    }

    fn on_pointer_up(&mut self, input: &PointerInput, layers: &LayerGroup) -> Option<SurfaceEvent> {
        match self {
            Self::Marker(tool) => tool.on_pointer_up(input, layers),
            Self::Rectangle(tool) => tool.on_pointer_up(input, layers),
            Self::Edit(tool) => tool.on_pointer_up(input, layers),
        }
    }

    fn preview(&self) -> Option<NativeGeometry> {
        match self {
            Self::Marker(tool) => tool.preview(),
            Self::Rectangle(tool) => tool.preview(),
            Self::Edit(tool) => tool.preview(),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Marker(tool) => tool.cancel(),
            Self::Rectangle(tool) => tool.cancel(),
            Self::Edit(tool) => tool.cancel(),
        }
    }
}
