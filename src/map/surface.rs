use egui::{Color32, CursorIcon, Painter, PointerButton, Rect, Sense, Stroke, Ui};

use crate::geometry::hit_testing::hit_test;
use crate::geometry::{LatLng, Viewport};
use crate::layer::{LayerGroup, NativeGeometry};
use crate::tools::{DrawTool, PointerInput, ToolType};

use super::{MapSurfaceAdapter, SurfaceEvent};

const BACKGROUND: Color32 = Color32::from_rgb(24, 26, 27);
const GRATICULE: Color32 = Color32::from_rgb(52, 56, 58);
const SHAPE_COLOR: Color32 = Color32::from_rgb(51, 136, 255);
const PREVIEW_COLOR: Color32 = Color32::from_rgb(255, 170, 51);
const MARKER_RADIUS: f32 = 6.0;
/// Scroll distance, in points, that changes zoom by one level.
const SCROLL_PER_ZOOM_LEVEL: f64 = 120.0;
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Spacing of graticule lines, in degrees, for a view spanning `span`
/// degrees. Picks the smallest 1-2-5 step giving at most six lines.
pub fn graticule_step(span: f64) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }
    let target = span / 6.0;
    let magnitude = 10f64.powi(target.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|factor| factor * magnitude)
        .find(|step| *step >= target)
        .unwrap_or(10.0 * magnitude)
}

/// Ends the active tool's gesture. A release off the map abandons it.
fn finish_gesture(
    tool: &mut ToolType,
    input: &PointerInput,
    layers: &LayerGroup,
    on_map: bool,
) -> Option<SurfaceEvent> {
    if on_map {
        tool.on_pointer_up(input, layers)
    } else {
        tool.cancel();
        None
    }
}

/// The interactive map: navigation, the draw toolbar, and rendering of the
/// committed layer and any gesture in progress.
#[derive(Debug)]
pub struct MapSurface {
    viewport: Viewport,
    tools: Vec<ToolType>,
    active: Option<usize>,
    remove_enabled: bool,
}

impl MapSurface {
    pub fn new(adapter: &MapSurfaceAdapter, viewport: Viewport) -> Self {
        Self {
            viewport,
            tools: adapter.available_tools(),
            active: None,
            remove_enabled: adapter.config().remove,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        self.active.and_then(|index| self.tools.get(index))
    }

    /// Switches tools, abandoning whatever the previous one was doing.
    /// `None` selects panning.
    pub fn select_tool(&mut self, index: Option<usize>) {
        if let Some(tool) = self.active.and_then(|i| self.tools.get_mut(i)) {
            tool.cancel();
        }
        self.active = index.filter(|i| *i < self.tools.len());
        log::debug!(
            "active tool: {}",
            self.active_tool().map_or("Pan", |tool| tool.name())
        );
    }

    /// Draws the toolbar and map, returning the surface events raised this
    /// frame.
    pub fn show(&mut self, ui: &mut Ui, layers: &LayerGroup) -> Vec<SurfaceEvent> {
        let mut events = Vec::new();
        self.toolbar(ui, layers, &mut events);

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;

        self.navigate(ui, &response, canvas);
        self.route_pointer(ui, &response, canvas, layers, &mut events);
        self.paint(&painter, canvas, layers);
        events
    }

    fn toolbar(&mut self, ui: &mut Ui, layers: &LayerGroup, events: &mut Vec<SurfaceEvent>) {
        ui.horizontal(|ui| {
            if ui.selectable_label(self.active.is_none(), "Pan").clicked() {
                self.select_tool(None);
            }
            for index in 0..self.tools.len() {
                let name = self.tools[index].name();
                if ui.selectable_label(self.active == Some(index), name).clicked() {
                    self.select_tool(Some(index));
                }
            }

            if self.remove_enabled {
                ui.separator();
                if ui
                    .add_enabled(!layers.is_empty(), egui::Button::new("Delete"))
                    .clicked()
                {
                    events.push(SurfaceEvent::Deleted);
                }
            }

            ui.separator();
            let hint = self
                .active_tool()
                .map_or("Drag to pan, scroll to zoom.", |tool| tool.hint());
            ui.weak(hint);
        });
    }

    fn navigate(&mut self, ui: &Ui, response: &egui::Response, canvas: Rect) {
        if let Some(hover) = response.hover_pos() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.viewport
                    .zoom_around(f64::from(scroll) / SCROLL_PER_ZOOM_LEVEL, hover, canvas);
            }
        }

        let panning = response.dragged_by(PointerButton::Secondary)
            || (self.active.is_none() && response.dragged_by(PointerButton::Primary));
        if panning {
            self.viewport.pan(response.drag_delta());
        }
    }

    fn route_pointer(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        canvas: Rect,
        layers: &LayerGroup,
        events: &mut Vec<SurfaceEvent>,
    ) {
        let Some(index) = self.active else {
            return;
        };
        let Some(screen) = ui.input(|i| i.pointer.interact_pos()) else {
            return;
        };

        let input = PointerInput {
            pos: self.viewport.from_screen(screen, canvas),
            over_layer: layers
                .layer()
                .is_some_and(|layer| hit_test(layer, screen, &self.viewport, canvas)),
        };
        let (pressed, released, moving, escape) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.key_pressed(egui::Key::Escape),
            )
        });

        let Some(tool) = self.tools.get_mut(index) else {
            return;
        };

        if response.hovered() {
            let icon = match tool {
                ToolType::Edit(_) if input.over_layer => CursorIcon::Grab,
                ToolType::Edit(_) => CursorIcon::Default,
                ToolType::Marker(_) | ToolType::Rectangle(_) => CursorIcon::Crosshair,
            };
            ui.ctx().set_cursor_icon(icon);
        }

        if escape {
            tool.cancel();
            return;
        }
        if pressed && response.hovered() {
            events.extend(tool.on_pointer_down(&input, layers));
        }
        if moving && response.is_pointer_button_down_on() {
            events.extend(tool.on_pointer_move(&input, layers));
        }
        if released {
            events.extend(finish_gesture(tool, &input, layers, response.contains_pointer()));
        }
    }

    fn paint(&self, painter: &Painter, canvas: Rect, layers: &LayerGroup) {
        painter.rect_filled(canvas, 0.0, BACKGROUND);
        self.paint_graticule(painter, canvas);

        if let Some(layer) = layers.layer() {
            self.paint_geometry(painter, canvas, &layer.geometry, SHAPE_COLOR);
        }
        if let Some(preview) = self.active_tool().and_then(|tool| tool.preview()) {
            self.paint_geometry(painter, canvas, &preview, PREVIEW_COLOR);
        }

        painter.text(
            canvas.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("zoom {:.1}  {}", self.viewport.zoom, self.viewport.center),
            egui::FontId::monospace(11.0),
            Color32::GRAY,
        );
    }

    fn paint_graticule(&self, painter: &Painter, canvas: Rect) {
        let north_west = self.viewport.from_screen(canvas.left_top(), canvas);
        let south_east = self.viewport.from_screen(canvas.right_bottom(), canvas);
        let step = graticule_step(south_east.lng - north_west.lng);
        let stroke = Stroke::new(1.0, GRATICULE);

        let mut lng = (north_west.lng / step).ceil() * step;
        while lng <= south_east.lng {
            let x = self.viewport.to_screen(LatLng::new(north_west.lat, lng), canvas).x;
            painter.vline(x, canvas.y_range(), stroke);
            lng += step;
        }

        let mut lat = (south_east.lat / step).ceil() * step;
        while lat <= north_west.lat {
            let y = self.viewport.to_screen(LatLng::new(lat, north_west.lng), canvas).y;
            painter.hline(canvas.x_range(), y, stroke);
            lat += step;
        }
    }

    fn paint_geometry(&self, painter: &Painter, canvas: Rect, geometry: &NativeGeometry, color: Color32) {
        let to_screen = |pos: LatLng| self.viewport.to_screen(pos, canvas);
        let outline = Stroke::new(2.0, color);

        match geometry {
            NativeGeometry::LatLng(pos) => {
                let center = to_screen(*pos);
                painter.circle_filled(center, MARKER_RADIUS, color);
                painter.circle_stroke(center, MARKER_RADIUS, Stroke::new(1.5, Color32::WHITE));
            }
            NativeGeometry::Bounds(bounds) => {
                let rect = Rect::from_two_pos(to_screen(bounds.north_east), to_screen(bounds.south_west));
                painter.rect_filled(rect, 0.0, color.gamma_multiply(0.2));
                painter.rect_stroke(rect, 0.0, outline);
            }
            NativeGeometry::Path(points) => {
                let points = points.iter().map(|p| to_screen(*p)).collect();
                painter.add(egui::Shape::line(points, outline));
            }
            NativeGeometry::Circle { center, radius_m } => {
                let middle = to_screen(*center);
                let edge = to_screen(center.offset(radius_m / METERS_PER_DEGREE, 0.0));
                painter.circle_stroke(middle, middle.distance(edge), outline);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graticule_steps_follow_one_two_five() {
        assert_eq!(graticule_step(60.0), 10.0);
        assert_eq!(graticule_step(12.0), 2.0);
        assert_eq!(graticule_step(30.0), 5.0);
        assert_eq!(graticule_step(0.0), 1.0);
    }

    #[test]
    fn release_off_the_map_abandons_the_gesture() {
        let layers = LayerGroup::new();
        let press = PointerInput::at(LatLng::new(-22.9, -43.2));
        let release = PointerInput::at(LatLng::new(-23.4, -44.0));

        for mut tool in MapSurfaceAdapter::default().available_tools() {
            tool.on_pointer_down(&press, &layers);
            tool.on_pointer_move(&release, &layers);
            assert!(finish_gesture(&mut tool, &release, &layers, false).is_none());
            assert!(tool.preview().is_none());
        }
    }

    #[test]
    fn release_on_the_map_finishes_the_gesture() {
        let layers = LayerGroup::new();
        let mut tool = ToolType::Rectangle(crate::tools::RectangleTool::default());
        tool.on_pointer_down(&PointerInput::at(LatLng::new(-22.9, -43.2)), &layers);
        let release = PointerInput::at(LatLng::new(-23.4, -44.0));
        tool.on_pointer_move(&release, &layers);

        let event = finish_gesture(&mut tool, &release, &layers, true);
        assert!(matches!(event, Some(SurfaceEvent::Created { .. })));
    }

    #[test]
    fn selecting_out_of_range_tool_falls_back_to_pan() {
        let mut surface = MapSurface::new(&MapSurfaceAdapter::default(), Viewport::default());
        surface.select_tool(Some(1));
        assert_eq!(surface.active_tool().map(|tool| tool.name()), Some("Rectangle"));
        surface.select_tool(Some(42));
        assert!(surface.active_tool().is_none());
    }
}
