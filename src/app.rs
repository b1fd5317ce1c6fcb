use crate::config::{CaptureConfig, ResultCard};
use crate::event::ActivityLog;
use crate::geometry::Viewport;
use crate::history::HistoryModal;
use crate::map::{MapSurface, MapSurfaceAdapter, SurfaceEvent};
use crate::panels::{form_panel, results_panel};
use crate::state::{COORDINATES_FIELD, DrawSessionController, FormField};
use crate::widgets::show_history_modal;

/// Entries kept in the activity list.
const ACTIVITY_CAPACITY: usize = 12;

/// The application: map on the left, coordinates field on the right, result
/// rows below. Only the map view is persisted between runs; every run starts
/// with an empty session.
#[derive(Debug)]
pub struct CaptureApp {
    controller: DrawSessionController<FormField>,
    adapter: MapSurfaceAdapter,
    surface: MapSurface,
    modal: HistoryModal,
    cards: Vec<ResultCard>,
    activity: ActivityLog,
}

impl Default for CaptureApp {
    fn default() -> Self {
        Self::from_config(CaptureConfig::default())
    }
}

impl CaptureApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CaptureConfig) -> Self {
        let viewport = cc
            .storage
            .and_then(|storage| eframe::get_value::<Viewport>(storage, eframe::APP_KEY))
            .unwrap_or(config.map);
        Self::with_viewport(config, viewport)
    }

    pub fn from_config(config: CaptureConfig) -> Self {
        let viewport = config.map;
        Self::with_viewport(config, viewport)
    }

    fn with_viewport(config: CaptureConfig, viewport: Viewport) -> Self {
        let adapter = MapSurfaceAdapter::new(config.draw);
        let surface = MapSurface::new(&adapter, viewport);
        let controller = DrawSessionController::new(FormField::new(COORDINATES_FIELD));
        let activity = ActivityLog::new(ACTIVITY_CAPACITY);
        controller.event_bus().subscribe(Box::new(activity.clone()));

        Self {
            controller,
            adapter,
            surface,
            modal: HistoryModal::new(),
            cards: config.cards,
            activity,
        }
    }

    pub fn controller(&self) -> &DrawSessionController<FormField> {
        &self.controller
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Feeds surface events through the adapter. Rejected events are logged
    /// and dropped.
    pub fn apply(&mut self, events: impl IntoIterator<Item = SurfaceEvent>) {
        for event in events {
            if let Err(err) = self.adapter.handle(event, &mut self.controller) {
                log::warn!("rejected surface event: {err}");
            }
        }
    }
}

impl eframe::App for CaptureApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.surface.viewport());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        form_panel(ctx, &self.controller, &self.activity);
        results_panel(ctx, &self.cards, &mut self.modal);

        let events = egui::CentralPanel::default()
            .show(ctx, |ui| self.surface.show(ui, self.controller.layers()))
            .inner;
        self.apply(events);

        show_history_modal(ctx, &mut self.modal);
    }
}
