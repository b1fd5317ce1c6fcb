use egui::Color32;

use crate::event::ActivityLog;
use crate::geometry::{CodecError, codec};
use crate::state::{DrawSessionController, FormField, OutputSink};

/// Right-hand panel showing the coordinates field as it would be submitted.
pub fn form_panel(ctx: &egui::Context, controller: &DrawSessionController<FormField>, activity: &ActivityLog) {
    egui::SidePanel::right("form_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Location");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Session:");
                ui.strong(controller.state().name());
            });

            ui.label(format!("Field `{}`", controller.sink().name()));
            let mut value = controller.output();
            ui.add(
                egui::TextEdit::multiline(&mut value)
                    .desired_rows(3)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Draw a marker or rectangle on the map"),
            );

            match codec::decode(controller.sink().read()) {
                Ok(shape) => {
                    ui.label(format!("Query location: {}", shape.center()));
                }
                Err(CodecError::Empty) => {
                    ui.weak("No geometry drawn yet.");
                }
                Err(err) => {
                    ui.colored_label(Color32::LIGHT_RED, err.to_string());
                }
            }

            ui.separator();
            ui.heading("Activity");
            for entry in activity.entries() {
                ui.label(entry);
            }
        });
}
