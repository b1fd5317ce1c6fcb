use crate::config::{CONFIG_ENV_VAR, ResultCard};
use crate::history::HistoryModal;

/// Bottom panel listing result rows, each with a button opening its history.
pub fn results_panel(ctx: &egui::Context, cards: &[ResultCard], modal: &mut HistoryModal) {
    egui::TopBottomPanel::bottom("results_panel")
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Results");

            if cards.is_empty() {
                ui.weak(format!("No result cards configured. Point {CONFIG_ENV_VAR} at a config file to load some."));
                return;
            }

            egui::Grid::new("results_grid")
                .num_columns(3)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for card in cards {
                        ui.strong(&card.title);
                        ui.label(&card.summary_value);
                        if ui.button("History").clicked() {
                            modal.open(&card.trigger());
                        }
                        ui.end_row();
                    }
                });
        });
}
