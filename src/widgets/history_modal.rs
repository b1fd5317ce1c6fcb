use egui::{Align, Align2, Color32, Context, Id, Layout, Order, Sense, Vec2};

use crate::history::{ClickTarget, HistoryModal};

const OVERLAY_COLOR: Color32 = Color32::from_black_alpha(160);

/// Renders the history dialog and the failure notice, feeding close clicks
/// back into `modal`.
pub fn show_history_modal(ctx: &Context, modal: &mut HistoryModal) {
    show_notice(ctx, modal);

    let Some(table) = modal.table() else {
        return;
    };

    let screen = ctx.screen_rect();
    let overlay = egui::Area::new(Id::new("history_overlay"))
        .order(Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(screen, 0.0, OVERLAY_COLOR);
            ui.allocate_rect(screen, Sense::click())
        })
        .inner;

    let mut close_clicked = false;
    let panel = egui::Area::new(Id::new("history_panel"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(320.0);
                ui.horizontal(|ui| {
                    ui.heading(&table.title);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            close_clicked = true;
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    egui::Grid::new("history_table")
                        .num_columns(2)
                        .spacing([40.0, 4.0])
                        .striped(true)
                        .show(ui, |ui| {
                            ui.strong(&table.headers[0]);
                            ui.strong(&table.headers[1]);
                            ui.end_row();

                            for row in &table.rows {
                                ui.label(row.year.to_string());
                                ui.label(row.value.to_string());
                                ui.end_row();
                            }
                        });
                });
            });
        });

    if close_clicked {
        modal.close();
    } else if overlay.clicked() {
        let target = match overlay.interact_pointer_pos() {
            Some(pos) if panel.response.rect.contains(pos) => ClickTarget::Panel,
            _ => ClickTarget::Overlay,
        };
        modal.on_click(target);
    }
}

fn show_notice(ctx: &Context, modal: &mut HistoryModal) {
    let Some(notice) = modal.notice() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(notice);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        modal.dismiss_notice();
    }
}
