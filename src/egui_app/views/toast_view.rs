use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

/// Draw the current toast in the top-right corner with a shrinking bar
pub fn render(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let Some(toast) = state.flow.toast().cloned() else {
        return;
    };
    let progress = state.flow.toaster().progress(now).unwrap_or(0.0);
    let (_, _, text_color) = styles::toast_colors(toast.kind);

    let mut closed = false;
    egui::Area::new(egui::Id::new("toast"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            styles::toast_frame(toast.kind).show(ui, |ui| {
                ui.set_width(300.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&toast.message).color(text_color).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            closed = true;
                        }
                    });
                });

                let (bar, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width() * progress, 2.0),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(bar, 0.0, text_color.gamma_multiply(0.3));
            });
        });

    if closed {
        state.close_toast(toast.id, now);
    }
}
