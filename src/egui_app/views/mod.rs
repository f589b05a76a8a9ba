use std::time::Instant;

use eframe::egui;

use crate::egui_app::flow::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

pub mod login_view;
pub mod toast_view;
pub mod welcome_view;

/// Render the current screen over the gradient background
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new())
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            styles::paint_background(ui, rect);

            match state.flow.screen() {
                Screen::Login => login_view::render(ui, state, now),
                Screen::Welcome => welcome_view::render(ui, state, now),
            }
        });

    toast_view::render(ctx, state, now);
}
