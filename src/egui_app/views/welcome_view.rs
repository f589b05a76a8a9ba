use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const CARD_WIDTH: f32 = 420.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let available_rect = ui.available_rect_before_wrap();

    let email = state
        .flow
        .session()
        .map(|session| session.email.clone())
        .unwrap_or_default();
    let display_name = state
        .user
        .as_ref()
        .map(|user| user.display_name().to_owned())
        .unwrap_or_else(|| email.clone());
    let company = state.user.as_ref().and_then(|user| user.company.clone());

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 400.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            styles::card_frame().show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("✨").size(48.0));
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Bem-vindo!")
                            .size(30.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new("Olá, é ótimo ter você aqui!").color(colors::TEXT_SECONDARY),
                    );
                });
                ui.add_space(20.0);

                styles::user_panel_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("👤").size(28.0));
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new("Usuário logado")
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            );
                            ui.label(egui::RichText::new(&display_name).color(colors::TEXT_SECONDARY));
                            if display_name != email {
                                ui.label(egui::RichText::new(&email).small().color(colors::TEXT_SECONDARY));
                            }
                            if let Some(company) = &company {
                                ui.label(egui::RichText::new(company).small().color(colors::TEXT_SECONDARY));
                            }
                        });
                    });
                });
                ui.add_space(20.0);

                ui.vertical_centered(|ui| {
                    if ui.add_sized([140.0, 40.0], styles::primary_button("Sair")).clicked() {
                        state.logout(now);
                    }
                });
            });
        });
    });
}
