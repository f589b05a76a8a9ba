use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const CARD_WIDTH: f32 = 360.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let available_rect = ui.available_rect_before_wrap();
    let busy = state.flow.is_busy();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 420.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            styles::card_frame().show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("🔐").size(40.0));
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Bem-vindo de volta!")
                            .size(26.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new("Faça login para continuar").color(colors::TEXT_SECONDARY),
                    );
                });
                ui.add_space(20.0);

                ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY));
                let email = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut state.email_input)
                        .hint_text("seu@email.com")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(6.0);

                ui.label(egui::RichText::new("Senha").color(colors::TEXT_SECONDARY));
                let password = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .hint_text("••••••••")
                        .desired_width(f32::INFINITY),
                );

                if let Some(ref error) = state.form_error {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(error).color(colors::ERROR));
                }
                ui.add_space(16.0);

                let submitted_with_enter = (email.lost_focus() || password.lost_focus())
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let label = if busy { "Entrando..." } else { "Entrar" };
                let clicked = ui
                    .add_enabled_ui(!busy, |ui| {
                        ui.add_sized([ui.available_width(), 48.0], styles::primary_button(label))
                    })
                    .inner
                    .clicked();

                if clicked || submitted_with_enter {
                    state.handle_login(now);
                }

                if busy {
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| ui.spinner());
                }
            });
        });
    });
}
