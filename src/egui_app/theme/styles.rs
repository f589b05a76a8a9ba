//! Theme Styling Functions
//!
//! Frame builders and the global style for the login screens.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::toast::ToastKind;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::BG_BLUE;
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.5, colors::CARD_BORDER);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors::BG_BLUE);
    style.visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors::BG_BLUE);

    style.visuals.selection.bg_fill = colors::ACCENT_SOFT;
    style.visuals.selection.stroke = Stroke::new(2.0, colors::BG_BLUE);

    style.spacing.item_spacing = egui::vec2(8.0, 10.0);

    ctx.set_style(style);
}

/// Paint the blue to purple background across `rect`
pub fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), colors::BG_BLUE);
    mesh.colored_vertex(rect.right_top(), colors::BG_BLUE);
    mesh.colored_vertex(rect.left_bottom(), colors::BG_PURPLE);
    mesh.colored_vertex(rect.right_bottom(), colors::BG_PURPLE);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Frame for the centered login and welcome cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(24))
        .inner_margin(egui::Margin::same(36))
        .shadow(egui::epaint::Shadow {
            offset: [0, 8],
            blur: 24,
            spread: 0,
            color: Color32::from_black_alpha(50),
        })
}

/// Frame for the signed-in user panel
pub fn user_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ACCENT_SOFT)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(egui::Margin::same(16))
}

/// Fill, border and text colors for a toast
pub fn toast_colors(kind: ToastKind) -> (Color32, Color32, Color32) {
    match kind {
        ToastKind::Error => (
            colors::TOAST_ERROR_BG,
            colors::TOAST_ERROR_BORDER,
            colors::TOAST_ERROR_TEXT,
        ),
        ToastKind::Success => (
            colors::TOAST_SUCCESS_BG,
            colors::TOAST_SUCCESS_BORDER,
            colors::TOAST_SUCCESS_TEXT,
        ),
    }
}

/// Frame for a toast of the given kind
pub fn toast_frame(kind: ToastKind) -> egui::Frame {
    let (fill, border, _) = toast_colors(kind);
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(14, 10))
}

/// Primary action button
pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_owned())
            .size(16.0)
            .strong()
            .color(colors::TEXT_LIGHT),
    )
    .fill(colors::ACCENT)
    .corner_radius(CornerRadius::same(12))
}
