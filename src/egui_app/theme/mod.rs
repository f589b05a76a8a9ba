//! Theme Module
//!
//! Color scheme and styling helpers for the login client:
//!
//! - Color constants for the blue/purple theme
//! - Global style and frame builders for cards and toasts
//!
//! # Usage
//!
//! ```rust,ignore
//! use loginflow::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.label("Bem-vindo de volta!");
//! });
//! ```

pub mod colors;
pub mod styles;
