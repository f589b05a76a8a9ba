//! Color Constants
//!
//! Blue to purple palette for the login demo. Cards are near-white on a
//! saturated background; toasts use soft red and green tints.

use eframe::egui::Color32;

/// Background, blue end of the gradient
pub const BG_BLUE: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Background, purple end of the gradient
pub const BG_PURPLE: Color32 = Color32::from_rgb(0x93, 0x33, 0xEA);

/// Card surface
pub const CARD_BG: Color32 = Color32::from_rgb(0xFB, 0xFB, 0xFD);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Primary button and badges
pub const ACCENT: Color32 = Color32::from_rgb(0x63, 0x5B, 0xF0);

/// Tinted panel behind the signed-in user
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(0xE8, 0xF0, 0xFE);

/// Headings
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Text on accent backgrounds
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

/// Input field background
pub const INPUT_BG: Color32 = Color32::WHITE;

/// Inline form error
pub const ERROR: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Error toast fill
pub const TOAST_ERROR_BG: Color32 = Color32::from_rgb(0xFE, 0xF2, 0xF2);

/// Error toast border
pub const TOAST_ERROR_BORDER: Color32 = Color32::from_rgb(0xFE, 0xCA, 0xCA);

/// Error toast text
pub const TOAST_ERROR_TEXT: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Success toast fill
pub const TOAST_SUCCESS_BG: Color32 = Color32::from_rgb(0xF0, 0xFD, 0xF4);

/// Success toast border
pub const TOAST_SUCCESS_BORDER: Color32 = Color32::from_rgb(0xBB, 0xF7, 0xD0);

/// Success toast text
pub const TOAST_SUCCESS_TEXT: Color32 = Color32::from_rgb(0x15, 0x80, 0x3D);
