//! Theme Module
//!
//! Color constants for the dark authentication UI.

/// Color palette
pub mod colors {
    use eframe::egui::Color32;

    /// Main background - Deep slate
    pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x22, 0x2A);

    /// Top bar background - Darker slate
    pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x1A, 0x20);

    /// Text on dark backgrounds
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEC, 0xF1);

    /// Secondary text - Muted gray
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA4, 0xB2);

    /// Primary action buttons - Blue
    pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

    /// Error messages - Red
    pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x53, 0x50);

    /// Success color - Green
    pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
}
