//! Theme system
//!
//! Light is the default look (white canvas, soft gray rings, indigo
//! accent), matching the editor's visual spec; a dark variant exists for
//! people who want it.

use egui::{Color32, Style, Visuals};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Selected theme
    pub theme: Theme,
    /// Base font size
    pub font_size: f32,
    /// Base spacing unit
    pub spacing: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: 14.0,
            spacing: 4.0,
        }
    }
}

/// Shared color constants for the canvas and node chrome
pub mod colors {
    use egui::Color32;

    /// Canvas background
    pub const CANVAS_BG: Color32 = Color32::WHITE;
    /// Canvas grid dots
    pub const GRID_DOT: Color32 = Color32::from_rgb(229, 231, 235);
    /// Node body fill
    pub const NODE_BODY: Color32 = Color32::WHITE;
    /// Node body fill while hovered (collapsed only)
    pub const NODE_BODY_HOVER: Color32 = Color32::from_rgb(243, 244, 246);
    /// Node ring stroke
    pub const NODE_RING: Color32 = Color32::from_rgb(209, 213, 219);
    /// Sky-tinted drop shadow under node bodies and panels
    pub const NODE_SHADOW: Color32 = Color32::from_rgba_premultiplied(224, 242, 254, 160);
    /// Primary row/label text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
    /// Default tab row text
    pub const TEXT_ROW: Color32 = Color32::from_rgb(55, 65, 81);
    /// Subtitle text ("Object")
    pub const TEXT_SUBTLE: Color32 = Color32::from_rgb(107, 114, 128);
    /// Inactive icons and header controls
    pub const ICON_GREY: Color32 = Color32::from_rgb(156, 163, 175);
    /// Icons/controls on hover
    pub const ICON_GREY_HOVER: Color32 = Color32::from_rgb(107, 114, 128);
    /// Row fill on hover and for the active tab row
    pub const ROW_ACTIVE_BG: Color32 = Color32::from_rgb(243, 244, 246);
    /// Separator lines inside the node body
    pub const SEPARATOR: Color32 = Color32::from_rgb(229, 231, 235);
    /// Accent text ("Edit with AI")
    pub const ACCENT_TEXT: Color32 = Color32::from_rgb(67, 56, 202);
    /// Accent icon
    pub const ACCENT_ICON: Color32 = Color32::from_rgb(129, 140, 248);
    /// Accent row hover fill
    pub const ACCENT_ROW_BG: Color32 = Color32::from_rgb(238, 242, 255);
    /// Selection/rubber-band accent
    pub const SELECTION: Color32 = Color32::from_rgb(59, 130, 246);
    /// Avatar placeholder fill
    pub const AVATAR_BG: Color32 = Color32::from_rgb(224, 231, 255);
}

impl ThemeConfig {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = match self.theme {
            Theme::Light => Self::light_visuals(),
            Theme::Dark => Self::dark_visuals(),
        };
        style.spacing.item_spacing = egui::vec2(self.spacing * 2.0, self.spacing);
        style.spacing.button_padding = egui::vec2(self.spacing * 2.0, self.spacing);
        ctx.set_style(style);
    }

    fn light_visuals() -> Visuals {
        let mut visuals = Visuals::light();
        visuals.override_text_color = Some(colors::TEXT_PRIMARY);
        visuals.window_fill = colors::CANVAS_BG;
        visuals.panel_fill = colors::CANVAS_BG;
        visuals.extreme_bg_color = Color32::from_rgb(249, 250, 251);

        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, colors::TEXT_SUBTLE);
        visuals.widgets.inactive.bg_fill = colors::NODE_BODY;
        visuals.widgets.hovered.bg_fill = colors::NODE_BODY_HOVER;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors::NODE_RING);
        visuals.widgets.active.bg_fill = colors::ROW_ACTIVE_BG;

        visuals.selection.bg_fill = colors::SELECTION.linear_multiply(0.2);
        visuals.selection.stroke = egui::Stroke::new(1.0, colors::SELECTION);
        visuals.hyperlink_color = colors::ACCENT_TEXT;
        visuals
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.window_fill = Color32::from_rgb(18, 18, 24);
        visuals.panel_fill = Color32::from_rgb(18, 18, 24);
        visuals.selection.bg_fill = colors::SELECTION.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, colors::SELECTION);
        visuals.hyperlink_color = colors::ACCENT_ICON;
        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let config = ThemeConfig::default();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.font_size, 14.0);
    }
}
