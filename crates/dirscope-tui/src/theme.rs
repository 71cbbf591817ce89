//! Color theme for the TUI.
//!
//! Dark and light palettes built from the Tailwind CSS slate scale, with
//! a size gradient for the bar column.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Theme variant (dark or light).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub foreground: Color,
    pub muted: Color,

    pub selected: Style,

    // Size indicators (gradient by ratio to the largest entry)
    pub size_huge: Color,   // > 50%
    pub size_large: Color,  // > 25%
    pub size_medium: Color, // > 10%
    pub size_small: Color,  // > 1%
    pub size_tiny: Color,   // <= 1%

    pub error: Color,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub directory: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);

        // Accent colors (Tailwind CSS)
        let blue_400 = Color::Rgb(96, 165, 250);
        let blue_500 = Color::Rgb(59, 130, 246);
        let green_500 = Color::Rgb(34, 197, 94);
        let yellow_500 = Color::Rgb(234, 179, 8);
        let orange_500 = Color::Rgb(249, 115, 22);
        let red_500 = Color::Rgb(239, 68, 68);

        Self {
            variant: ThemeVariant::Dark,
            foreground: slate_100,
            muted: slate_500,

            selected: Style::new().bg(slate_700).fg(slate_50).add_modifier(Modifier::BOLD),

            size_huge: red_500,
            size_large: orange_500,
            size_medium: yellow_500,
            size_small: green_500,
            size_tiny: slate_600,

            error: red_500,

            border: Style::new().fg(slate_600),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),
            directory: Style::new().fg(blue_500).add_modifier(Modifier::BOLD),

            header: Style::new().bg(slate_800).fg(slate_100),
            footer: Style::new().bg(slate_800).fg(slate_400),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Darker accents so they hold up on a light background
        let blue_700 = Color::Rgb(29, 78, 216);
        let green_600 = Color::Rgb(22, 163, 74);
        let yellow_600 = Color::Rgb(202, 138, 4);
        let orange_600 = Color::Rgb(234, 88, 12);
        let red_600 = Color::Rgb(220, 38, 38);

        Self {
            variant: ThemeVariant::Light,
            foreground: slate_900,
            muted: slate_500,

            selected: Style::new().bg(slate_200).fg(slate_900).add_modifier(Modifier::BOLD),

            size_huge: red_600,
            size_large: orange_600,
            size_medium: yellow_600,
            size_small: green_600,
            size_tiny: slate_400,

            error: red_600,

            border: Style::new().fg(slate_400),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),
            directory: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),

            header: Style::new().bg(slate_100).fg(slate_800),
            footer: Style::new().bg(slate_100).fg(slate_600),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Get color for a size ratio (0.0 to 1.0).
    pub fn size_color(&self, ratio: f64) -> Color {
        match ratio {
            r if r > 0.50 => self.size_huge,
            r if r > 0.25 => self.size_large,
            r if r > 0.10 => self.size_medium,
            r if r > 0.01 => self.size_small,
            _ => self.size_tiny,
        }
    }

    /// Get style for a size bar at given ratio.
    pub fn size_bar_style(&self, ratio: f64) -> Style {
        Style::new().fg(self.size_color(ratio))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
