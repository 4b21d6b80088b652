//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Border of the focused input.
    pub focus: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
    /// Axis lines and bounding box.
    pub axis: Color,
    /// Grid lines.
    pub grid: Color,
    /// Scatter points.
    pub point: Color,
    /// Vector arrows.
    pub vector: Color,
    /// Equation curve.
    pub curve: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                focus: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
                axis: Color::Rgb(168, 153, 132),
                grid: Color::Rgb(80, 73, 69),
                point: Color::Rgb(131, 165, 152),
                vector: Color::Rgb(251, 73, 52),
                curve: Color::Rgb(142, 192, 124),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                focus: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
                axis: Color::Rgb(124, 111, 100),
                grid: Color::Rgb(213, 196, 161),
                point: Color::Rgb(7, 102, 120),
                vector: Color::Rgb(157, 0, 6),
                curve: Color::Rgb(102, 123, 3),
            },
        }
    }
}
