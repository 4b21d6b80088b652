//! Layout configuration constants for the terminal UI.

/// Configuration for the input panel.
#[derive(Debug, Clone)]
pub struct ControlsLayoutConfig {
    /// Width of the panel in characters.
    pub width: u16,
    /// Height of one bordered input field.
    pub field_height: u16,
}

impl Default for ControlsLayoutConfig {
    fn default() -> Self {
        Self {
            width: 42,
            field_height: 3,
        }
    }
}

/// Configuration for the plot canvas.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Arrow head length as a fraction of the arrow length.
    pub arrow_head_ratio: f64,
    /// Upper bound on head length as a fraction of the axis span.
    pub arrow_head_max: f64,
    /// Half-angle between the shaft and each head stroke, degrees.
    pub arrow_head_angle: f64,
    /// Wireframe lines drawn per surface direction.
    pub wireframe_lines: usize,
    /// Upper bound on grid ticks per axis.
    pub max_ticks: usize,
    /// Margin around projected 3D content (0.08 = 8%).
    pub projection_padding: f64,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            arrow_head_ratio: 0.2,
            arrow_head_max: 0.04,
            arrow_head_angle: 25.0,
            wireframe_lines: 30,
            max_ticks: 10,
            projection_padding: 0.08,
        }
    }
}

/// Configuration for the error popup.
#[derive(Debug, Clone)]
pub struct PopupLayoutConfig {
    /// Width as a percentage of the screen.
    pub percent_x: u16,
    /// Height as a percentage of the screen.
    pub percent_y: u16,
}

impl Default for PopupLayoutConfig {
    fn default() -> Self {
        Self {
            percent_x: 60,
            percent_y: 35,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Input panel.
    pub controls: ControlsLayoutConfig,
    /// Plot canvas.
    pub plot: PlotLayoutConfig,
    /// Error popup.
    pub popup: PopupLayoutConfig,
}
