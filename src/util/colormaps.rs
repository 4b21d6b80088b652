//! Height colouring for surface wireframes.

use ratatui::style::Color;

/// Color palette for surface height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow colormap from blue to red.
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

type Stop = (f64, [f64; 3]);

const VIRIDIS: &[Stop] = &[
    (0.0, [68.0, 1.0, 84.0]),
    (0.5, [33.0, 145.0, 140.0]),
    (1.0, [253.0, 231.0, 37.0]),
];

const PLASMA: &[Stop] = &[
    (0.0, [13.0, 8.0, 135.0]),
    (0.5, [204.0, 71.0, 120.0]),
    (1.0, [240.0, 249.0, 33.0]),
];

const RAINBOW: &[Stop] = &[
    (0.0, [0.0, 0.0, 255.0]),
    (0.25, [0.0, 255.0, 255.0]),
    (0.5, [0.0, 255.0, 0.0]),
    (0.75, [255.0, 255.0, 0.0]),
    (1.0, [255.0, 0.0, 0.0]),
];

const BLUE_RED: &[Stop] = &[
    (0.0, [0.0, 0.0, 255.0]),
    (0.5, [255.0, 255.0, 255.0]),
    (1.0, [255.0, 0.0, 0.0]),
];

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Viridis,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let stops = match self {
            Self::Viridis => VIRIDIS,
            Self::Plasma => PLASMA,
            Self::Rainbow => RAINBOW,
            Self::BlueRed => BLUE_RED,
        };
        interpolate(stops, if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) })
    }

    /// Color for `value` placed within `[lo, hi]`.
    pub fn color_in(self, value: f64, lo: f64, hi: f64) -> Color {
        let span = hi - lo;
        if span.abs() < 1e-12 {
            self.color(0.5)
        } else {
            self.color((value - lo) / span)
        }
    }
}

fn interpolate(stops: &[Stop], t: f64) -> Color {
    let upper = stops
        .iter()
        .position(|(at, _)| *at >= t)
        .unwrap_or(stops.len() - 1)
        .max(1);
    let (t0, c0) = stops[upper - 1];
    let (t1, c1) = stops[upper];
    let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };

    let channel = |i: usize| (c0[i] + f * (c1[i] - c0[i])).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(0), channel(1), channel(2))
}
