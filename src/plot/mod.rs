//! Plot configuration, the drawing surface and the render pipeline.

mod projection;
mod render;
mod sampling;
mod scene;

pub use projection::Camera;
pub use render::{render_scene, RenderRequest, RenderSummary};
pub use sampling::{sample_curve, sample_surface, Curve, SamplingConfig, SurfaceGrid};
pub use scene::{Annotation, Scene};

use crate::error::{Result, VizError};
use crate::expr::Variable;
use crate::geometry::{parse_real, Point, Vector};

/// Plot dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Planar plot, equations `y = f(x)`.
    #[default]
    TwoD,
    /// Spatial plot, equations `z = f(x, y)`.
    ThreeD,
}

impl Mode {
    /// Get the other mode.
    pub fn next(self) -> Self {
        match self {
            Mode::TwoD => Mode::ThreeD,
            Mode::ThreeD => Mode::TwoD,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::TwoD => "2D",
            Mode::ThreeD => "3D",
        }
    }

    /// Number of coordinates per point or vector.
    pub fn dims(self) -> usize {
        match self {
            Mode::TwoD => 2,
            Mode::ThreeD => 3,
        }
    }

    /// Free variables an equation may use.
    pub fn variables(self) -> &'static [Variable] {
        match self {
            Mode::TwoD => &[Variable::X],
            Mode::ThreeD => &[Variable::X, Variable::Y],
        }
    }

    /// Example inputs for the point, vector and equation fields.
    pub fn input_examples(self) -> [&'static str; 3] {
        match self {
            Mode::TwoD => ["(a,b); (c,d)", "<vx,vy> or <vx,vy>@(tx,ty)", "y = f(x)"],
            Mode::ThreeD => [
                "(a,b,c); (d,e,f)",
                "<vx,vy,vz> or <vx,vy,vz>@(tx,ty,tz)",
                "z = f(x,y)",
            ],
        }
    }

    /// Axis names.
    pub fn axis_labels(self) -> &'static [&'static str] {
        match self {
            Mode::TwoD => &["x", "y"],
            Mode::ThreeD => &["x", "y", "z"],
        }
    }
}

/// Axis range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Create a range, rejecting `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(VizError::Range { min, max });
        }
        Ok(Self { min, max })
    }

    /// Parse both bounds from text and check them.
    pub fn parse(min: &str, max: &str) -> Result<Self> {
        let lo = parse_real(min, min.trim())
            .map_err(|_| VizError::parse(min.trim(), "a numeric range minimum"))?;
        let hi = parse_real(max, max.trim())
            .map_err(|_| VizError::parse(max.trim(), "a numeric range maximum"))?;
        Self::new(lo, hi)
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bounds as an array, the form `ratatui` axes take.
    pub fn bounds(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            min: -5.0,
            max: 5.0,
        }
    }
}

/// Something parsed data can be drawn onto.
///
/// Calls arrive in render order after a `reset`. Implementations report
/// data they cannot draw as [`VizError::Surface`].
pub trait PlotSurface {
    /// Start over with blank axes for `mode`.
    fn reset(&mut self, mode: Mode);

    /// Draw a set of markers.
    fn scatter(&mut self, points: &[Point]) -> Result<()>;

    /// Draw one arrow.
    fn arrow(&mut self, vector: &Vector) -> Result<()>;

    /// Place a text label at a data position.
    fn annotate(&mut self, at: &Point, text: &str) -> Result<()>;

    /// Draw a sampled `y = f(x)` curve.
    fn curve(&mut self, curve: &Curve) -> Result<()>;

    /// Draw a sampled `z = f(x, y)` surface.
    fn surface(&mut self, grid: &SurfaceGrid) -> Result<()>;

    /// Fix the axis limits.
    fn set_limits(&mut self, range: AxisRange) -> Result<()>;

    /// Name the axes.
    fn set_labels(&mut self, labels: &[&str]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle() {
        assert_eq!(Mode::TwoD.next(), Mode::ThreeD);
        assert_eq!(Mode::ThreeD.next(), Mode::TwoD);
        assert_eq!(Mode::ThreeD.dims(), 3);
        assert_eq!(Mode::TwoD.variables(), &[Variable::X]);
    }

    #[test]
    fn examples_match_dimensionality() {
        use crate::geometry::{parse_points, parse_vectors};
        let [points, _, _] = Mode::ThreeD.input_examples();
        assert_eq!(parse_points("(1,2,3); (4,5,6)", 3).unwrap().len(), 2);
        assert!(points.contains("(a,b,c)"));
        assert!(parse_vectors("<1,2>@(0,1)", Mode::TwoD.dims()).is_ok());
        assert!(Mode::TwoD.input_examples()[2].starts_with("y ="));
    }

    #[test]
    fn range_requires_min_below_max() {
        assert!(AxisRange::new(-5.0, 5.0).is_ok());
        assert!(matches!(
            AxisRange::new(5.0, 1.0),
            Err(VizError::Range { .. })
        ));
        assert!(AxisRange::new(2.0, 2.0).is_err());
        assert!(AxisRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn range_from_text() {
        let r = AxisRange::parse(" -10 ", "2.5").unwrap();
        assert_eq!(r.bounds(), [-10.0, 2.5]);
        assert!(matches!(
            AxisRange::parse("five", "10"),
            Err(VizError::Parse { .. })
        ));
        assert!(matches!(
            AxisRange::parse("5", "1"),
            Err(VizError::Range { .. })
        ));
    }
}
