//! Text inputs to a drawn scene.

use super::{sample_curve, sample_surface, AxisRange, Mode, PlotSurface, SamplingConfig};
use crate::error::Result;
use crate::expr::compile;
use crate::geometry::{parse_points, parse_vectors};

/// Raw form contents for one render.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Plot dimensionality.
    pub mode: Mode,
    /// Range minimum text.
    pub range_min: &'a str,
    /// Range maximum text.
    pub range_max: &'a str,
    /// Point list text.
    pub points: &'a str,
    /// Vector list text.
    pub vectors: &'a str,
    /// Equation text, possibly blank.
    pub equation: &'a str,
    /// Sampling density.
    pub sampling: SamplingConfig,
}

/// What a successful render drew.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderSummary {
    /// Number of points.
    pub points: usize,
    /// Number of vectors.
    pub vectors: usize,
    /// Simplified equation, if one was drawn.
    pub equation: Option<String>,
    /// Equation samples that came out undefined.
    pub undefined_samples: usize,
}

impl RenderSummary {
    /// One-line status text.
    pub fn status(&self) -> String {
        let mut parts = vec![
            plural(self.points, "point"),
            plural(self.vectors, "vector"),
        ];
        if let Some(eq) = &self.equation {
            parts.push(format!("f = {}", eq));
            if self.undefined_samples > 0 {
                parts.push(format!("{} undefined samples", self.undefined_samples));
            }
        }
        format!("Rendered. {}", parts.join(", "))
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Parse the request and draw it onto `surface`.
///
/// The range is checked before anything else is parsed or drawn. On error the
/// surface may hold a partial scene; callers reset it.
pub fn render_scene<S: PlotSurface + ?Sized>(
    surface: &mut S,
    request: &RenderRequest<'_>,
) -> Result<RenderSummary> {
    let mode = request.mode;
    let dims = mode.dims();
    let range = AxisRange::parse(request.range_min, request.range_max)?;

    surface.reset(mode);
    let mut summary = RenderSummary::default();

    let points = parse_points(request.points, dims)?;
    if !points.is_empty() {
        surface.scatter(&points)?;
        for (i, p) in points.iter().enumerate() {
            surface.annotate(p, &format!("P{}", i))?;
        }
    }
    summary.points = points.len();

    let vectors = parse_vectors(request.vectors, dims)?;
    for (i, v) in vectors.iter().enumerate() {
        surface.arrow(v)?;
        surface.annotate(&v.head(), &format!("v{}", i))?;
    }
    summary.vectors = vectors.len();

    if !request.equation.trim().is_empty() {
        let compiled = compile(request.equation, mode.variables())?;
        match mode {
            Mode::TwoD => {
                let curve = sample_curve(&compiled, range, request.sampling.curve_samples)?;
                summary.undefined_samples = curve.undefined_count();
                surface.curve(&curve)?;
            },
            Mode::ThreeD => {
                let grid = sample_surface(&compiled, range, request.sampling.surface_samples)?;
                summary.undefined_samples = grid.undefined_count();
                surface.surface(&grid)?;
            },
        }
        summary.equation = Some(compiled.to_string());
    }

    surface.set_limits(range)?;
    surface.set_labels(mode.axis_labels())?;

    tracing::debug!(
        "Rendered {} point(s), {} vector(s) in {}",
        summary.points,
        summary.vectors,
        mode.name()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text() {
        let summary = RenderSummary {
            points: 1,
            vectors: 2,
            equation: Some("x ^ 2".to_string()),
            undefined_samples: 0,
        };
        assert_eq!(summary.status(), "Rendered. 1 point, 2 vectors, f = x ^ 2");

        let summary = RenderSummary {
            equation: Some("sqrt(x)".to_string()),
            undefined_samples: 300,
            ..RenderSummary::default()
        };
        assert!(summary.status().ends_with("300 undefined samples"));
    }
}
