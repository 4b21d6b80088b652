//! Sampling equations on evenly spaced grids.

use super::AxisRange;
use crate::error::Result;
use crate::expr::CompiledExpr;
use ndarray::{Array1, Array2};

/// How densely equations are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Samples along a 2D curve.
    pub curve_samples: usize,
    /// Samples per side of a 3D surface grid.
    pub surface_samples: usize,
}

impl SamplingConfig {
    /// Upper bound on curve samples.
    pub const MAX_CURVE_SAMPLES: usize = 100_000;
    /// Upper bound on surface grid side length.
    pub const MAX_SURFACE_SAMPLES: usize = 1_000;
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            curve_samples: 600,
            surface_samples: 80,
        }
    }
}

/// A sampled `y = f(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Sample positions.
    pub xs: Array1<f64>,
    /// Values, NaN where undefined.
    pub ys: Array1<f64>,
}

impl Curve {
    /// Number of samples where the equation was undefined.
    pub fn undefined_count(&self) -> usize {
        self.ys.iter().filter(|y| y.is_nan()).count()
    }

    /// Runs of consecutive defined samples, as `(x, y)` pairs.
    ///
    /// A curve is drawn as one polyline per run so undefined points leave gaps.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for (&x, &y) in self.xs.iter().zip(self.ys.iter()) {
            if y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// A sampled `z = f(x, y)` on a meshgrid.
///
/// Row `i` holds samples at `ys[[i, _]]`, column `j` at `xs[[_, j]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    /// X coordinate of every sample.
    pub xs: Array2<f64>,
    /// Y coordinate of every sample.
    pub ys: Array2<f64>,
    /// Values, NaN where undefined.
    pub zs: Array2<f64>,
}

impl SurfaceGrid {
    /// Number of samples where the equation was undefined.
    pub fn undefined_count(&self) -> usize {
        self.zs.iter().filter(|z| z.is_nan()).count()
    }

    /// Smallest and largest defined value.
    pub fn z_extent(&self) -> Option<(f64, f64)> {
        finite_extent(self.zs.iter().copied())
    }
}

/// Min and max over the finite values of an iterator.
pub(crate) fn finite_extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Sample a one-variable equation at `samples` points across `range`.
///
/// `samples` is clamped to `2..=SamplingConfig::MAX_CURVE_SAMPLES`.
pub fn sample_curve(expr: &CompiledExpr, range: AxisRange, samples: usize) -> Result<Curve> {
    let n = samples.clamp(2, SamplingConfig::MAX_CURVE_SAMPLES);
    let xs = Array1::linspace(range.min(), range.max(), n);
    let ys = expr.call(xs.view())?;
    let curve = Curve { xs, ys };
    tracing::debug!(
        "Sampled curve: {} points, {} undefined",
        curve.xs.len(),
        curve.undefined_count()
    );
    Ok(curve)
}

/// Sample a two-variable equation on a `samples × samples` grid over `range²`.
///
/// `samples` is clamped to `2..=SamplingConfig::MAX_SURFACE_SAMPLES`.
pub fn sample_surface(
    expr: &CompiledExpr,
    range: AxisRange,
    samples: usize,
) -> Result<SurfaceGrid> {
    let n = samples.clamp(2, SamplingConfig::MAX_SURFACE_SAMPLES);
    let axis = Array1::linspace(range.min(), range.max(), n);
    let xs = Array2::from_shape_fn((n, n), |(_, j)| axis[j]);
    let ys = Array2::from_shape_fn((n, n), |(i, _)| axis[i]);
    let zs = expr.call2(xs.view(), ys.view())?;
    let grid = SurfaceGrid { xs, ys, zs };
    tracing::debug!(
        "Sampled surface: {}x{} grid, {} undefined",
        n,
        n,
        grid.undefined_count()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{compile, Variable};

    #[test]
    fn curve_spans_range() {
        let f = compile("x", &[Variable::X]).unwrap();
        let curve = sample_curve(&f, AxisRange::new(-1.0, 1.0).unwrap(), 5).unwrap();
        assert_eq!(curve.xs.to_vec(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(curve.xs, curve.ys);
    }

    #[test]
    fn curve_splits_at_undefined_samples() {
        let f = compile("sqrt(1 - x**2) / x", &[Variable::X]).unwrap();
        let curve = sample_curve(&f, AxisRange::new(-2.0, 2.0).unwrap(), 9).unwrap();
        // x = -2, -1.5, 2, 1.5 are outside the domain and x = 0 divides by zero.
        assert_eq!(curve.undefined_count(), 5);
        let runs = curve.segments();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(-1.0, 0.0), (-0.5, 0.75f64.sqrt() / -0.5)]);
    }

    #[test]
    fn surface_meshgrid_layout() {
        let f = compile("x + 10*y", &[Variable::X, Variable::Y]).unwrap();
        let grid = sample_surface(&f, AxisRange::new(0.0, 1.0).unwrap(), 2).unwrap();
        assert_eq!(grid.zs, ndarray::array![[0.0, 1.0], [10.0, 11.0]]);
        assert_eq!(grid.z_extent(), Some((0.0, 11.0)));
    }

    #[test]
    fn extent_ignores_nan() {
        assert_eq!(
            finite_extent([f64::NAN, 2.0, -1.0, f64::NAN].into_iter()),
            Some((-1.0, 2.0))
        );
        assert_eq!(finite_extent([f64::NAN].into_iter()), None);
    }

    #[test]
    fn sample_counts_are_clamped() {
        let range = AxisRange::new(0.0, 1.0).unwrap();
        let f = compile("x", &[Variable::X]).unwrap();
        let curve = sample_curve(&f, range, usize::MAX).unwrap();
        assert_eq!(curve.xs.len(), SamplingConfig::MAX_CURVE_SAMPLES);

        let g = compile("x*y", &[Variable::X, Variable::Y]).unwrap();
        let grid = sample_surface(&g, range, SamplingConfig::MAX_SURFACE_SAMPLES + 1).unwrap();
        let side = SamplingConfig::MAX_SURFACE_SAMPLES;
        assert_eq!(grid.zs.dim(), (side, side));
    }
}
