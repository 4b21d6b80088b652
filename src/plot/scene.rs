//! Retained plot surface drawn by the terminal UI.

use super::sampling::finite_extent;
use super::{AxisRange, Curve, Mode, PlotSurface, SurfaceGrid};
use crate::error::{Result, VizError};
use crate::geometry::{Point, Vector};
use std::fmt::Write as _;

/// Text placed at a data position.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Anchor position.
    pub at: Point,
    /// Label text.
    pub text: String,
}

/// Everything drawn on the current axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    mode: Mode,
    limits: Option<AxisRange>,
    labels: Vec<String>,
    points: Vec<Point>,
    arrows: Vec<Vector>,
    annotations: Vec<Annotation>,
    curve: Option<Curve>,
    surface: Option<SurfaceGrid>,
}

impl Scene {
    /// Blank axes for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Mode the axes were created for.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Title shown above the plot.
    pub fn title(&self) -> String {
        format!("Vector Visualizer ({})", self.mode.name())
    }

    /// Whether nothing has been drawn.
    pub fn is_blank(&self) -> bool {
        self.points.is_empty()
            && self.arrows.is_empty()
            && self.annotations.is_empty()
            && self.curve.is_none()
            && self.surface.is_none()
    }

    /// Axis limits; blank axes use the default range.
    pub fn limits(&self) -> AxisRange {
        self.limits.unwrap_or_default()
    }

    /// Axis names, defaulting to the mode's.
    pub fn labels(&self) -> Vec<&str> {
        if self.labels.is_empty() {
            self.mode.axis_labels().to_vec()
        } else {
            self.labels.iter().map(String::as_str).collect()
        }
    }

    /// Scattered points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Arrows.
    pub fn arrows(&self) -> &[Vector] {
        &self.arrows
    }

    /// Text labels.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// 2D curve, if any.
    pub fn sampled_curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    /// 3D surface, if any.
    pub fn surface_grid(&self) -> Option<&SurfaceGrid> {
        self.surface.as_ref()
    }

    /// Vertical extent of a 3D scene: data extent if there is any, else the limits.
    pub fn z_extent(&self) -> (f64, f64) {
        let point_z = self.points.iter().filter_map(|p| p.coords().get(2).copied());
        let arrow_z = self.arrows.iter().flat_map(|v| {
            let tail = v.tail.coords().get(2).copied();
            let head = v.head().coords().get(2).copied();
            tail.into_iter().chain(head)
        });
        let surface_z = self
            .surface
            .iter()
            .flat_map(|grid| grid.z_extent().map(|(lo, hi)| [lo, hi]))
            .flatten();

        match finite_extent(point_z.chain(arrow_z).chain(surface_z)) {
            Some((lo, hi)) if hi - lo > 1e-12 => (lo, hi),
            Some((v, _)) => (v - 1.0, v + 1.0),
            None => {
                let r = self.limits();
                (r.min(), r.max())
            },
        }
    }

    /// Plain-text summary of the scene.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let r = self.limits();
        let _ = writeln!(out, "{}", self.title());
        let _ = writeln!(out, "range: [{}, {}]", r.min(), r.max());
        let _ = writeln!(out, "axes: {}", self.labels().join(", "));

        let _ = writeln!(out, "points: {}", self.points.len());
        for (i, p) in self.points.iter().enumerate() {
            let _ = writeln!(out, "  P{} = {}", i, format_tuple(p.coords(), '(', ')'));
        }

        let _ = writeln!(out, "vectors: {}", self.arrows.len());
        for (i, v) in self.arrows.iter().enumerate() {
            let _ = writeln!(
                out,
                "  v{} = {} @ {}",
                i,
                format_tuple(&v.direction, '<', '>'),
                format_tuple(v.tail.coords(), '(', ')')
            );
        }

        if let Some(curve) = &self.curve {
            let _ = writeln!(
                out,
                "curve: {} samples, {} undefined",
                curve.xs.len(),
                curve.undefined_count()
            );
        }
        if let Some(grid) = &self.surface {
            let (rows, cols) = grid.zs.dim();
            let _ = writeln!(
                out,
                "surface: {}x{} samples, {} undefined",
                rows,
                cols,
                grid.undefined_count()
            );
        }
        out
    }

    fn check_dims(&self, what: &str, dims: usize) -> Result<()> {
        if dims == self.mode.dims() {
            Ok(())
        } else {
            Err(VizError::surface(format!(
                "{} has {} coordinates but the axes are {}",
                what,
                dims,
                self.mode.name()
            )))
        }
    }
}

impl PlotSurface for Scene {
    fn reset(&mut self, mode: Mode) {
        *self = Scene::new(mode);
    }

    fn scatter(&mut self, points: &[Point]) -> Result<()> {
        for p in points {
            self.check_dims("point", p.dims())?;
        }
        self.points.extend_from_slice(points);
        Ok(())
    }

    fn arrow(&mut self, vector: &Vector) -> Result<()> {
        self.check_dims("vector", vector.dims())?;
        self.check_dims("vector tail", vector.tail.dims())?;
        self.arrows.push(vector.clone());
        Ok(())
    }

    fn annotate(&mut self, at: &Point, text: &str) -> Result<()> {
        self.check_dims("label", at.dims())?;
        self.annotations.push(Annotation {
            at: at.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn curve(&mut self, curve: &Curve) -> Result<()> {
        if self.mode != Mode::TwoD {
            return Err(VizError::surface("curves can only be drawn on 2D axes"));
        }
        if curve.xs.len() != curve.ys.len() {
            return Err(VizError::surface("curve x and y sample counts differ"));
        }
        self.curve = Some(curve.clone());
        Ok(())
    }

    fn surface(&mut self, grid: &SurfaceGrid) -> Result<()> {
        if self.mode != Mode::ThreeD {
            return Err(VizError::surface("surfaces can only be drawn on 3D axes"));
        }
        if grid.xs.dim() != grid.zs.dim() || grid.ys.dim() != grid.zs.dim() {
            return Err(VizError::surface("surface grids have different shapes"));
        }
        self.surface = Some(grid.clone());
        Ok(())
    }

    fn set_limits(&mut self, range: AxisRange) -> Result<()> {
        self.limits = Some(range);
        Ok(())
    }

    fn set_labels(&mut self, labels: &[&str]) -> Result<()> {
        self.check_dims("label set", labels.len())?;
        self.labels = labels.iter().map(|s| s.to_string()).collect();
        Ok(())
    }
}

fn format_tuple(values: &[f64], open: char, close: char) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{}{}{}", open, inner.join(","), close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn reset_blanks_everything() {
        let mut scene = Scene::new(Mode::TwoD);
        scene.scatter(&[Point::from([1.0, 2.0])]).unwrap();
        scene.set_limits(AxisRange::new(0.0, 1.0).unwrap()).unwrap();
        assert!(!scene.is_blank());

        scene.reset(Mode::ThreeD);
        assert!(scene.is_blank());
        assert_eq!(scene.mode(), Mode::ThreeD);
        assert_eq!(scene.limits(), AxisRange::default());
        assert_eq!(scene.labels(), vec!["x", "y", "z"]);
    }

    #[test]
    fn rejects_wrong_dimensionality() {
        let mut scene = Scene::new(Mode::TwoD);
        assert!(matches!(
            scene.scatter(&[Point::from([1.0, 2.0, 3.0])]),
            Err(VizError::Surface(_))
        ));
        let grid = SurfaceGrid {
            xs: Array2::zeros((2, 2)),
            ys: Array2::zeros((2, 2)),
            zs: Array2::zeros((2, 2)),
        };
        assert!(scene.surface(&grid).is_err());
        assert!(scene.set_labels(&["x", "y", "z"]).is_err());
    }

    #[test]
    fn curve_only_in_2d() {
        let curve = Curve {
            xs: array![0.0, 1.0],
            ys: array![0.0, 1.0],
        };
        let mut scene = Scene::new(Mode::ThreeD);
        assert!(scene.curve(&curve).is_err());
        scene.reset(Mode::TwoD);
        assert!(scene.curve(&curve).is_ok());
    }

    #[test]
    fn z_extent_prefers_data() {
        let mut scene = Scene::new(Mode::ThreeD);
        assert_eq!(scene.z_extent(), (-5.0, 5.0));
        scene
            .arrow(&Vector::new(Point::from([0.0, 0.0, 1.0]), vec![0.0, 0.0, 2.0]))
            .unwrap();
        assert_eq!(scene.z_extent(), (1.0, 3.0));
    }

    #[test]
    fn describe_lists_items() {
        let mut scene = Scene::new(Mode::TwoD);
        scene.scatter(&[Point::from([1.0, 2.0])]).unwrap();
        scene
            .arrow(&Vector::new(Point::from([1.0, 1.0]), vec![-1.0, 2.0]))
            .unwrap();
        let text = scene.describe();
        assert!(text.contains("points: 1"));
        assert!(text.contains("P0 = (1,2)"));
        assert!(text.contains("v0 = <-1,2> @ (1,1)"));
    }
}
