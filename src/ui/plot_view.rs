//! Braille canvas rendering of a [`Scene`].

use super::formatters::{format_axis_label, tick_values};
use super::ThemeColors;
use crate::geometry::Point;
use crate::plot::{Camera, Mode, Scene};
use crate::util::layout_config::PlotLayoutConfig;
use crate::util::{ColorPalette, LayoutConfig};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

/// Axis-aligned view window in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x: [f64; 2],
    y: [f64; 2],
}

impl Bounds {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x[0] && x <= self.x[1] && y >= self.y[0] && y <= self.y[1]
    }

    fn span(&self) -> f64 {
        (self.x[1] - self.x[0]).max(self.y[1] - self.y[0])
    }
}

/// Clip a segment to `bounds` (Liang-Barsky). `None` when nothing is visible.
fn clip_segment(
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    bounds: &Bounds,
) -> Option<((f64, f64), (f64, f64))> {
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return None;
    }
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    let checks = [
        (-dx, x1 - bounds.x[0]),
        (dx, bounds.x[1] - x1),
        (-dy, y1 - bounds.y[0]),
        (dy, bounds.y[1] - y1),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        (x1 + t0 * dx, y1 + t0 * dy),
        (x1 + t1 * dx, y1 + t1 * dy),
    ))
}

fn draw_line(
    ctx: &mut Context<'_>,
    a: (f64, f64),
    b: (f64, f64),
    bounds: &Bounds,
    color: Color,
) {
    if let Some(((x1, y1), (x2, y2))) = clip_segment(a, b, bounds) {
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

/// Shaft plus two head strokes, all in screen space.
fn draw_arrow(
    ctx: &mut Context<'_>,
    tail: (f64, f64),
    head: (f64, f64),
    bounds: &Bounds,
    config: &PlotLayoutConfig,
    color: Color,
) {
    draw_line(ctx, tail, head, bounds, color);

    let dx = head.0 - tail.0;
    let dy = head.1 - tail.1;
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return;
    }
    let head_len = (length * config.arrow_head_ratio).min(bounds.span() * config.arrow_head_max);
    let back = dy.atan2(dx) + std::f64::consts::PI;
    let spread = config.arrow_head_angle.to_radians();
    for angle in [back - spread, back + spread] {
        let end = (head.0 + head_len * angle.cos(), head.1 + head_len * angle.sin());
        draw_line(ctx, head, end, bounds, color);
    }
}

fn print_label(ctx: &mut Context<'_>, x: f64, y: f64, bounds: &Bounds, text: String, color: Color) {
    if bounds.contains(x, y) {
        ctx.print(x, y, Span::styled(text, Style::default().fg(color)));
    }
}

/// Draw the plot panel.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    scene: &Scene,
    camera: &Camera,
    palette: ColorPalette,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" {} ", scene.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let config = &layout.plot;
    match scene.mode() {
        Mode::TwoD => {
            let r = scene.limits();
            let bounds = Bounds {
                x: r.bounds(),
                y: r.bounds(),
            };
            let canvas = Canvas::default()
                .block(block)
                .background_color(colors.bg)
                .marker(Marker::Braille)
                .x_bounds(bounds.x)
                .y_bounds(bounds.y)
                .paint(|ctx| paint_2d(ctx, scene, &bounds, config, colors));
            f.render_widget(canvas, area);
        },
        Mode::ThreeD => {
            let view = View3d::new(scene, *camera);
            let bounds = view.bounds(config.projection_padding);
            let canvas = Canvas::default()
                .block(block)
                .background_color(colors.bg)
                .marker(Marker::Braille)
                .x_bounds(bounds.x)
                .y_bounds(bounds.y)
                .paint(|ctx| paint_3d(ctx, scene, &view, &bounds, palette, config, colors));
            f.render_widget(canvas, area);
        },
    }
}

fn paint_2d(
    ctx: &mut Context<'_>,
    scene: &Scene,
    bounds: &Bounds,
    config: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let [lo, hi] = bounds.x;
    let ticks = tick_values(lo, hi, config.max_ticks);

    for &t in &ticks {
        draw_line(ctx, (t, lo), (t, hi), bounds, colors.grid);
        draw_line(ctx, (lo, t), (hi, t), bounds, colors.grid);
    }
    ctx.layer();

    // Axes through the origin when it is in view, else along the lower edge.
    let axis = if lo <= 0.0 && hi >= 0.0 { 0.0 } else { lo };
    draw_line(ctx, (lo, axis), (hi, axis), bounds, colors.axis);
    draw_line(ctx, (axis, lo), (axis, hi), bounds, colors.axis);
    for &t in &ticks {
        if t != axis {
            print_label(ctx, t, axis, bounds, format_axis_label(t), colors.axis);
            print_label(ctx, axis, t, bounds, format_axis_label(t), colors.axis);
        }
    }
    let labels = scene.labels();
    if let [x_label, y_label, ..] = labels.as_slice() {
        print_label(ctx, hi, axis, bounds, x_label.to_string(), colors.label);
        print_label(ctx, axis, hi, bounds, y_label.to_string(), colors.label);
    }
    ctx.layer();

    if let Some(curve) = scene.sampled_curve() {
        for segment in curve.segments() {
            for pair in segment.windows(2) {
                draw_line(ctx, pair[0], pair[1], bounds, colors.curve);
            }
        }
    }

    let coords: Vec<(f64, f64)> = scene
        .points()
        .iter()
        .map(xy)
        .filter(|&(x, y)| bounds.contains(x, y))
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color: colors.point,
    });

    for arrow in scene.arrows() {
        draw_arrow(ctx, xy(&arrow.tail), xy(&arrow.head()), bounds, config, colors.vector);
    }
    ctx.layer();

    for note in scene.annotations() {
        let (x, y) = xy(&note.at);
        print_label(ctx, x, y, bounds, note.text.clone(), colors.text);
    }
}

fn xy(p: &Point) -> (f64, f64) {
    let c = p.coords();
    (c.first().copied().unwrap_or(0.0), c.get(1).copied().unwrap_or(0.0))
}

fn xyz(p: &Point) -> [f64; 3] {
    let c = p.coords();
    [
        c.first().copied().unwrap_or(0.0),
        c.get(1).copied().unwrap_or(0.0),
        c.get(2).copied().unwrap_or(0.0),
    ]
}

/// Maps data space into the unit cube and through the camera.
#[derive(Debug, Clone, Copy)]
struct View3d {
    camera: Camera,
    extents: [(f64, f64); 3],
}

impl View3d {
    fn new(scene: &Scene, camera: Camera) -> Self {
        let r = scene.limits();
        let across = (r.min(), r.max());
        Self {
            camera,
            extents: [across, across, scene.z_extent()],
        }
    }

    fn to_unit(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (i, &(lo, hi)) in self.extents.iter().enumerate() {
            out[i] = 2.0 * (p[i] - lo) / (hi - lo) - 1.0;
        }
        out
    }

    fn project(&self, p: [f64; 3]) -> (f64, f64) {
        self.camera.project(self.to_unit(p))
    }

    fn depth(&self, p: [f64; 3]) -> f64 {
        self.camera.depth(self.to_unit(p))
    }

    /// Symmetric window around the projected unit cube.
    fn bounds(&self, padding: f64) -> Bounds {
        let reach = cube_corners()
            .iter()
            .map(|&c| {
                let (x, y) = self.camera.project(c);
                x.abs().max(y.abs())
            })
            .fold(0.0, f64::max);
        let e = reach * (1.0 + padding);
        Bounds {
            x: [-e, e],
            y: [-e, e],
        }
    }
}

fn cube_corners() -> [[f64; 3]; 8] {
    let mut corners = [[0.0; 3]; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        for (axis, c) in corner.iter_mut().enumerate() {
            *c = if i & (1 << axis) == 0 { -1.0 } else { 1.0 };
        }
    }
    corners
}

fn paint_3d(
    ctx: &mut Context<'_>,
    scene: &Scene,
    view: &View3d,
    bounds: &Bounds,
    palette: ColorPalette,
    config: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let corners = cube_corners();
    for (i, a) in corners.iter().enumerate() {
        for b in &corners[i + 1..] {
            let differing = a.iter().zip(b).filter(|(p, q)| p != q).count();
            if differing == 1 {
                let pa = view.camera.project(*a);
                let pb = view.camera.project(*b);
                draw_line(ctx, pa, pb, bounds, colors.axis);
            }
        }
    }

    let labels = scene.labels();
    let label_at = [[0.0, -1.25, -1.0], [1.25, 0.0, -1.0], [-1.25, -1.0, 0.0]];
    for (label, at) in labels.iter().zip(label_at) {
        let (x, y) = view.camera.project(at);
        print_label(ctx, x, y, bounds, label.to_string(), colors.label);
    }
    for (axis, &(lo, hi)) in view.extents.iter().enumerate() {
        for (value, side) in [(lo, -1.0), (hi, 1.0)] {
            let mut at = [-1.0, -1.0, -1.0];
            at[axis] = side;
            if axis == 0 {
                at[1] = -1.1;
            } else {
                at[0] = 1.1;
            }
            let (x, y) = view.camera.project(at);
            print_label(ctx, x, y, bounds, format_axis_label(value), colors.axis);
        }
    }
    ctx.layer();

    if let Some(grid) = scene.surface_grid() {
        let (z_lo, z_hi) = grid.z_extent().unwrap_or((0.0, 1.0));
        let (rows, cols) = grid.zs.dim();
        let stride = |n: usize| n.div_ceil(config.wireframe_lines.max(1)).max(1);
        let sample = |i: usize, j: usize| [grid.xs[[i, j]], grid.ys[[i, j]], grid.zs[[i, j]]];

        let mut edges = Vec::new();
        let mut push = |a: [f64; 3], b: [f64; 3]| {
            if a.iter().chain(&b).all(|v| v.is_finite()) {
                let mid = [
                    (a[0] + b[0]) / 2.0,
                    (a[1] + b[1]) / 2.0,
                    (a[2] + b[2]) / 2.0,
                ];
                edges.push((view.depth(mid), a, b));
            }
        };
        for i in line_indices(rows, stride(rows)) {
            for j in 1..cols {
                push(sample(i, j - 1), sample(i, j));
            }
        }
        for j in line_indices(cols, stride(cols)) {
            for i in 1..rows {
                push(sample(i - 1, j), sample(i, j));
            }
        }

        // Far to near so nearer strands win shared cells.
        edges.sort_by(|a, b| b.0.total_cmp(&a.0));
        for (_, a, b) in edges {
            let color = palette.color_in((a[2] + b[2]) / 2.0, z_lo, z_hi);
            draw_line(ctx, view.project(a), view.project(b), bounds, color);
        }
        ctx.layer();
    }

    let coords: Vec<(f64, f64)> = scene
        .points()
        .iter()
        .map(|p| view.project(xyz(p)))
        .filter(|&(x, y)| bounds.contains(x, y))
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color: colors.point,
    });

    for arrow in scene.arrows() {
        let tail = view.project(xyz(&arrow.tail));
        let head = view.project(xyz(&arrow.head()));
        draw_arrow(ctx, tail, head, bounds, config, colors.vector);
    }
    ctx.layer();

    for note in scene.annotations() {
        let (x, y) = view.project(xyz(&note.at));
        print_label(ctx, x, y, bounds, note.text.clone(), colors.text);
    }
}

/// Every `stride`-th index plus the last one.
fn line_indices(n: usize, stride: usize) -> Vec<usize> {
    let mut out: Vec<usize> = (0..n).step_by(stride).collect();
    if n > 0 && out.last() != Some(&(n - 1)) {
        out.push(n - 1);
    }
    out
}
