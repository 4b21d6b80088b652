use vecviz::app::App;
use vecviz::expr::{compile, Variable};
use vecviz::geometry::{parse_points, parse_vectors, Point, Vector};
use vecviz::input::InputField;
use vecviz::plot::{
    render_scene, AxisRange, Curve, Mode, PlotSurface, RenderRequest, SamplingConfig, Scene,
    SurfaceGrid,
};
use vecviz::{Result, VizError};

/// Records every call it receives.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl PlotSurface for Recorder {
    fn reset(&mut self, mode: Mode) {
        self.calls.push(format!("reset {}", mode.name()));
    }

    fn scatter(&mut self, points: &[Point]) -> Result<()> {
        self.calls.push(format!("scatter {}", points.len()));
        Ok(())
    }

    fn arrow(&mut self, vector: &Vector) -> Result<()> {
        self.calls.push(format!("arrow {:?}", vector.direction));
        Ok(())
    }

    fn annotate(&mut self, _at: &Point, text: &str) -> Result<()> {
        self.calls.push(format!("annotate {}", text));
        Ok(())
    }

    fn curve(&mut self, curve: &Curve) -> Result<()> {
        self.calls.push(format!("curve {}", curve.xs.len()));
        Ok(())
    }

    fn surface(&mut self, grid: &SurfaceGrid) -> Result<()> {
        self.calls.push(format!("surface {:?}", grid.zs.dim()));
        Ok(())
    }

    fn set_limits(&mut self, range: AxisRange) -> Result<()> {
        self.calls
            .push(format!("limits {} {}", range.min(), range.max()));
        Ok(())
    }

    fn set_labels(&mut self, labels: &[&str]) -> Result<()> {
        self.calls.push(format!("labels {}", labels.join(",")));
        Ok(())
    }
}

fn request<'a>(mode: Mode, points: &'a str, vectors: &'a str, equation: &'a str) -> RenderRequest<'a> {
    RenderRequest {
        mode,
        range_min: "-5",
        range_max: "5",
        points,
        vectors,
        equation,
        sampling: SamplingConfig::default(),
    }
}

#[test]
fn points_parse_in_order() {
    let points = parse_points("(1.5,2); (-3,4)", 2).unwrap();
    assert_eq!(points[0].coords(), &[1.5, 2.0]);
    assert_eq!(points[1].coords(), &[-3.0, 4.0]);
    assert!(parse_points("   ", 2).unwrap().is_empty());
}

#[test]
fn vector_without_tail_starts_at_origin() {
    let vectors = parse_vectors("<1,2,3>", 3).unwrap();
    assert_eq!(vectors[0].tail, Point::origin(3));
    assert_eq!(vectors[0].direction, vec![1.0, 2.0, 3.0]);
}

#[test]
fn wrong_dimensionality_is_a_parse_error() {
    assert!(matches!(
        parse_points("(1,2,3)", 2),
        Err(VizError::Parse { .. })
    ));
}

#[test]
fn power_operator() {
    let f = compile("x**2", &[Variable::X]).unwrap();
    assert_eq!(f.eval_at(3.0, 0.0), 9.0);
}

#[test]
fn unknown_function_is_rejected() {
    assert!(matches!(
        compile("foo(x)", &[Variable::X]),
        Err(VizError::UndefinedSymbol { .. })
    ));
}

#[test]
fn inverted_range_fails_before_any_surface_call() {
    let mut surface = Recorder::default();
    let req = RenderRequest {
        range_min: "5",
        range_max: "1",
        ..request(Mode::TwoD, "not a point", "<", "foo(")
    };
    let err = render_scene(&mut surface, &req).unwrap_err();
    assert!(matches!(err, VizError::Range { .. }));
    assert!(surface.calls.is_empty());
}

#[test]
fn empty_form_draws_ranged_blank_axes() {
    let mut surface = Recorder::default();
    let summary = render_scene(&mut surface, &request(Mode::TwoD, "", "", "  ")).unwrap();
    assert_eq!(
        surface.calls,
        vec!["reset 2D", "limits -5 5", "labels x,y"]
    );
    assert_eq!(summary.points, 0);
    assert_eq!(summary.equation, None);
}

#[test]
fn bare_prefix_equation_is_empty_expression() {
    for equation in ["y=", " z = "] {
        let mut surface = Recorder::default();
        let err = render_scene(&mut surface, &request(Mode::TwoD, "", "", equation)).unwrap_err();
        assert!(matches!(err, VizError::EmptyExpression), "{equation:?}: {err:?}");
        assert!(!surface.calls.iter().any(|c| c.starts_with("curve")));
    }
}

#[test]
fn calls_arrive_in_render_order() {
    let mut surface = Recorder::default();
    render_scene(
        &mut surface,
        &request(Mode::TwoD, "(1,2); (0,0)", "<-1,2>@(1,1)", "y = x^2"),
    )
    .unwrap();
    assert_eq!(
        surface.calls,
        vec![
            "reset 2D",
            "scatter 2",
            "annotate P0",
            "annotate P1",
            "arrow [-1.0, 2.0]",
            "annotate v0",
            "curve 600",
            "limits -5 5",
            "labels x,y",
        ]
    );
}

#[test]
fn surface_in_3d_uses_grid_samples() {
    let mut surface = Recorder::default();
    let mut req = request(Mode::ThreeD, "", "", "z = x*y");
    req.sampling.surface_samples = 12;
    render_scene(&mut surface, &req).unwrap();
    assert!(surface.calls.contains(&"surface (12, 12)".to_string()));
    assert_eq!(surface.calls.last().unwrap(), "labels x,y,z");
}

#[test]
fn undefined_samples_are_counted_not_fatal() {
    let mut scene = Scene::new(Mode::TwoD);
    let summary = render_scene(&mut scene, &request(Mode::TwoD, "", "", "sqrt(x)")).unwrap();
    assert!(summary.undefined_samples > 0);
    let curve = scene.sampled_curve().unwrap();
    assert!(curve.ys[0].is_nan());
    assert!(curve.ys[curve.ys.len() - 1].is_finite());
}

#[test]
fn failing_render_leaves_blank_scene() {
    let mut app = App::default();
    app.render();
    assert!(!app.scene.is_blank());

    app.points = InputField::new("Points", "(1,2");
    app.render();
    assert!(app.scene.is_blank());
    assert_eq!(app.scene.mode(), Mode::TwoD);
    assert_eq!(app.status, "Error.");
    assert!(app.error_message.is_some());
}

#[test]
fn mode_switch_never_projects_existing_content() {
    let mut app = App::default();
    app.render();
    app.toggle_mode();
    assert_eq!(app.scene, Scene::new(Mode::ThreeD));

    // 2D input is rejected in 3D rather than reinterpreted.
    app.render();
    assert_eq!(app.error_title, "Parse error");
    assert!(app.scene.is_blank());
}
