//! Application state and logic.

use crate::error::VizError;
use crate::input::{Focus, InputField};
use crate::keys::Action;
use crate::plot::{render_scene, Camera, Mode, RenderRequest, RenderSummary, SamplingConfig, Scene};
use crate::util::clipboard::copy_scene;
use crate::util::ColorPalette;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Where the shell is in a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for input.
    #[default]
    Idle,
    /// Render pipeline running.
    Rendering,
}

/// Initial form contents and sampling settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Starting mode.
    pub mode: Mode,
    /// Range lower bound text.
    pub range_min: String,
    /// Range upper bound text.
    pub range_max: String,
    /// Point list text.
    pub points: String,
    /// Vector list text.
    pub vectors: String,
    /// Equation text.
    pub equation: String,
    /// Sample counts.
    pub sampling: SamplingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::TwoD,
            range_min: "-5".to_string(),
            range_max: "5".to_string(),
            points: "(1,2); (0,0); (-3,4)".to_string(),
            vectors: "<2,1>; <-1,2>@(1,1)".to_string(),
            equation: "x**2".to_string(),
            sampling: SamplingConfig::default(),
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current mode.
    pub mode: Mode,
    /// Range lower bound.
    pub range_min: InputField,
    /// Range upper bound.
    pub range_max: InputField,
    /// Points.
    pub points: InputField,
    /// Vectors.
    pub vectors: InputField,
    /// Equation.
    pub equation: InputField,
    /// Focused input.
    pub focus: Focus,
    /// What is currently drawn.
    pub scene: Scene,
    /// 3D view.
    pub camera: Camera,
    /// Render state.
    pub phase: Phase,
    /// Status message.
    pub status: String,
    /// Error popup title.
    pub error_title: &'static str,
    /// Error message.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
    /// Surface colouring.
    pub palette: ColorPalette,
    /// Sample counts.
    pub sampling: SamplingConfig,
    /// Result of the last successful render.
    pub last_summary: Option<RenderSummary>,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    /// Create a new application instance.
    pub fn new(config: AppConfig) -> Self {
        Self {
            mode: config.mode,
            range_min: InputField::new("Range min", config.range_min),
            range_max: InputField::new("Range max", config.range_max),
            points: InputField::new("Points (a,b); ...", config.points),
            vectors: InputField::new("Vectors <a,b>@(c,d); ...", config.vectors),
            equation: InputField::new("Equation", config.equation),
            focus: Focus::default(),
            scene: Scene::new(config.mode),
            camera: Camera::default(),
            phase: Phase::Idle,
            status: "Ready.".to_string(),
            error_title: "",
            error_message: None,
            theme: Theme::default(),
            palette: ColorPalette::default(),
            sampling: config.sampling,
            last_summary: None,
            should_quit: false,
        }
    }

    /// Run the render pipeline over the current form.
    ///
    /// On failure the scene is blanked for the current mode and the error is
    /// kept for the popup.
    pub fn render(&mut self) {
        self.phase = Phase::Rendering;
        let request = RenderRequest {
            mode: self.mode,
            range_min: self.range_min.text(),
            range_max: self.range_max.text(),
            points: self.points.text(),
            vectors: self.vectors.text(),
            equation: self.equation.text(),
            sampling: self.sampling,
        };

        let mut scene = Scene::new(self.mode);
        match render_scene(&mut scene, &request) {
            Ok(summary) => {
                self.scene = scene;
                self.status = summary.status();
                self.error_message = None;
                tracing::info!("{}", self.status);
                self.last_summary = Some(summary);
            },
            Err(e) => {
                tracing::warn!("Render failed: {}", e);
                self.scene = Scene::new(self.mode);
                self.status = "Error.".to_string();
                self.last_summary = None;
                self.show_error(&e);
            },
        }
        self.phase = Phase::Idle;
    }

    /// Blank the axes for the current mode.
    pub fn clear(&mut self) {
        self.scene = Scene::new(self.mode);
        self.last_summary = None;
        self.status = "Cleared.".to_string();
        tracing::info!("Cleared {} axes", self.mode.name());
    }

    /// Switch mode, leaving a blank scene for the new dimensionality.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.scene = Scene::new(mode);
        self.camera = Camera::default();
        self.last_summary = None;
        self.status = format!("Mode: {}", mode.name());
        tracing::info!("Switched to {} mode", mode.name());
    }

    /// Toggle between 2D and 3D.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// The field that has focus.
    pub fn focused_field(&self) -> &InputField {
        match self.focus {
            Focus::RangeMin => &self.range_min,
            Focus::RangeMax => &self.range_max,
            Focus::Points => &self.points,
            Focus::Vectors => &self.vectors,
            Focus::Equation => &self.equation,
        }
    }

    fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            Focus::RangeMin => &mut self.range_min,
            Focus::RangeMax => &mut self.range_max,
            Focus::Points => &mut self.points,
            Focus::Vectors => &mut self.vectors,
            Focus::Equation => &mut self.equation,
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle to the next surface palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Rotate the 3D view. Ignored in 2D.
    pub fn orbit(&mut self, azimuth_steps: i32, elevation_steps: i32) {
        if self.mode != Mode::ThreeD {
            return;
        }
        self.camera.orbit(azimuth_steps, elevation_steps);
        let (az, el) = self.camera.degrees();
        self.status = format!("View: azimuth {:.0}°, elevation {:.0}°", az, el);
    }

    /// Restore the default 3D view.
    pub fn reset_view(&mut self) {
        self.camera = Camera::default();
        self.status = "View reset".to_string();
    }

    /// Copy the scene summary to the clipboard.
    pub fn copy_scene(&mut self) {
        match copy_scene(&self.scene) {
            Ok(lines) => {
                self.status = format!("Copied scene ({} lines)", lines);
            },
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                self.status = "Copy failed".to_string();
                self.show_error(&e);
            },
        }
    }

    fn show_error(&mut self, err: &VizError) {
        self.error_title = err.kind();
        self.error_message = Some(err.to_string());
    }

    /// Close the error popup.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Render => self.render(),
            Action::Clear => self.clear(),
            Action::ToggleMode => self.toggle_mode(),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Input(c) => self.focused_field_mut().input(c),
            Action::Backspace => self.focused_field_mut().backspace(),
            Action::ClearField => self.focused_field_mut().clear(),
            Action::CyclePalette => self.cycle_palette(),
            Action::CycleTheme => self.cycle_theme(),
            Action::Orbit {
                azimuth,
                elevation,
            } => self.orbit(azimuth, elevation),
            Action::ResetView => self.reset_view(),
            Action::CopyScene => self.copy_scene(),
            Action::Dismiss => self.dismiss_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_renders() {
        let mut app = App::default();
        app.render();
        assert!(app.error_message.is_none());
        assert_eq!(app.scene.points().len(), 3);
        assert_eq!(app.scene.arrows().len(), 2);
        assert!(app.scene.sampled_curve().is_some());
        assert!(app.status.starts_with("Rendered."));
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn failed_render_blanks_scene() {
        let mut app = App::default();
        app.render();
        assert!(!app.scene.is_blank());

        app.equation = InputField::new("Equation", "foo(x)");
        app.render();
        assert!(app.scene.is_blank());
        assert_eq!(app.status, "Error.");
        assert_eq!(app.error_title, "Undefined symbol");
        assert!(app.error_message.as_deref().unwrap().contains("foo"));

        app.apply(Action::Dismiss);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn mode_switch_blanks_scene_and_resets_camera() {
        let mut app = App::default();
        app.render();
        app.toggle_mode();
        app.orbit(2, 1);
        assert_ne!(app.camera, Camera::default());

        app.toggle_mode();
        assert_eq!(app.mode, Mode::TwoD);
        assert!(app.scene.is_blank());
        assert_eq!(app.scene.mode(), Mode::TwoD);
        assert_eq!(app.camera, Camera::default());
    }

    #[test]
    fn orbit_is_ignored_in_2d() {
        let mut app = App::default();
        app.orbit(1, 1);
        assert_eq!(app.camera, Camera::default());
    }

    #[test]
    fn clear_sets_status() {
        let mut app = App::default();
        app.render();
        app.apply(Action::Clear);
        assert!(app.scene.is_blank());
        assert_eq!(app.status, "Cleared.");
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut app = App::default();
        app.apply(Action::FocusNext);
        app.apply(Action::FocusNext);
        assert_eq!(app.focus, Focus::Equation);
        app.apply(Action::ClearField);
        for c in "sin(x)".chars() {
            app.apply(Action::Input(c));
        }
        app.apply(Action::Backspace);
        assert_eq!(app.equation.text(), "sin(x");
    }

    #[test]
    fn quit_action() {
        let mut app = App::default();
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
