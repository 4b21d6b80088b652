//! Vecviz - a terminal plotter for points, vectors and equations.

use anyhow::Result;
use clap::{builder::RangedU64ValueParser, Parser, ValueEnum};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vecviz::app::{App, AppConfig};
use vecviz::keys::action_for;
use vecviz::plot::{render_scene, Mode, RenderRequest, SamplingConfig, Scene};
use vecviz::ui;
use vecviz::util::LayoutConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Planar plot
    #[value(name = "2d")]
    TwoD,
    /// Spatial plot
    #[value(name = "3d")]
    ThreeD,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoD => Mode::TwoD,
            ModeArg::ThreeD => Mode::ThreeD,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vecviz")]
#[command(about = "A terminal plotter for points, vectors and equations", long_about = None)]
struct Args {
    /// Plot mode
    #[arg(long, value_enum, default_value = "2d")]
    mode: ModeArg,

    /// Lower bound of the plotted range
    #[arg(long, default_value = "-5", allow_hyphen_values = true)]
    min: String,

    /// Upper bound of the plotted range
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    max: String,

    /// Points, e.g. "(1,2); (0,0)"
    #[arg(long, default_value = "(1,2); (0,0); (-3,4)", allow_hyphen_values = true)]
    points: String,

    /// Vectors, e.g. "<2,1>; <-1,2>@(1,1)"
    #[arg(long, default_value = "<2,1>; <-1,2>@(1,1)", allow_hyphen_values = true)]
    vectors: String,

    /// Equation in x (2D) or x and y (3D)
    #[arg(long, default_value = "x**2", allow_hyphen_values = true)]
    equation: String,

    /// Samples along a 2D curve (2 to 100000)
    #[arg(
        long,
        default_value_t = SamplingConfig::default().curve_samples,
        value_parser = RangedU64ValueParser::<usize>::new()
            .range(2..=SamplingConfig::MAX_CURVE_SAMPLES as u64)
    )]
    samples: usize,

    /// Samples per side of a 3D surface grid (2 to 1000)
    #[arg(
        long,
        default_value_t = SamplingConfig::default().surface_samples,
        value_parser = RangedU64ValueParser::<usize>::new()
            .range(2..=SamplingConfig::MAX_SURFACE_SAMPLES as u64)
    )]
    grid: usize,

    /// Render once and print the scene summary instead of opening the UI
    #[arg(long)]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log filter, e.g. "info" or "vecviz=trace"
    #[arg(long, default_value = "debug")]
    log_level: String,
}

impl Args {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            mode: self.mode.into(),
            range_min: self.min.clone(),
            range_max: self.max.clone(),
            points: self.points.clone(),
            vectors: self.vectors.clone(),
            equation: self.equation.clone(),
            sampling: SamplingConfig {
                curve_samples: self.samples,
                surface_samples: self.grid,
            },
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(log_path) = &args.log else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::info!("Starting vecviz");
    Ok(())
}

/// Render without a terminal UI. Returns the process exit code.
fn print_scene(config: &AppConfig) -> i32 {
    let mut scene = Scene::new(config.mode);
    let request = RenderRequest {
        mode: config.mode,
        range_min: &config.range_min,
        range_max: &config.range_max,
        points: &config.points,
        vectors: &config.vectors,
        equation: &config.equation,
        sampling: config.sampling,
    };
    match render_scene(&mut scene, &request) {
        Ok(summary) => {
            print!("{}", scene.describe());
            println!("{}", summary.status());
            0
        },
        Err(e) => {
            tracing::warn!("Render failed: {}", e);
            eprintln!("{}: {}", e.kind(), e);
            1
        },
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = args.app_config();

    if args.print {
        let code = print_scene(&config);
        tracing::info!("vecviz exited");
        std::process::exit(code);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("vecviz exited");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let layout = LayoutConfig::default();

    loop {
        terminal.draw(|f| ui::draw(f, &app, &layout))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = action_for(key, app.error_message.is_some()) {
                    app.apply(action);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
