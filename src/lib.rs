//! Vecviz - a terminal plotter for points, vectors and equations.
//!
//! Type points, vectors and an equation into a small form and see them on a
//! 2D plane or in a rotatable 3D box, drawn with braille characters.
//!
//! # Features
//!
//! - Point lists like `(1,2); (0,0)` and vectors like `<2,1>@(1,1)`
//! - Equations `y = f(x)` or `z = f(x, y)` over a fixed set of functions
//! - Undefined samples (`sqrt(-1)`, `1/0`) leave gaps instead of failing
//! - Gruvbox color themes and surface palettes
//! - Clipboard export of the scene summary
//!
//! # Example
//!
//! ```
//! use vecviz::plot::{render_scene, Mode, RenderRequest, SamplingConfig, Scene};
//!
//! let mut scene = Scene::new(Mode::TwoD);
//! let request = RenderRequest {
//!     mode: Mode::TwoD,
//!     range_min: "-5",
//!     range_max: "5",
//!     points: "(1,2); (0,0)",
//!     vectors: "<2,1>@(1,1)",
//!     equation: "y = x**2",
//!     sampling: SamplingConfig::default(),
//! };
//! let summary = render_scene(&mut scene, &request)?;
//! assert_eq!(summary.points, 2);
//! # Ok::<(), vecviz::VizError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod input;
pub mod keys;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{Result, VizError};
