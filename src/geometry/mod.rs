//! Points and vectors parsed from user text.
//!
//! Both list formats are `;`-separated. Points are written `(a,b)` or
//! `(a,b,c)`, vectors `<vx,vy>` optionally followed by a tail `@(tx,ty)`.

mod points;
mod vectors;

pub use points::parse_points;
pub use vectors::parse_vectors;

use crate::error::{Result, VizError};

/// A coordinate tuple of 2 or 3 reals.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// The origin of a `dims`-dimensional space.
    pub fn origin(dims: usize) -> Self {
        Self {
            coords: vec![0.0; dims],
        }
    }

    /// Coordinates in axis order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Number of coordinates.
    pub fn dims(&self) -> usize {
        self.coords.len()
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

/// An arrow from `tail` along `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    /// Where the arrow starts.
    pub tail: Point,
    /// Component offsets from the tail.
    pub direction: Vec<f64>,
}

impl Vector {
    /// Create a vector anchored at `tail`.
    pub fn new(tail: Point, direction: Vec<f64>) -> Self {
        Self { tail, direction }
    }

    /// Point where the arrow ends.
    pub fn head(&self) -> Point {
        Point::new(
            self.tail
                .coords()
                .iter()
                .zip(&self.direction)
                .map(|(t, d)| t + d)
                .collect(),
        )
    }

    /// Number of components.
    pub fn dims(&self) -> usize {
        self.direction.len()
    }
}

/// Split list text on `;`, dropping blank segments.
fn segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Strip `open`/`close` delimiters from a trimmed segment.
fn unwrap_delimited(segment: &str, open: char, close: char) -> Option<&str> {
    segment.strip_prefix(open)?.strip_suffix(close)
}

/// Parse the comma-separated numbers inside a bracketed segment.
///
/// `segment` is the full text reported on failure and `shape` describes what
/// was expected, e.g. "a point like (a,b)".
fn parse_components(inner: &str, dims: usize, segment: &str, shape: &str) -> Result<Vec<f64>> {
    let literals: Vec<&str> = inner.split(',').map(str::trim).collect();
    if literals.len() != dims {
        return Err(VizError::parse(
            segment,
            format!("{} with {} numbers, found {}", shape, dims, literals.len()),
        ));
    }

    literals
        .iter()
        .map(|literal| parse_real(literal, segment))
        .collect()
}

/// Parse one finite real literal.
pub(crate) fn parse_real(literal: &str, segment: &str) -> Result<f64> {
    match literal.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(VizError::parse(
            segment,
            format!("a real number in place of `{}`", literal.trim()),
        )),
    }
}
