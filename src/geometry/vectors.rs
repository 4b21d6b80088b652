//! Vector list parsing.

use super::{parse_components, segments, unwrap_delimited, Point, Vector};
use crate::error::{Result, VizError};

/// Marker introducing an explicit tail.
const TAIL_MARKER: &str = "@(";

/// Parse a `;`-separated list of `<vx,vy>` / `<vx,vy>@(tx,ty)` vectors.
///
/// Without a tail the vector starts at the origin. Input order is preserved.
pub fn parse_vectors(text: &str, dims: usize) -> Result<Vec<Vector>> {
    let vectors = segments(text)
        .map(|segment| parse_vector(segment, dims))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed {} vector(s) ({}D)", vectors.len(), dims);
    Ok(vectors)
}

fn parse_vector(segment: &str, dims: usize) -> Result<Vector> {
    let (vector_part, tail_part) = if segment.contains(TAIL_MARKER) {
        match segment.split_once('@') {
            Some((v, t)) => (v.trim(), Some(t.trim())),
            None => (segment, None),
        }
    } else {
        (segment, None)
    };

    let shape = vector_shape(dims);
    let inner = unwrap_delimited(vector_part, '<', '>')
        .ok_or_else(|| VizError::parse(vector_part, shape.clone()))?;
    let direction = parse_components(inner, dims, vector_part, &shape)?;

    let tail = match tail_part {
        Some(tail_text) => {
            let shape = tail_shape(dims);
            let inner = unwrap_delimited(tail_text, '(', ')')
                .ok_or_else(|| VizError::parse(format!("@{}", tail_text), shape.clone()))?;
            Point::new(parse_components(inner, dims, tail_text, &shape)?)
        },
        None => Point::origin(dims),
    };

    Ok(Vector::new(tail, direction))
}

fn vector_shape(dims: usize) -> String {
    match dims {
        2 => "a vector like <a,b>".to_string(),
        3 => "a vector like <a,b,c>".to_string(),
        n => format!("a vector with {} components", n),
    }
}

fn tail_shape(dims: usize) -> String {
    match dims {
        2 => "a tail like @(x,y)".to_string(),
        3 => "a tail like @(x,y,z)".to_string(),
        n => format!("a tail with {} coordinates", n),
    }
}
