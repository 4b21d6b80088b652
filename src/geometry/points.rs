//! Point list parsing.

use super::{parse_components, segments, unwrap_delimited, Point};
use crate::error::{Result, VizError};

/// Parse a `;`-separated list of `(a,b)` / `(a,b,c)` points.
///
/// Blank input gives an empty list. Every point must have exactly `dims`
/// numbers; input order is preserved.
pub fn parse_points(text: &str, dims: usize) -> Result<Vec<Point>> {
    let shape = point_shape(dims);

    let points = segments(text)
        .map(|segment| {
            let inner = unwrap_delimited(segment, '(', ')')
                .ok_or_else(|| VizError::parse(segment, shape.clone()))?;
            parse_components(inner, dims, segment, &shape).map(Point::new)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed {} point(s) ({}D)", points.len(), dims);
    Ok(points)
}

fn point_shape(dims: usize) -> String {
    match dims {
        2 => "a point like (a,b)".to_string(),
        3 => "a point like (a,b,c)".to_string(),
        n => format!("a point with {} coordinates", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_order() {
        let pts = parse_points("(1,2); (0,0); (-3,4)", 2).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::from([1.0, 2.0]),
                Point::from([0.0, 0.0]),
                Point::from([-3.0, 4.0]),
            ]
        );
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_points("", 2).unwrap().is_empty());
        assert!(parse_points("   \n\t ", 3).unwrap().is_empty());
    }

    #[test]
    fn three_dimensional() {
        let pts = parse_points("( 1 , 2 , 3 );(0.5,-1e2,7)", 3).unwrap();
        assert_eq!(pts[1].coords(), &[0.5, -100.0, 7.0]);
    }

    #[test]
    fn wrong_field_count() {
        let err = parse_points("(1,2,3)", 2).unwrap_err();
        match err {
            VizError::Parse { segment, expected } => {
                assert_eq!(segment, "(1,2,3)");
                assert!(expected.contains("2 numbers"), "{expected}");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_parentheses() {
        let err = parse_points("(1,2); 3,4", 2).unwrap_err();
        assert!(matches!(err, VizError::Parse { ref segment, .. } if segment == "3,4"));
    }

    #[test]
    fn non_numeric_literal() {
        let err = parse_points("(1,a)", 2).unwrap_err();
        assert!(err.to_string().contains("`a`"));
    }

    #[test]
    fn empty_parentheses() {
        assert!(parse_points("()", 2).is_err());
    }
}
