//! Error types for Vecviz.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Vecviz operations.
pub type Result<T> = std::result::Result<T, VizError>;

/// Errors that can occur in Vecviz.
#[derive(Debug, Error)]
pub enum VizError {
    /// Malformed point, vector or range text.
    #[error("Could not parse `{segment}`: expected {expected}")]
    Parse {
        /// The offending piece of input.
        segment: String,
        /// Description of the accepted shape.
        expected: String,
    },

    /// Equation references a name outside the declared variables and allow-list.
    #[error("Undefined symbol `{name}` (allowed: {allowed})")]
    UndefinedSymbol {
        /// The rejected identifier.
        name: String,
        /// Comma-separated list of names that would have been accepted.
        allowed: String,
    },

    /// Range minimum is not strictly below the maximum.
    #[error("Range min ({min}) must be less than range max ({max})")]
    Range {
        /// Lower bound as entered.
        min: f64,
        /// Upper bound as entered.
        max: f64,
    },

    /// Equation text is not valid syntax.
    #[error("Invalid equation at column {column}: {message}")]
    Syntax {
        /// 1-based column of the problem.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// Equation text is blank after normalisation.
    #[error("Empty expression")]
    EmptyExpression,

    /// Function called with the wrong number of arguments.
    #[error("{function}() takes {expected} argument(s), got {found}")]
    Arity {
        /// Function name.
        function: &'static str,
        /// Accepted argument counts.
        expected: String,
        /// Number of arguments given.
        found: usize,
    },

    /// Compiled expression called with mismatched arguments.
    #[error("Invalid evaluation arguments: {0}")]
    Arguments(String),

    /// The plot surface rejected a draw call.
    #[error("Render error: {0}")]
    Surface(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Create a Parse error.
    pub fn parse(segment: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Parse {
            segment: segment.into(),
            expected: expected.into(),
        }
    }

    /// Create a Surface error.
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface(message.into())
    }

    /// Short label for the error kind, shown in the error popup title.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "Parse error",
            Self::UndefinedSymbol { .. } => "Undefined symbol",
            Self::Range { .. } => "Range error",
            Self::Syntax { .. } | Self::EmptyExpression | Self::Arity { .. } => "Equation error",
            Self::Arguments(_) => "Evaluation error",
            Self::Surface(_) => "Render error",
            Self::Clipboard(_) => "Clipboard error",
            Self::Io(_) => "IO error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_segment_and_shape() {
        let err = VizError::parse("(1,2,3)", "a point with 2 numbers");
        let msg = err.to_string();
        assert!(msg.contains("(1,2,3)"));
        assert!(msg.contains("2 numbers"));
        assert_eq!(err.kind(), "Parse error");
    }

    #[test]
    fn range_error_message() {
        let err = VizError::Range { min: 5.0, max: 1.0 };
        assert_eq!(
            err.to_string(),
            "Range min (5) must be less than range max (1)"
        );
    }
}
