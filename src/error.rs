//! Error types shared by the curve model and the editor around it.

use thiserror::Error;

/// Errors raised by the curve model and the subdivision routines.
///
/// Both variants are programmer errors: the editor only produces valid
/// indices and only refines sequences it has seeded itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A refinement or limit computation was asked for on a sequence that is too short
    #[error("need at least {min} points, got {len}")]
    TooFewPoints {
        /// Length of the offending sequence
        len: usize,
        /// Minimal length the operation supports
        min: usize,
    },

    /// A control point index outside the control polygon
    #[error("control point index {index} out of range for {len} points")]
    InvalidIndex {
        /// The requested index
        index: usize,
        /// Length of the control polygon
        len: usize,
    },
}

/// Top-level error type of the editor and its replay tool.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error from the curve model
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Malformed line in an input event script
    #[error("line {line}: {reason}")]
    Script {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Window size or camera that cannot map pixels to world coordinates
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a script or writing a frame failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;
