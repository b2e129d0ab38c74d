use super::shape::ShapeKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// a snapshot carried a shape whose vertex count does not match its kind
    #[error("{kind:?} requires at least {expected} vertices, snapshot carried {got}")]
    InvalidArity {
        kind: ShapeKind,
        expected: usize,
        got: usize,
    },

    /// the target index went stale, e.g. the scene was reset mid-drag
    #[error("shape index {index} out of range for scene of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("scene snapshot encode failed: {reason}")]
    Serialize { reason: String },

    #[error("scene snapshot decode failed: {reason}")]
    Deserialize { reason: String },
}
