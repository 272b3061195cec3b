use thiserror::Error;

// Unified error type for densevec

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseError {
    #[error("invalid decimal literal {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("size mismatch: expected {expected} components, found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("matrix with {ncols} columns cannot be used as vector storage")]
    NotAColumn { ncols: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
