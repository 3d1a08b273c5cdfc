use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdIndexError {
    /// A query was issued against a tree built from zero points.
    #[error("Cannot query a tree with no points.")]
    EmptyTree,

    /// The requested operation is not supported on a built tree.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The caller-provided point table was malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for `Result` with this crate's error type.
pub type Result<T> = std::result::Result<T, KdIndexError>;
