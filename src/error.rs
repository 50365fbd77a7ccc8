//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced at the solver boundary.
///
/// Degenerate items (zero value or zero weight) are not errors: they are
/// dropped with a warning when the problem is built.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested algorithm name matches no known solver.
    #[error("unknown algorithm '{0}' (expected \"backtracking\" or \"branchAndBound\")")]
    UnknownAlgorithm(String),

    /// An item carries a negative value or weight.
    #[error("item {index} has negative {field} ({amount})")]
    InvalidItem {
        index: usize,
        field: &'static str,
        amount: f64,
    },

    /// The capacity limit is negative.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(f64),

    /// The instance header row could not be parsed as `n wmax`.
    #[error("invalid header row: expected 'n wmax', got '{0}'")]
    InvalidHeader(String),

    /// An item row could not be parsed as `value weight`.
    #[error("invalid row at line {line}: expected 'value weight', got '{content}'")]
    InvalidRow { line: usize, content: String },

    /// The number of item rows does not match the declared count.
    #[error("header declares {declared} items, found {found} rows")]
    RowCountMismatch { declared: usize, found: usize },

    /// Failed to read the instance file.
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),
}
