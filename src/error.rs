//! Error types for matrix operations.

/// Errors raised by the matrix store and the nearest-value selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// No cell at the given row/column address.
    #[error("cell ({row}, {col}) is out of bounds")]
    CellOutOfBounds { row: usize, col: usize },

    /// No row at the given index.
    #[error("row {row} is out of bounds")]
    RowOutOfBounds { row: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

