// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("invalid deformation parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Invalid grid dimensions: {columns} columns x {rows} rows (both must be at least 1)")]
    InvalidGridDimensions { columns: usize, rows: usize },

    #[error("Vertex count mismatch: expected {expected}, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("Grid dimension mismatch: {left_columns}x{left_rows} vs {right_columns}x{right_rows}")]
    GridDimensionMismatch {
        left_columns: usize,
        left_rows: usize,
        right_columns: usize,
        right_rows: usize,
    },
}

impl MathError {
    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        MathError::InvalidParameters {
            reason: reason.into(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
