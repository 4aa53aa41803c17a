use std::io;
use std::io::Error as IOError;
use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug)]
pub enum ShapeErrorKind {
    #[error("{op}: operands {lhs} and {rhs} have incompatible shapes")]
    IncompatibleShape {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("reshape source must be a column, got {0}")]
    NotColumn(Shape),
    #[error("cannot reshape {len} elements into {rows} rows")]
    Indivisible { len: usize, rows: usize },
    #[error("buffer holds {actual} elements, shape needs {expected}")]
    BufferLength { expected: usize, actual: usize },
}

pub type GResult<T> = Result<T, GError>;

#[derive(Error, Debug)]
pub enum GError {
    #[error("shape error:{0}")]
    ShapeError(ShapeErrorKind),
    #[error("dimension must be positive, got {0}")]
    InvalidDimension(usize),
    #[error("data length {len} is not a multiple of dimension {dim}")]
    MisalignedData { len: usize, dim: usize },
    #[error("covariance needs at least two samples, got {0}")]
    InsufficientSamples(usize),
    #[error("Unexpected io: {0}, {1}")]
    UnexpectIO(String, io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

impl From<ShapeErrorKind> for GError {
    fn from(e: ShapeErrorKind) -> Self {
        GError::ShapeError(e)
    }
}

impl From<&str> for GError {
    fn from(e: &str) -> Self {
        GError::Unexpected(e.to_string())
    }
}

impl From<(&str, io::Error)> for GError {
    fn from(e: (&str, io::Error)) -> Self {
        GError::UnexpectIO(e.0.to_string(), e.1)
    }
}

impl From<String> for GError {
    fn from(e: String) -> Self {
        GError::Unexpected(e)
    }
}

impl From<IOError> for GError {
    fn from(e: IOError) -> Self {
        GError::Unexpected(e.to_string())
    }
}

impl From<GError> for String {
    fn from(e: GError) -> Self {
        format!("{}", e)
    }
}
