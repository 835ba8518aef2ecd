use derive_more::{Display, From};

use crate::types::Value;

pub type Result<T> = core::result::Result<T, ExtractError>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum ExtractError {
    /// Grid step size must be strictly positive.
    InvalidStepSize { stepsize: Value },
    /// Grid lower bound exceeds its upper bound.
    InvalidBounds { min: Value, max: Value },
    /// A triangle soup must hold 9 floats per triangle.
    PartialTriangle { len: usize },
    /// Vertex and normal buffers must be the same length.
    NormalCountMismatch { vertices: usize, normals: usize },
    /// Underlying I/O failure while exporting.
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for ExtractError {}
