use crate::ring::{Matrix, Vector};

#[derive(thiserror::Error, Debug)]
pub enum ClassicCryptoError {
    /// The matrix has no inverse modulo `modulus` (its determinant is not a unit).
    #[error("NotInvertible: {matrix:?} has determinant {determinant} which is not a unit mod {modulus}")]
    NotInvertible {
        matrix: Matrix,
        determinant: i64,
        modulus: u64,
    },
    /// A matrix over the integers was given without an explicit modulus.
    #[error("NoModulus: the matrix is not defined over a finite ring and no modulus was given")]
    NoModulus,
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("UnknownSymbol: {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("IndexOutOfRange: {index} is outside [0, {len})")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("DuplicateSymbol: {symbol:?} appears more than once in the alphabet")]
    DuplicateSymbol { symbol: char },
    #[error("NotImplemented: {0}")]
    NotImplemented(String),

    /// The final block is shorter than the block size and no padding was supplied.
    #[error("PaddingRequired: additional padding is needed for the block {chunk:?} (block size {block_size})")]
    PaddingRequired { chunk: Vector, block_size: usize },
    #[error("IncompleteBlock: the block {chunk:?} is shorter than the block size {block_size}")]
    IncompleteBlock { chunk: String, block_size: usize },
    #[error("ValueOutOfRange: {value} is not a canonical residue mod {modulus}")]
    ValueOutOfRange { value: i64, modulus: u64 },
    #[error("InvalidPermutation: {0:?} is not a permutation of 0..n")]
    InvalidPermutation(Vec<usize>),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
