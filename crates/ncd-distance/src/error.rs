use ncd_compress::CompressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NcdError {
    /// Both objects compress to zero bytes, so the normalizer is zero.
    #[error("distance is undefined: both objects compress to zero bytes")]
    UndefinedDistance,

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Passed through from the compressor untouched.
    #[error(transparent)]
    Compressor(#[from] CompressError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NcdResult<T> = Result<T, NcdError>;
