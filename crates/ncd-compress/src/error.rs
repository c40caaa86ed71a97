use thiserror::Error;

/// Errors raised by a compressor.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("invalid {codec} compression level {level}: expected {min}..={max}")]
    InvalidLevel {
        codec: &'static str,
        level: i32,
        min: i32,
        max: i32,
    },

    #[error("{codec} compression failed: {message}")]
    Backend { codec: &'static str, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompressError {
    /// Shorthand for a backend failure.
    pub fn backend(codec: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            codec,
            message: message.into(),
        }
    }
}

pub type CompressResult<T> = Result<T, CompressError>;
