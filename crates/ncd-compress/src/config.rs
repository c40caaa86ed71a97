use serde::{Deserialize, Serialize};

use crate::deflate::{DeflateCompressor, DEFAULT_DEFLATE_LEVEL};
use crate::error::CompressResult;
use crate::lz4::Lz4Compressor;
use crate::traits::Compressor;
use crate::zstandard::{ZstdCompressor, DEFAULT_ZSTD_LEVEL};

/// Declarative choice of compression backend.
///
/// Serialized with a `codec` tag, e.g. `{ codec = "zstd", level = 19 }`.
/// Defaults to LZ4 frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "codec", rename_all = "lowercase")]
pub enum CompressorConfig {
    Zstd {
        #[serde(default = "default_zstd_level")]
        level: i32,
    },
    Deflate {
        #[serde(default = "default_deflate_level")]
        level: u32,
    },
    Lz4,
}

fn default_zstd_level() -> i32 {
    DEFAULT_ZSTD_LEVEL
}

fn default_deflate_level() -> u32 {
    DEFAULT_DEFLATE_LEVEL
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self::Lz4
    }
}

impl CompressorConfig {
    /// Instantiate the configured compressor, validating its parameters.
    pub fn build(&self) -> CompressResult<Box<dyn Compressor>> {
        let compressor: Box<dyn Compressor> = match *self {
            Self::Zstd { level } => Box::new(ZstdCompressor::new(level)?),
            Self::Deflate { level } => Box::new(DeflateCompressor::new(level)?),
            Self::Lz4 => Box::new(Lz4Compressor),
        };
        Ok(compressor)
    }
}
