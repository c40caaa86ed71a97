//! Zstandard compressor.

use crate::error::{CompressError, CompressResult};
use crate::traits::Compressor;

/// zstd's own default level; a good speed/ratio compromise.
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Zstandard compressor at a fixed level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    /// Create a compressor, validating `level` against the range supported by
    /// the linked zstd library.
    pub fn new(level: i32) -> CompressResult<Self> {
        let range = ::zstd::compression_level_range();
        if !range.contains(&level) {
            return Err(CompressError::InvalidLevel {
                codec: "zstd",
                level,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZSTD_LEVEL,
        }
    }
}

impl Compressor for ZstdCompressor {
    fn name(&self) -> &str {
        "zstd"
    }

    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>> {
        let out = ::zstd::encode_all(data, self.level)
            .map_err(|e| CompressError::backend("zstd", e.to_string()))?;
        tracing::trace!(
            level = self.level,
            input = data.len(),
            output = out.len(),
            "zstd compress"
        );
        Ok(out)
    }
}
