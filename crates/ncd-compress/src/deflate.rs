//! Raw DEFLATE compressor (no zlib/gzip framing).

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::{CompressError, CompressResult};
use crate::traits::Compressor;

pub const DEFAULT_DEFLATE_LEVEL: u32 = 6;
const MAX_DEFLATE_LEVEL: u32 = 9;

/// DEFLATE compressor at a fixed level (0-9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeflateCompressor {
    level: u32,
}

impl DeflateCompressor {
    pub fn new(level: u32) -> CompressResult<Self> {
        if level > MAX_DEFLATE_LEVEL {
            return Err(CompressError::InvalidLevel {
                codec: "deflate",
                level: i32::try_from(level).unwrap_or(i32::MAX),
                min: 0,
                max: MAX_DEFLATE_LEVEL as i32,
            });
        }
        Ok(Self { level })
    }

    /// Strongest (and slowest) setting.
    pub fn best() -> Self {
        Self {
            level: MAX_DEFLATE_LEVEL,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for DeflateCompressor {
    fn default() -> Self {
        Self {
            level: DEFAULT_DEFLATE_LEVEL,
        }
    }
}

impl Compressor for DeflateCompressor {
    fn name(&self) -> &str {
        "deflate"
    }

    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>> {
        let mut enc = DeflateEncoder::new(Vec::new(), Compression::new(self.level));
        enc.write_all(data)?;
        let out = enc.finish()?;
        tracing::trace!(
            level = self.level,
            input = data.len(),
            output = out.len(),
            "deflate compress"
        );
        Ok(out)
    }
}
