//! LZ4 frame-format compressor.

use std::io::Write;

use lz4_flex::frame::FrameEncoder;

use crate::error::{CompressError, CompressResult};
use crate::traits::Compressor;

/// LZ4 compressor emitting the standard frame format.
///
/// Fast but with a short match window; on small inputs the frame header
/// dominates the output size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lz4Compressor;

impl Compressor for Lz4Compressor {
    fn name(&self) -> &str {
        "lz4"
    }

    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>> {
        let mut enc = FrameEncoder::new(Vec::new());
        enc.write_all(data)?;
        let out = enc
            .finish()
            .map_err(|e| CompressError::backend("lz4", e.to_string()))?;
        tracing::trace!(input = data.len(), output = out.len(), "lz4 compress");
        Ok(out)
    }
}
