use std::sync::Arc;

use crate::error::CompressResult;

/// A black-box compressor.
///
/// Implementations must satisfy these invariants:
/// - Deterministic: the same input always produces output of the same length.
/// - Stateless between calls: compressing one input never affects another.
/// - Failures are returned, never replaced with a fallback size.
///
/// Only the length of the output is observed by distance computations, so
/// implementations are free to produce any encoding.
pub trait Compressor: Send + Sync {
    /// Short identifier used in logs and error messages (e.g. `"zstd"`).
    fn name(&self) -> &str;

    /// Compress `data` and return the encoded bytes.
    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>>;

    /// Length in bytes of the compressed form of `data`.
    ///
    /// Default implementation compresses and measures. Backends may override
    /// when the size can be obtained without materializing the output.
    fn compressed_size(&self, data: &[u8]) -> CompressResult<usize> {
        Ok(self.compress(data)?.len())
    }
}

impl<C: Compressor + ?Sized> Compressor for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>> {
        (**self).compress(data)
    }

    fn compressed_size(&self, data: &[u8]) -> CompressResult<usize> {
        (**self).compressed_size(data)
    }
}

impl<C: Compressor + ?Sized> Compressor for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>> {
        (**self).compress(data)
    }

    fn compressed_size(&self, data: &[u8]) -> CompressResult<usize> {
        (**self).compressed_size(data)
    }
}

impl<C: Compressor + ?Sized> Compressor for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compress(&self, data: &[u8]) -> CompressResult<Vec<u8>> {
        (**self).compress(data)
    }

    fn compressed_size(&self, data: &[u8]) -> CompressResult<usize> {
        (**self).compressed_size(data)
    }
}
