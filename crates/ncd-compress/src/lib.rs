//! Compressor capability for normalized compression distance.
//!
//! A compressor is an opaque black box with a single operation: turn a byte
//! sequence into a (hopefully) shorter one. Distance computations only look
//! at the length of the output, so any deterministic codec will do.
//!
//! # Backends
//!
//! All backends implement the [`Compressor`] trait:
//!
//! - [`ZstdCompressor`] -- Zstandard, configurable level (default 3)
//! - [`DeflateCompressor`] -- raw DEFLATE via `flate2`, levels 0-9
//! - [`Lz4Compressor`] -- LZ4 frame format via `lz4_flex`
//!
//! [`CompressorConfig`] selects and parameterizes a backend from
//! configuration files.

pub mod config;
pub mod deflate;
pub mod error;
pub mod lz4;
pub mod traits;
pub mod zstandard;

pub use config::CompressorConfig;
pub use deflate::DeflateCompressor;
pub use error::{CompressError, CompressResult};
pub use lz4::Lz4Compressor;
pub use traits::Compressor;
pub use zstandard::ZstdCompressor;
