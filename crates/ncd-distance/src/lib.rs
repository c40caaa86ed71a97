//! Normalized compression distance (NCD).
//!
//! A domain-agnostic distance between two opaque objects: compress each one,
//! compress their concatenation, and measure how much the second object
//! costs once the compressor has already seen the first. Related objects
//! share structure and land near 0; unrelated ones land near 1.
//!
//! ```text
//! NCD(x, y) = (C(xy) - min(C(x), C(y))) / max(C(x), C(y))
//! ```
//!
//! # Pieces
//!
//! - [`Object`] -- how a value becomes bytes (byte slices, strings, numeric
//!   arrays, or any serde value via [`Serialized`])
//! - [`Concatenate`] -- how two objects are joined; [`Sequential`] by default,
//!   [`Delimited`] and [`Interleaved`] built in, or any closure
//! - [`Compressor`] -- the black-box compressor, re-exported from `ncd-compress`
//! - [`distance`], [`ncd`], and the [`Ncd`] engine -- the computation itself
//! - [`NcdConfig`] -- TOML-driven construction of an engine
//!
//! # Rules
//!
//! 1. Inputs are only borrowed; nothing is mutated or retained.
//! 2. Two empty objects, or two objects that both compress to zero bytes,
//!    have no defined distance and yield [`NcdError::UndefinedDistance`].
//!    Any other input, empty or not, goes through the compressor.
//! 3. Compressor errors are passed through unchanged, never replaced by a
//!    default distance.
//! 4. With symmetry enforced, `distance(x, y) == distance(y, x)` exactly.

pub mod concat;
pub mod config;
pub mod distance;
pub mod error;
pub mod object;

pub use concat::{ConcatStrategy, Concatenate, Delimited, Interleaved, Sequential};
pub use config::NcdConfig;
pub use distance::{distance, ncd, report, Ncd, NcdReport};
pub use error::{NcdError, NcdResult};
pub use object::{Object, Serialized};

pub use ncd_compress::{
    CompressError, Compressor, CompressorConfig, DeflateCompressor, Lz4Compressor, ZstdCompressor,
};
