//! The normalized compression distance.
//!
//! ```text
//! NCD(x, y) = (C(xy) - min(C(x), C(y))) / max(C(x), C(y))
//! ```
//!
//! where `C` is the compressed size and `xy` the concatenation of the two
//! objects. Compressors are not order-invariant on concatenated streams, so
//! with symmetry enforced `C(xy)` is replaced by `min(C(xy), C(yx))`.
//!
//! # Cost
//!
//! Every call compresses `x`, `y` and `x∥y`: three compressor invocations.
//! Enforcing symmetry adds a fourth (`y∥x`). Nothing is cached between
//! calls; callers comparing one object against many should expect `C(x)` to
//! be recomputed each time.

use ncd_compress::Compressor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::concat::{Concatenate, Sequential};
use crate::error::{NcdError, NcdResult};
use crate::object::Object;

/// Compressed sizes measured by one distance computation, plus the result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NcdReport {
    /// `C(x)` in bytes.
    pub size_x: usize,
    /// `C(y)` in bytes.
    pub size_y: usize,
    /// `C(x∥y)` in bytes.
    pub size_xy: usize,
    /// `C(y∥x)` in bytes, present only when symmetry was enforced.
    pub size_yx: Option<usize>,
    /// The normalized compression distance.
    pub distance: f64,
}

impl NcdReport {
    /// The concatenation cost the distance was computed from.
    pub fn joint_size(&self) -> usize {
        match self.size_yx {
            Some(yx) => yx.min(self.size_xy),
            None => self.size_xy,
        }
    }

    /// Whether both concatenation orders were measured.
    pub fn is_symmetric(&self) -> bool {
        self.size_yx.is_some()
    }
}

/// Compute the distance between `x` and `y` and report every measured size.
///
/// `x` and `y` need not share a type; the strategy joins them in both orders
/// when symmetry is enforced.
///
/// Errors:
/// - [`NcdError::UndefinedDistance`] when both objects are empty, or when
///   both compress to zero bytes.
/// - [`NcdError::Serialization`] when an object or the strategy cannot
///   produce bytes.
/// - [`NcdError::Compressor`] carrying the compressor's own error.
pub fn report<X, Y, C, S>(
    x: &X,
    y: &Y,
    compressor: &C,
    enforce_symmetry: bool,
    concatenate: &S,
) -> NcdResult<NcdReport>
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
    C: Compressor + ?Sized,
    S: Concatenate<X, Y> + Concatenate<Y, X> + ?Sized,
{
    let x_bytes = x.to_bytes()?;
    let y_bytes = y.to_bytes()?;
    if x_bytes.is_empty() && y_bytes.is_empty() {
        return Err(NcdError::UndefinedDistance);
    }

    let size_x = compressor.compressed_size(&x_bytes)?;
    let size_y = compressor.compressed_size(&y_bytes)?;
    let xy = <S as Concatenate<X, Y>>::concatenate(concatenate, x, y)?;
    let size_xy = compressor.compressed_size(&xy)?;
    let size_yx = if enforce_symmetry {
        let yx = <S as Concatenate<Y, X>>::concatenate(concatenate, y, x)?;
        Some(compressor.compressed_size(&yx)?)
    } else {
        None
    };

    let smaller = size_x.min(size_y);
    let larger = size_x.max(size_y);
    if larger == 0 {
        return Err(NcdError::UndefinedDistance);
    }

    let mut result = NcdReport {
        size_x,
        size_y,
        size_xy,
        size_yx,
        distance: 0.0,
    };
    // Not clamped: overhead on tiny or incompressible inputs can push past 1.
    result.distance = (result.joint_size() as f64 - smaller as f64) / larger as f64;

    debug!(
        compressor = compressor.name(),
        size_x,
        size_y,
        size_xy,
        size_yx,
        distance = result.distance,
        "ncd computed"
    );
    Ok(result)
}

/// Normalized compression distance between `x` and `y`.
///
/// With `enforce_symmetry`, `distance(x, y) == distance(y, x)` exactly, at
/// the price of a fourth compression. Without it only `x∥y` is compressed and
/// the result may depend on argument order.
pub fn distance<X, Y, C, S>(
    x: &X,
    y: &Y,
    compressor: &C,
    enforce_symmetry: bool,
    concatenate: &S,
) -> NcdResult<f64>
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
    C: Compressor + ?Sized,
    S: Concatenate<X, Y> + Concatenate<Y, X> + ?Sized,
{
    report(x, y, compressor, enforce_symmetry, concatenate).map(|r| r.distance)
}

/// [`distance`] with symmetry enforced and plain ordered concatenation.
pub fn ncd<X, Y, C>(x: &X, y: &Y, compressor: &C) -> NcdResult<f64>
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
    C: Compressor + ?Sized,
{
    distance(x, y, compressor, true, &Sequential)
}

/// A reusable distance engine: a compressor, a concatenation strategy and the
/// symmetry setting.
///
/// Holds no per-call state. Symmetry is enforced unless disabled with
/// [`Ncd::enforce_symmetry`].
#[derive(Clone, Debug)]
pub struct Ncd<C, S = Sequential> {
    compressor: C,
    concatenation: S,
    enforce_symmetry: bool,
}

impl<C: Compressor> Ncd<C> {
    pub fn new(compressor: C) -> Self {
        Self {
            compressor,
            concatenation: Sequential,
            enforce_symmetry: true,
        }
    }
}

impl<C: Compressor, S> Ncd<C, S> {
    /// Toggle symmetry enforcement (4 compressions per call when on, 3 when off).
    pub fn enforce_symmetry(mut self, enforce: bool) -> Self {
        self.enforce_symmetry = enforce;
        self
    }

    /// Replace the concatenation strategy.
    pub fn with_concatenation<S2>(self, concatenation: S2) -> Ncd<C, S2> {
        Ncd {
            compressor: self.compressor,
            concatenation,
            enforce_symmetry: self.enforce_symmetry,
        }
    }

    pub fn compressor(&self) -> &C {
        &self.compressor
    }

    pub fn concatenation(&self) -> &S {
        &self.concatenation
    }

    pub fn symmetry_enforced(&self) -> bool {
        self.enforce_symmetry
    }

    pub fn distance<X, Y>(&self, x: &X, y: &Y) -> NcdResult<f64>
    where
        X: Object + ?Sized,
        Y: Object + ?Sized,
        S: Concatenate<X, Y> + Concatenate<Y, X>,
    {
        self.report(x, y).map(|r| r.distance)
    }

    pub fn report<X, Y>(&self, x: &X, y: &Y) -> NcdResult<NcdReport>
    where
        X: Object + ?Sized,
        Y: Object + ?Sized,
        S: Concatenate<X, Y> + Concatenate<Y, X>,
    {
        report(
            x,
            y,
            &self.compressor,
            self.enforce_symmetry,
            &self.concatenation,
        )
    }
}
