//! Concatenation strategies: how two objects become one compressible stream.

use serde::{Deserialize, Serialize};

use crate::error::{NcdError, NcdResult};
use crate::object::Object;

/// Combines two objects, in the given order, into a single byte sequence.
///
/// Must be pure: the same pair in the same order always yields the same
/// bytes. Order matters; the distance engine calls it as `(x, y)` and, when
/// symmetry is enforced, as `(y, x)`. The two objects may be of different
/// types; the built-in strategies accept any pair of [`Object`]s.
///
/// Any `Fn(&X, &Y) -> NcdResult<Vec<u8>>` closure is a strategy.
pub trait Concatenate<X: ?Sized, Y: ?Sized = X> {
    fn concatenate(&self, first: &X, second: &Y) -> NcdResult<Vec<u8>>;
}

impl<X, Y, F> Concatenate<X, Y> for F
where
    X: ?Sized,
    Y: ?Sized,
    F: Fn(&X, &Y) -> NcdResult<Vec<u8>>,
{
    fn concatenate(&self, first: &X, second: &Y) -> NcdResult<Vec<u8>> {
        self(first, second)
    }
}

/// Plain ordered concatenation: the bytes of `first` followed by `second`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

impl<X, Y> Concatenate<X, Y> for Sequential
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
{
    fn concatenate(&self, first: &X, second: &Y) -> NcdResult<Vec<u8>> {
        join_with(first, &[], second)
    }
}

/// Ordered concatenation with a fixed separator between the two objects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delimited {
    pub separator: Vec<u8>,
}

impl Delimited {
    pub fn new(separator: impl Into<Vec<u8>>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl<X, Y> Concatenate<X, Y> for Delimited
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
{
    fn concatenate(&self, first: &X, second: &Y) -> NcdResult<Vec<u8>> {
        join_with(first, &self.separator, second)
    }
}

fn join_with<X, Y>(first: &X, separator: &[u8], second: &Y) -> NcdResult<Vec<u8>>
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
{
    let a = first.to_bytes()?;
    let b = second.to_bytes()?;
    let mut out = Vec::with_capacity(a.len() + separator.len() + b.len());
    out.extend_from_slice(&a);
    out.extend_from_slice(separator);
    out.extend_from_slice(&b);
    Ok(out)
}

/// Row-wise join of two row-major 2-D buffers with the same number of rows.
///
/// Each object is split into `rows` equal rows; the output is row 0 of
/// `first`, row 0 of `second`, row 1 of `first`, and so on. Row widths may
/// differ between the two objects. This keeps related rows adjacent in the
/// stream, which a plain concatenation of two matrices would not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interleaved {
    pub rows: usize,
}

impl Interleaved {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    fn row_width(&self, len: usize, which: &str) -> NcdResult<usize> {
        if self.rows == 0 {
            return Err(NcdError::Serialization(
                "interleaved concatenation needs at least one row".into(),
            ));
        }
        if len % self.rows != 0 {
            return Err(NcdError::Serialization(format!(
                "{which} object of {len} bytes does not split into {} rows",
                self.rows
            )));
        }
        Ok(len / self.rows)
    }
}

impl<X, Y> Concatenate<X, Y> for Interleaved
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
{
    fn concatenate(&self, first: &X, second: &Y) -> NcdResult<Vec<u8>> {
        let a = first.to_bytes()?;
        let b = second.to_bytes()?;
        let wa = self.row_width(a.len(), "first")?;
        let wb = self.row_width(b.len(), "second")?;

        let mut out = Vec::with_capacity(a.len() + b.len());
        for r in 0..self.rows {
            out.extend_from_slice(&a[r * wa..(r + 1) * wa]);
            out.extend_from_slice(&b[r * wb..(r + 1) * wb]);
        }
        Ok(out)
    }
}

/// Built-in strategies selectable from configuration.
///
/// Serialized with a `strategy` tag, e.g. `{ strategy = "interleaved", rows = 4 }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum ConcatStrategy {
    #[default]
    Sequential,
    Delimited {
        separator: Vec<u8>,
    },
    Interleaved {
        rows: usize,
    },
}

impl<X, Y> Concatenate<X, Y> for ConcatStrategy
where
    X: Object + ?Sized,
    Y: Object + ?Sized,
{
    fn concatenate(&self, first: &X, second: &Y) -> NcdResult<Vec<u8>> {
        match self {
            Self::Sequential => Sequential.concatenate(first, second),
            Self::Delimited { separator } => join_with(first, separator, second),
            Self::Interleaved { rows } => Interleaved::new(*rows).concatenate(first, second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_preserves_order() {
        let xy = Sequential.concatenate(b"abc".as_slice(), b"de".as_slice()).unwrap();
        let yx = Sequential.concatenate(b"de".as_slice(), b"abc".as_slice()).unwrap();
        assert_eq!(xy, b"abcde");
        assert_eq!(yx, b"deabc");
    }

    #[test]
    fn sequential_handles_empty() {
        let out = Sequential.concatenate("", "tail").unwrap();
        assert_eq!(out, b"tail");
    }

    #[test]
    fn sequential_numeric() {
        let out = Sequential.concatenate(&[1u16][..], &[2u16][..]).unwrap();
        assert_eq!(out, [1, 0, 2, 0]);
    }

    #[test]
    fn mixed_object_types_concatenate() {
        let out = Sequential.concatenate("ab", &[1u16][..]).unwrap();
        assert_eq!(out, [b'a', b'b', 1, 0]);

        let a: &[u8] = &[1, 2];
        let out = Interleaved::new(2).concatenate(a, &vec![7u16, 8]).unwrap();
        assert_eq!(out, [1, 7, 0, 2, 8, 0]);
    }

    #[test]
    fn delimited_inserts_separator() {
        let out = Delimited::new(*b"\n").concatenate("left", "right").unwrap();
        assert_eq!(out, b"left\nright");
    }

    #[test]
    fn interleaved_joins_rows() {
        // 2x2 and 2x1 matrices.
        let a: &[u8] = &[1, 2, 3, 4];
        let b: &[u8] = &[9, 8];
        let out = Interleaved::new(2).concatenate(a, b).unwrap();
        assert_eq!(out, [1, 2, 9, 3, 4, 8]);
    }

    #[test]
    fn interleaved_rejects_ragged_input() {
        let a: &[u8] = &[1, 2, 3];
        let b: &[u8] = &[1, 2];
        let err = Interleaved::new(2).concatenate(a, b).unwrap_err();
        assert!(matches!(
            err,
            NcdError::Serialization(ref m) if m.contains("first object of 3 bytes")
        ));
    }

    #[test]
    fn interleaved_rejects_zero_rows() {
        let a: &[u8] = &[];
        let err = Interleaved::new(0).concatenate(a, a).unwrap_err();
        assert!(matches!(err, NcdError::Serialization(_)));
    }

    #[test]
    fn closures_are_strategies() {
        let reversed = |a: &[u8], b: &[u8]| -> NcdResult<Vec<u8>> {
            Ok(b.iter().chain(a).copied().collect())
        };
        assert_eq!(reversed.concatenate(b"ab".as_slice(), b"cd".as_slice()).unwrap(), b"cdab");
    }

    #[test]
    fn strategy_enum_dispatches() {
        let s = ConcatStrategy::Delimited { separator: vec![0] };
        assert_eq!(s.concatenate("a", "b").unwrap(), b"a\0b");
        assert_eq!(ConcatStrategy::default(), ConcatStrategy::Sequential);
    }

    #[test]
    fn strategy_parses_from_toml() {
        let s: ConcatStrategy = toml::from_str("strategy = \"interleaved\"\nrows = 3\n").unwrap();
        assert_eq!(s, ConcatStrategy::Interleaved { rows: 3 });
    }
}
