//! Conversion of caller values into compressible byte sequences.
//!
//! An object is never inspected beyond this conversion: its bytes are treated
//! as one indivisible unit by the compressor.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::{NcdError, NcdResult};

/// A value that can be reduced to a byte sequence for compression.
///
/// Byte-like types borrow their storage. Numeric slices are encoded element by
/// element in little-endian order, giving the raw buffer of a flat array
/// independent of host endianness.
pub trait Object {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>>;
}

impl Object for [u8] {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> Object for [u8; N] {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl Object for Vec<u8> {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl Object for str {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl Object for String {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl<T: Object + ?Sized> Object for &T {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        (**self).to_bytes()
    }
}

macro_rules! numeric_object {
    ($($t:ty),* $(,)?) => {
        $(
            impl Object for [$t] {
                fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
                    let mut out = Vec::with_capacity(std::mem::size_of_val(self));
                    for v in self {
                        out.extend_from_slice(&v.to_le_bytes());
                    }
                    Ok(Cow::Owned(out))
                }
            }

            impl Object for Vec<$t> {
                fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
                    self.as_slice().to_bytes()
                }
            }
        )*
    };
}

numeric_object!(i8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Wraps any serde value so it can be compared as an object.
///
/// The value is encoded with `bincode`; encoding failures surface as
/// [`NcdError::Serialization`].
#[derive(Clone, Debug)]
pub struct Serialized<T>(pub T);

impl<T: Serialize> Object for Serialized<T> {
    fn to_bytes(&self) -> NcdResult<Cow<'_, [u8]>> {
        bincode::serialize(&self.0)
            .map(Cow::Owned)
            .map_err(|e| NcdError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Serializer;

    use super::*;

    #[test]
    fn byte_types_borrow() {
        let v = vec![1u8, 2, 3];
        assert!(matches!(v.to_bytes().unwrap(), Cow::Borrowed(b) if b == [1, 2, 3]));
        assert!(matches!("hi".to_bytes().unwrap(), Cow::Borrowed(b"hi")));
        assert_eq!(&*[9u8; 4].to_bytes().unwrap(), &[9, 9, 9, 9]);
    }

    #[test]
    fn numeric_slices_are_little_endian() {
        let v: Vec<u32> = vec![1, 0x0A0B0C0D];
        assert_eq!(&*v.to_bytes().unwrap(), &[1, 0, 0, 0, 0x0D, 0x0C, 0x0B, 0x0A]);

        let f = [1.0f32];
        assert_eq!(&*f[..].to_bytes().unwrap(), &1.0f32.to_le_bytes());
    }

    #[test]
    fn references_delegate() {
        let s = String::from("abc");
        let r = &s;
        assert_eq!(&*r.to_bytes().unwrap(), b"abc");
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        label: String,
    }

    #[test]
    fn serialized_uses_bincode() {
        let p = Serialized(Point { x: 5, label: "a".into() });
        let bytes = p.to_bytes().unwrap();
        assert_eq!(bytes.into_owned(), bincode::serialize(&p.0).unwrap());
    }

    struct OpaqueHandle;

    impl Serialize for OpaqueHandle {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("opaque handle cannot be serialized"))
        }
    }

    #[test]
    fn serialization_failure_is_reported() {
        let err = Serialized(OpaqueHandle).to_bytes().unwrap_err();
        match err {
            NcdError::Serialization(msg) => assert!(msg.contains("opaque handle")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
