/*!
The binary layout of `These` values

A value is written as a one-byte discriminant followed by its payload(s) in declaration order:
```text
0 => This: <left>
1 => That: <right>
2 => Both: <left> <right>
```
Payloads are written through the [`Code`](Code) trait:
- integers and floats as fixed-width little endian, `usize` as a `u64`
- `bool` as a single `0` or `1` byte
- `char` as a one-byte length followed by its UTF-8 bytes
- `String` and `Vec<T>` as a `u64` length followed by the bytes or elements
- `Option<T>` as a `0` or `1` tag followed by the value, if any
- tuples and nested `These` field by field

So e.g. a `These<i32, char>::Both(1, 'a')` is the bytes `[2, 1, 0, 0, 0, 1, 97]`.

Decoding never trusts a length prefix: a length longer than the input left to read is rejected
before anything is allocated.
*/
use crate::error::{Error, Result};
use crate::these::{Shape, These};
use bytes::{Buf, BufMut};
use paste::paste;
use std::convert::TryFrom;

/**
A value with a binary encoding

Every encoding takes at least one byte, which is what lets decoding bound element counts by the
input left to read.
*/
pub trait Code: Sized {
    /// Write this value to a buffer
    fn write<B: BufMut>(&self, buf: &mut B);
    /// Read a value from a buffer, consuming exactly the bytes of its encoding
    fn read<B: Buf>(buf: &mut B) -> Result<Self>;
}

/// Fail unless at least `needed` bytes are left to read
#[inline]
fn ensure<B: Buf>(buf: &mut B, needed: usize) -> Result<()> {
    let remaining = buf.remaining();
    if remaining < needed {
        tracing::debug!(needed, remaining, "rejecting truncated binary input");
        Err(Error::UnexpectedEnd { needed, remaining })
    } else {
        Ok(())
    }
}

/// Read a `u64` length prefix, rejecting lengths longer than the input left to read
fn read_len<B: Buf>(buf: &mut B) -> Result<usize> {
    let length = u64::read(buf)?;
    let remaining = buf.remaining();
    match usize::try_from(length) {
        Ok(len) if len <= remaining => Ok(len),
        _ => {
            tracing::debug!(length, remaining, "rejecting oversized length prefix");
            Err(Error::LengthOverflow { length, remaining })
        }
    }
}

/// Read a `0`/`1` tag
fn read_tag<B: Buf>(buf: &mut B, ty: &'static str) -> Result<bool> {
    match u8::read(buf)? {
        0 => Ok(false),
        1 => Ok(true),
        tag => Err(Error::InvalidTag { tag, ty }),
    }
}

macro_rules! for_all_primitives {
    ($macro:ident) => {
        $macro! {
            u16, u32, u64, u128,
            i16, i32, i64, i128,
            f32, f64
        }
    };
}

macro_rules! impl_code_for_primitive {
    ($($type:ident),*) => {
        paste! {
            $(
                impl Code for $type {
                    #[inline]
                    fn write<B: BufMut>(&self, buf: &mut B) {
                        buf.[<put_ $type _le>](*self)
                    }

                    #[inline]
                    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
                        ensure(buf, std::mem::size_of::<$type>())?;
                        Ok(buf.[<get_ $type _le>]())
                    }
                }
            )*
        }
    };
}

for_all_primitives! { impl_code_for_primitive }

impl Code for u8 {
    #[inline]
    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(*self)
    }

    #[inline]
    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        ensure(buf, 1)?;
        Ok(buf.get_u8())
    }
}

impl Code for i8 {
    #[inline]
    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_i8(*self)
    }

    #[inline]
    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        ensure(buf, 1)?;
        Ok(buf.get_i8())
    }
}

impl Code for usize {
    #[inline]
    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u64_le(*self as u64)
    }

    #[inline]
    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        let value = u64::read(buf)?;
        usize::try_from(value).map_err(|_| Error::LengthOverflow {
            length: value,
            remaining: buf.remaining(),
        })
    }
}

impl Code for bool {
    #[inline]
    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(*self as u8)
    }

    #[inline]
    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        read_tag(buf, "bool")
    }
}

impl Code for char {
    fn write<B: BufMut>(&self, buf: &mut B) {
        let mut utf8 = [0; 4];
        let encoded = self.encode_utf8(&mut utf8);
        buf.put_u8(encoded.len() as u8);
        buf.put_slice(encoded.as_bytes());
    }

    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        let len = u8::read(buf)? as usize;
        if len == 0 || len > 4 {
            return Err(Error::InvalidChar);
        }
        ensure(buf, len)?;
        let mut utf8 = [0; 4];
        buf.copy_to_slice(&mut utf8[..len]);
        let text = std::str::from_utf8(&utf8[..len]).map_err(|_| Error::InvalidChar)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::InvalidChar),
        }
    }
}

impl Code for String {
    fn write<B: BufMut>(&self, buf: &mut B) {
        self.len().write(buf);
        buf.put_slice(self.as_bytes());
    }

    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        let len = read_len(buf)?;
        let mut bytes = vec![0; len];
        buf.copy_to_slice(&mut bytes);
        Ok(String::from_utf8(bytes)?)
    }
}

impl<T: Code> Code for Vec<T> {
    fn write<B: BufMut>(&self, buf: &mut B) {
        self.len().write(buf);
        for item in self {
            item.write(buf);
        }
    }

    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        let len = read_len(buf)?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(T::read(buf)?);
        }
        Ok(items)
    }
}

impl<T: Code> Code for Option<T> {
    fn write<B: BufMut>(&self, buf: &mut B) {
        match self {
            None => buf.put_u8(0),
            Some(value) => {
                buf.put_u8(1);
                value.write(buf);
            }
        }
    }

    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        if read_tag(buf, "Option")? {
            Ok(Some(T::read(buf)?))
        } else {
            Ok(None)
        }
    }
}

macro_rules! impl_code_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Code),+> Code for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write<Bf: BufMut>(&self, buf: &mut Bf) {
                let ($($name,)+) = self;
                $($name.write(buf);)+
            }

            fn read<Bf: Buf>(buf: &mut Bf) -> Result<Self> {
                Ok(($($name::read(buf)?,)+))
            }
        }
    };
}

impl_code_for_tuple!(A);
impl_code_for_tuple!(A, B);
impl_code_for_tuple!(A, B, C);
impl_code_for_tuple!(A, B, C, D);

impl<L: Code, R: Code> Code for These<L, R> {
    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.shape().discriminant());
        let (left, right) = self.as_ref().into_options();
        if let Some(left) = left {
            left.write(buf);
        }
        if let Some(right) = right {
            right.write(buf);
        }
    }

    fn read<B: Buf>(buf: &mut B) -> Result<Self> {
        let discriminant = u8::read(buf)?;
        let shape = Shape::from_discriminant(discriminant).ok_or_else(|| {
            tracing::debug!(discriminant, "rejecting binary These with invalid discriminant");
            Error::InvalidDiscriminant(discriminant)
        })?;
        let value = match shape {
            Shape::This => These::This(L::read(buf)?),
            Shape::That => These::That(R::read(buf)?),
            Shape::Both => {
                let left = L::read(buf)?;
                These::Both(left, R::read(buf)?)
            }
        };
        tracing::trace!(?shape, "decoded binary These");
        Ok(value)
    }
}

/// Encode a value into a new buffer
pub fn encode<L: Code, R: Code>(value: &These<L, R>) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(&mut buf, value);
    buf
}

/// Encode a value onto the end of a buffer
#[inline]
pub fn encode_into<B: BufMut, L: Code, R: Code>(buf: &mut B, value: &These<L, R>) {
    value.write(buf)
}

/// Decode a value from the front of a buffer, leaving any bytes after it unread
#[inline]
pub fn decode_from<B: Buf, L: Code, R: Code>(buf: &mut B) -> Result<These<L, R>> {
    These::read(buf)
}

/// Decode a value from a buffer, which must hold exactly one value
pub fn decode<L: Code, R: Code>(mut bytes: &[u8]) -> Result<These<L, R>> {
    let value = decode_from(&mut bytes)?;
    if bytes.is_empty() {
        Ok(value)
    } else {
        tracing::debug!(trailing = bytes.len(), "rejecting binary These with trailing bytes");
        Err(Error::TrailingBytes(bytes.len()))
    }
}
