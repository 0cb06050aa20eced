/*!
Errors raised while decoding `These` values

The algebra on `These` is total: only the codecs in [`binary`](crate::binary) and
[`json`](crate::json) can fail.
*/
use thiserror::Error;

/// A decoding error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A binary value started with a discriminant other than 0, 1 or 2
    #[error("invalid discriminant {0}: expected 0 (This), 1 (That) or 2 (Both)")]
    InvalidDiscriminant(u8),
    /// A binary value was followed by unread bytes
    #[error("{0} trailing bytes after binary value")]
    TrailingBytes(usize),
    /// Binary input ended before the value it announced was complete
    #[error("unexpected end of binary input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// The number of bytes the next field needs
        needed: usize,
        /// The number of bytes left to read
        remaining: usize,
    },
    /// A length prefix announced more data than the input holds
    #[error("length prefix {length} exceeds the {remaining} bytes remaining")]
    LengthOverflow {
        /// The declared length
        length: u64,
        /// The number of bytes left to read
        remaining: usize,
    },
    /// A `bool` or `Option` tag was neither 0 nor 1
    #[error("invalid {ty} tag {tag}: expected 0 or 1")]
    InvalidTag {
        /// The tag read
        tag: u8,
        /// The type being decoded
        ty: &'static str,
    },
    /// A `char` was not a length byte followed by the UTF-8 encoding of exactly one character
    #[error("invalid binary char")]
    InvalidChar,
    /// A `String` payload was not valid UTF-8
    #[error("invalid UTF-8 in binary string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// A value could not be read or written as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A result whose error type is [`Error`](Error)
pub type Result<T> = std::result::Result<T, Error>;
