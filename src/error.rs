/*!
Error types.
*/
use thiserror::Error;
use crate::encoding::{Utf8Error, Utf16Error, Utf32Error};

#[cfg(feature="wchar")]
use crate::encoding::wide::WideError;

/**
Construction of a `Utf8String` was given input which is not valid in the encoding it claims to be.

This is the only way in which any operation in this crate can fail.  Each variant names the source encoding, and carries the specific rule that was broken along with the offset at which it happened.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum MalformedInput {
    #[error("malformed UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("malformed UTF-16: {0}")]
    Utf16(#[from] Utf16Error),

    #[error("malformed UTF-32: {0}")]
    Utf32(#[from] Utf32Error),

    /// Only produced by the wide-string constructors; `WideError` is the UTF-16 or UTF-32 error, depending on the platform.
    #[cfg(feature="wchar")]
    #[error("malformed wide string: {0}")]
    Wide(#[source] WideError),
}

impl MalformedInput {
    /**
    Returns the offset, in units of the source encoding, of the first unit that could not be decoded.
    */
    pub fn offset(&self) -> usize {
        match *self {
            MalformedInput::Utf8(ref err) => err.offset(),
            MalformedInput::Utf16(ref err) => err.offset(),
            MalformedInput::Utf32(ref err) => err.offset(),
            #[cfg(feature="wchar")]
            MalformedInput::Wide(ref err) => err.offset(),
        }
    }
}
