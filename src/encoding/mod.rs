/*!
Encoding types and traits.

Decoding is done by iterator adapters which turn a sequence of code units into a sequence of `Result<char, _>`.  Each decoder stops permanently at the first error it reports.  Encoding is done by adapters which turn a sequence of `char`s into a sequence of code units; these cannot fail, since a `char` is always a valid Unicode scalar value.

The adapters do *not* look for zero terminators; that is the job of the `structure` module.
*/
use std::iter;
use std::slice;

pub mod utf8;
pub mod utf16;
pub mod utf32;

#[cfg(feature="wchar")]
pub mod wide;

pub use self::utf8::{Utf8DecodeIter, Utf8EncodeIter, Utf8Error};
pub use self::utf16::{Utf16DecodeIter, Utf16EncodeIter, Utf16Error};
pub use self::utf32::{Utf32DecodeIter, Utf32EncodeIter, Utf32Error};

macro_rules! naive_unit_impl {
    ($($ty_name:ty),*) => {
        $(
            impl Unit for $ty_name {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

/**
A single code unit of some encoding.

This is implemented for every integer type used as a unit by a supported encoding, including every representation of `wchar_t` in use.
*/
pub trait Unit: Copy {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

naive_unit_impl! { u8, u16, u32, i32 }

/**
Conversion from a sequence in one encoding to a sequence in another.

Each item of the resulting iterator is either a unit of the destination, or the error which ended the conversion.
*/
pub trait TranscodeTo<Dst>: Sized {
    type Iter: Iterator<Item=Result<Dst, Self::Error>>;
    type Error: ::std::error::Error;

    fn transcode(self) -> Self::Iter;
}

impl<'a> TranscodeTo<char> for &'a [u8] {
    type Iter = Utf8DecodeIter<iter::Cloned<slice::Iter<'a, u8>>>;
    type Error = Utf8Error;

    fn transcode(self) -> Self::Iter {
        Utf8DecodeIter::new(self.iter().cloned())
    }
}

impl<'a> TranscodeTo<char> for &'a [u16] {
    type Iter = Utf16DecodeIter<iter::Cloned<slice::Iter<'a, u16>>>;
    type Error = Utf16Error;

    fn transcode(self) -> Self::Iter {
        Utf16DecodeIter::new(self.iter().cloned())
    }
}

impl<'a> TranscodeTo<char> for &'a [u32] {
    type Iter = Utf32DecodeIter<iter::Cloned<slice::Iter<'a, u32>>>;
    type Error = Utf32Error;

    fn transcode(self) -> Self::Iter {
        Utf32DecodeIter::new(self.iter().cloned())
    }
}

/**
Adds encoding adapters to any iterator of `char`s.
*/
pub trait EncodeExt: Sized + Iterator<Item=char> {
    fn encode_utf8(self) -> Utf8EncodeIter<Self> {
        Utf8EncodeIter::new(self)
    }

    fn encode_utf16(self) -> Utf16EncodeIter<Self> {
        Utf16EncodeIter::new(self)
    }

    fn encode_utf32(self) -> Utf32EncodeIter<Self> {
        Utf32EncodeIter::new(self)
    }

    /**
    Encodes into the native wide encoding; see the `wide` module for which one that is.
    */
    #[cfg(feature="wchar")]
    fn encode_wide(self) -> wide::WideEncodeIter<Self> {
        wide::WideEncodeIter::new(self)
    }
}

impl<It> EncodeExt for It where It: Iterator<Item=char> {}
