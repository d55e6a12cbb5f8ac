/*!
Wide strings as UTF-32.

Depending on the platform, `wchar_t` may be signed; units are reinterpreted as `u32` before decoding, so negative units are rejected as out of range.
*/
use std::iter;
use libc::wchar_t;
use static_assertions::assert_eq_size;
use crate::encoding::utf32::{Utf32DecodeIter, Utf32EncodeIter, Utf32Error};

assert_eq_size!(wchar_t, u32);

/// Width of a wide unit, in bits.
pub const WIDTH: usize = 32;

pub type WideError = Utf32Error;

pub struct WideDecodeIter<It>(Utf32DecodeIter<iter::Map<It, fn(wchar_t) -> u32>>);

impl<It> WideDecodeIter<It> where It: Iterator<Item=wchar_t> {
    pub fn new(iter: It) -> Self {
        WideDecodeIter(Utf32DecodeIter::new(iter.map(to_unit as fn(_) -> _)))
    }
}

impl<It> Iterator for WideDecodeIter<It> where It: Iterator<Item=wchar_t> {
    type Item = Result<char, WideError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct WideEncodeIter<It>(Utf32EncodeIter<It>) where It: Iterator<Item=char>;

impl<It> WideEncodeIter<It> where It: Iterator<Item=char> {
    pub fn new(iter: It) -> Self {
        WideEncodeIter(Utf32EncodeIter::new(iter))
    }
}

impl<It> Iterator for WideEncodeIter<It> where It: Iterator<Item=char> {
    type Item = wchar_t;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|cu| cu as wchar_t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

fn to_unit(wc: wchar_t) -> u32 {
    wc as u32
}
