/*!
Wide strings as UTF-16.
*/
use std::iter;
use libc::wchar_t;
use static_assertions::assert_eq_size;
use crate::encoding::utf16::{Utf16DecodeIter, Utf16EncodeIter, Utf16Error};

assert_eq_size!(wchar_t, u16);

/// Width of a wide unit, in bits.
pub const WIDTH: usize = 16;

pub type WideError = Utf16Error;

pub struct WideDecodeIter<It>(Utf16DecodeIter<iter::Map<It, fn(wchar_t) -> u16>>);

impl<It> WideDecodeIter<It> where It: Iterator<Item=wchar_t> {
    pub fn new(iter: It) -> Self {
        WideDecodeIter(Utf16DecodeIter::new(iter.map(to_unit as fn(_) -> _)))
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

pub struct WideEncodeIter<It>(Utf16EncodeIter<It>) where It: Iterator<Item=char>;

impl<It> WideEncodeIter<It> where It: Iterator<Item=char> {
    pub fn new(iter: It) -> Self {
        WideEncodeIter(Utf16EncodeIter::new(iter))
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

fn to_unit(wc: wchar_t) -> u16 {
    wc as u16
}
