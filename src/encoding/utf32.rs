/*!
UTF-32 decoding and encoding.
*/
use thiserror::Error;

/**
Decodes UTF-32 units into `char`s.
*/
pub struct Utf32DecodeIter<It> {
    at: usize,
    iter: Option<It>,
}

impl<It> Utf32DecodeIter<It> {
    pub fn new(iter: It) -> Self {
        Utf32DecodeIter {
            at: 0,
            iter: Some(iter),
        }
    }
}

impl<It> Iterator for Utf32DecodeIter<It> where It: Iterator<Item=u32> {
    type Item = Result<char, Utf32Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let cu = match self.iter.as_mut() {
            Some(iter) => match iter.next() {
                Some(cu) => cu,
                None => return None,
            },
            None => return None,
        };

        let err = match char::from_u32(cu) {
            Some(c) => {
                self.at += 1;
                return Some(Ok(c));
            },
            None if cu > 0x10ffff => Utf32Error::OutOfRangeAt { at: self.at, unit: cu },
            None => Utf32Error::SurrogateAt { at: self.at, unit: cu },
        };

        self.iter = None;
        Some(Err(err))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.iter.as_ref() {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

/**
Encodes `char`s as UTF-32 units.
*/
pub struct Utf32EncodeIter<It> where It: Iterator<Item=char> {
    iter: It,
}

impl<It> Utf32EncodeIter<It> where It: Iterator<Item=char> {
    pub fn new(iter: It) -> Self {
        Utf32EncodeIter {
            iter: iter,
        }
    }
}

impl<It> Iterator for Utf32EncodeIter<It> where It: Iterator<Item=char> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|c| c as u32)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/**
Describes why a unit sequence is not valid UTF-32.

Offsets are in units.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Utf32Error {
    #[error("surrogate {unit:#06x} at offset {at}")]
    SurrogateAt { at: usize, unit: u32 },

    #[error("value {unit:#x} beyond U+10FFFF at offset {at}")]
    OutOfRangeAt { at: usize, unit: u32 },
}

impl Utf32Error {
    /**
    Returns the offset of the unit which failed to decode.
    */
    pub fn offset(&self) -> usize {
        match *self {
            Utf32Error::SurrogateAt { at, .. }
            | Utf32Error::OutOfRangeAt { at, .. } => at,
        }
    }
}
