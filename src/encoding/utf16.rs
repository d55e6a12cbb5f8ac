/*!
UTF-16 decoding and encoding.
*/
use thiserror::Error;

/**
Decodes UTF-16 units into `char`s.

A high surrogate must be immediately followed by a low surrogate.  A low surrogate is only valid as the second half of such a pair, including when it is the very first unit.
*/
pub struct Utf16DecodeIter<It> {
    at: usize,
    iter: Option<It>,
}

impl<It> Utf16DecodeIter<It> {
    pub fn new(iter: It) -> Self {
        Utf16DecodeIter {
            at: 0,
            iter: Some(iter),
        }
    }
}

impl<It> Iterator for Utf16DecodeIter<It> where It: Iterator<Item=u16> {
    type Item = Result<char, Utf16Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let r = {
            let iter = match self.iter.as_mut() {
                Some(iter) => iter,
                None => return None,
            };

            match iter.next() {
                None => return None,
                Some(cu0 @ 0xdc00..=0xdfff) => Err(Utf16Error::UnpairedLowAt { at: self.at, unit: cu0 }),
                Some(cu0 @ 0xd800..=0xdbff) => {
                    match iter.next() {
                        Some(cu1 @ 0xdc00..=0xdfff) => Ok((combine(cu0, cu1), 2)),
                        _ => Err(Utf16Error::UnpairedHighAt { at: self.at, unit: cu0 }),
                    }
                },
                Some(cu0 @ 0x0000..=0xd7ff)
                | Some(cu0 @ 0xe000..=0xffff) => Ok((scalar(cu0 as u32), 1)),
            }
        };

        match r {
            Ok((c, len)) => {
                self.at += len;
                Some(Ok(c))
            },
            Err(err) => {
                self.iter = None;
                Some(Err(err))
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.iter.as_ref() {
            Some(iter) => {
                let (lo, hi) = iter.size_hint();
                (lo / 2 + lo % 2, hi)
            },
            None => (0, Some(0)),
        }
    }
}

/**
Combines a high and low surrogate into the supplementary-plane `char` they encode.
*/
fn combine(hi: u16, lo: u16) -> char {
    scalar(0x10000 + ((((hi & 0x3ff) as u32) << 10) | (lo & 0x3ff) as u32))
}

/**
Converts a value the decoder has already range-checked into a `char`.

Callers only pass non-surrogate BMP units and combined surrogate pairs, which cover exactly U+10000..=U+10FFFF.
*/
fn scalar(cp: u32) -> char {
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/**
Encodes `char`s as UTF-16 units.
*/
pub struct Utf16EncodeIter<It> where It: Iterator<Item=char> {
    iter: It,
    low: Option<u16>,
}

impl<It> Utf16EncodeIter<It> where It: Iterator<Item=char> {
    pub fn new(iter: It) -> Self {
        Utf16EncodeIter {
            iter: iter,
            low: None,
        }
    }
}

impl<It> Iterator for Utf16EncodeIter<It> where It: Iterator<Item=char> {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(low) = self.low.take() {
            return Some(low);
        }

        let cp = match self.iter.next() {
            Some(c) => c as u32,
            None => return None,
        };

        if cp < 0x10000 {
            Some(cp as u16)
        } else {
            let cp = cp - 0x10000;
            self.low = Some(0xdc00 | (cp & 0x3ff) as u16);
            Some(0xd800 | (cp >> 10) as u16)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = if self.low.is_some() { 1 } else { 0 };
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_add(pending),
            hi.and_then(|hi| hi.checked_mul(2)).and_then(|hi| hi.checked_add(pending)),
        )
    }
}

/**
Describes why a unit sequence is not valid UTF-16.

Offsets are in units.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Utf16Error {
    /// A high surrogate was not followed by a low surrogate.
    #[error("unpaired high surrogate {unit:#06x} at offset {at}")]
    UnpairedHighAt { at: usize, unit: u16 },

    /// A low surrogate was not preceded by a high surrogate.
    #[error("unpaired low surrogate {unit:#06x} at offset {at}")]
    UnpairedLowAt { at: usize, unit: u16 },
}

impl Utf16Error {
    /**
    Returns the offset of the unit which failed to decode.
    */
    pub fn offset(&self) -> usize {
        match *self {
            Utf16Error::UnpairedHighAt { at, .. }
            | Utf16Error::UnpairedLowAt { at, .. } => at,
        }
    }
}
