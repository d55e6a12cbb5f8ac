/*!
UTF-8 decoding and encoding.
*/
use thiserror::Error;

/**
Decodes UTF-8 bytes into `char`s.

Rejects everything that is not well-formed, minimal UTF-8: stray continuation bytes, bytes which can never appear, truncated sequences, overlong sequences, encoded surrogates, and values above `U+10FFFF`.
*/
pub struct Utf8DecodeIter<It> {
    at: usize,
    iter: Option<It>,
}

impl<It> Utf8DecodeIter<It> {
    pub fn new(iter: It) -> Self {
        Utf8DecodeIter {
            at: 0,
            iter: Some(iter),
        }
    }
}

impl<It> Iterator for Utf8DecodeIter<It> where It: Iterator<Item=u8> {
    type Item = Result<char, Utf8Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let r = {
            let iter = match self.iter.as_mut() {
                Some(iter) => iter,
                None => return None,
            };

            let cu0 = match iter.next() {
                Some(cu0) => cu0,
                None => return None,
            };

            decode_seq(cu0, iter, self.at)
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
                (lo / 4 + (lo % 4 != 0) as usize, hi)
            },
            None => (0, Some(0)),
        }
    }
}

/**
Decodes the sequence beginning with `cu0`, pulling continuation bytes from `iter`.

Returns the decoded `char` and the number of bytes it occupied.
*/
fn decode_seq<It>(cu0: u8, iter: &mut It, at: usize) -> Result<(char, usize), Utf8Error>
where It: Iterator<Item=u8> {
    // (sequence length, payload bits of the lead byte, smallest value needing this length)
    let (len, lead, min) = match cu0 {
        0x00..=0x7f => return Ok((cu0 as char, 1)),
        0xc0..=0xdf => (2, cu0 & 0x1f, 0x80),
        0xe0..=0xef => (3, cu0 & 0x0f, 0x800),
        0xf0..=0xf7 => (4, cu0 & 0x07, 0x10000),
        _ => return Err(Utf8Error::InvalidLeadAt { at: at, byte: cu0 }),
    };

    let mut cp = lead as u32;
    for _ in 1..len {
        let cu = match iter.next() {
            Some(cu) => cu,
            None => return Err(Utf8Error::IncompleteAt(at)),
        };

        if cu & 0xc0 != 0x80 {
            return Err(Utf8Error::InvalidContinuationAt { at: at, byte: cu });
        }

        cp = (cp << 6) | (cu & 0x3f) as u32;
    }

    if cp < min {
        return Err(Utf8Error::OverlongAt { at: at, cp: cp });
    }

    match char::from_u32(cp) {
        Some(c) => Ok((c, len)),
        None if cp > 0x10ffff => Err(Utf8Error::OutOfRangeAt { at: at, cp: cp }),
        None => Err(Utf8Error::SurrogateAt { at: at, cp: cp }),
    }
}

/**
Encodes `char`s as UTF-8 bytes.
*/
pub struct Utf8EncodeIter<It> where It: Iterator<Item=char> {
    iter: It,
    buf: [u8; 4],
    off: u8,
    len: u8,
}

impl<It> Utf8EncodeIter<It> where It: Iterator<Item=char> {
    pub fn new(iter: It) -> Self {
        Utf8EncodeIter {
            iter: iter,
            buf: [0; 4],
            off: 0,
            len: 0,
        }
    }
}

impl<It> Iterator for Utf8EncodeIter<It> where It: Iterator<Item=char> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.off == self.len {
            let c = match self.iter.next() {
                Some(c) => c,
                None => return None,
            };
            self.off = 0;
            self.len = pack(c, &mut self.buf);
        }

        let cu = self.buf[self.off as usize];
        self.off += 1;
        Some(cu)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = (self.len - self.off) as usize;
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_add(pending),
            hi.and_then(|hi| hi.checked_mul(4)).and_then(|hi| hi.checked_add(pending)),
        )
    }
}

/**
Writes the UTF-8 encoding of `c` into the start of `buf`, returning the number of bytes written.
*/
fn pack(c: char, buf: &mut [u8; 4]) -> u8 {
    let cp = c as u32;
    match cp {
        0x0000..=0x007f => {
            buf[0] = cp as u8;
            1
        },
        0x0080..=0x07ff => {
            buf[0] = 0xc0 | (cp >> 6) as u8;
            buf[1] = 0x80 | (cp & 0x3f) as u8;
            2
        },
        0x0800..=0xffff => {
            buf[0] = 0xe0 | (cp >> 12) as u8;
            buf[1] = 0x80 | ((cp >> 6) & 0x3f) as u8;
            buf[2] = 0x80 | (cp & 0x3f) as u8;
            3
        },
        _ => {
            buf[0] = 0xf0 | (cp >> 18) as u8;
            buf[1] = 0x80 | ((cp >> 12) & 0x3f) as u8;
            buf[2] = 0x80 | ((cp >> 6) & 0x3f) as u8;
            buf[3] = 0x80 | (cp & 0x3f) as u8;
            4
        },
    }
}

/**
Describes why a byte sequence is not valid UTF-8.

Offsets are in bytes, and always point at the *start* of the offending sequence.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Utf8Error {
    #[error("invalid lead byte {byte:#04x} at offset {at}")]
    InvalidLeadAt { at: usize, byte: u8 },

    #[error("truncated sequence at offset {0}")]
    IncompleteAt(usize),

    #[error("invalid continuation byte {byte:#04x} in sequence at offset {at}")]
    InvalidContinuationAt { at: usize, byte: u8 },

    #[error("overlong encoding of U+{cp:04X} at offset {at}")]
    OverlongAt { at: usize, cp: u32 },

    #[error("encoded surrogate U+{cp:04X} at offset {at}")]
    SurrogateAt { at: usize, cp: u32 },

    #[error("value {cp:#x} beyond U+10FFFF at offset {at}")]
    OutOfRangeAt { at: usize, cp: u32 },
}

impl Utf8Error {
    /**
    Returns the byte offset of the sequence which failed to decode.
    */
    pub fn offset(&self) -> usize {
        match *self {
            Utf8Error::InvalidLeadAt { at, .. }
            | Utf8Error::IncompleteAt(at)
            | Utf8Error::InvalidContinuationAt { at, .. }
            | Utf8Error::OverlongAt { at, .. }
            | Utf8Error::SurrogateAt { at, .. }
            | Utf8Error::OutOfRangeAt { at, .. } => at,
        }
    }
}
