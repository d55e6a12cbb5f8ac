/*!
The native C wide encoding.

`wchar_t` is 16 bits wide on Windows, where wide strings are UTF-16, and 32 bits wide everywhere else we support, where they are UTF-32.  The variant is chosen when the crate is compiled; the width is checked at compile time against `libc::wchar_t`.
*/
use std::iter;
use std::slice;
use cfg_if::cfg_if;
use libc::wchar_t;

cfg_if! {
    if #[cfg(windows)] {
        pub mod windows;
        pub use self::windows as os;
    } else {
        pub mod unix;
        pub use self::unix as os;
    }
}

pub use self::os::{WideDecodeIter, WideEncodeIter, WideError, WIDTH};

/**
Decodes a slice of wide units.
*/
pub fn decode(units: &[wchar_t]) -> WideDecodeIter<iter::Cloned<slice::Iter<'_, wchar_t>>> {
    WideDecodeIter::new(units.iter().cloned())
}
