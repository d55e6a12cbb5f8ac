use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::{Infallible, TryFrom};
use std::ffi::CStr;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::str::{self, Chars, FromStr};
use libc::c_char;
use log::debug;
use static_assertions::assert_impl_all;
use crate::encoding::{EncodeExt, TranscodeTo, Unit};
use crate::error::MalformedInput;
use crate::structure;
use crate::util::TrapErrExt;

#[cfg(feature="wchar")]
use libc::wchar_t;
#[cfg(feature="wchar")]
use log::trace;
#[cfg(feature="wchar")]
use once_cell::sync::OnceCell;
#[cfg(feature="wchar")]
use crate::encoding::wide;

/**
An immutable, validated Unicode string.

The string is stored as zero-terminated UTF-8.  It can be constructed from UTF-8, UTF-16, UTF-32, or C wide strings, each of which is validated; construction either produces a `Utf8String` holding well-formed text, or fails with `MalformedInput`.  Once constructed, every accessor is infallible.

All constructors treat their input as zero-terminated: decoding stops at the first zero unit, or at the end of the slice if there is none.  As a result, the stored text never contains an interior NUL.

The UTF-8 form is the only stored representation.  UTF-16 and UTF-32 forms are re-encoded on every call; the wide form is computed on first use and cached, so that a pointer to it can be handed out.

See also: `MalformedInput`.
*/
#[derive(Clone)]
pub struct Utf8String {
    /// Well-formed UTF-8 with no zero bytes, followed by a single zero byte.
    encoded: Box<[u8]>,
    chars: usize,
    #[cfg(feature="wchar")]
    wide: OnceCell<Box<[wchar_t]>>,
}

assert_impl_all!(Utf8String: Send, Sync);

impl Utf8String {
    /**
    Constructs a `Utf8String` from UTF-8 encoded bytes.

    The bytes are stored as given; since overlong sequences are rejected, valid input is already in canonical form.

    # Failure

    Fails with `MalformedInput::Utf8` if the bytes before the first zero byte are not well-formed UTF-8.
    */
    pub fn from_utf8(units: &[u8]) -> Result<Self, MalformedInput> {
        let units = structure::until_term(units);

        let mut chars = 0;
        for r in units.transcode() {
            r.map_err(reject)?;
            chars += 1;
        }

        Ok(Utf8String::from_parts(structure::collect_with_term(units.iter().cloned()), chars))
    }

    /**
    Constructs a `Utf8String` from UTF-16 encoded units.

    # Failure

    Fails with `MalformedInput::Utf16` if the units before the first zero unit contain an unpaired surrogate.
    */
    pub fn from_utf16(units: &[u16]) -> Result<Self, MalformedInput> {
        Utf8String::from_scalars(structure::until_term(units).transcode())
    }

    /**
    Constructs a `Utf8String` from UTF-32 encoded units.

    # Failure

    Fails with `MalformedInput::Utf32` if any unit before the first zero unit is a surrogate or lies beyond `U+10FFFF`.
    */
    pub fn from_utf32(units: &[u32]) -> Result<Self, MalformedInput> {
        Utf8String::from_scalars(structure::until_term(units).transcode())
    }

    /**
    Constructs a `Utf8String` from units in the native C wide encoding.

    # Failure

    Fails with `MalformedInput::Wide` if the units before the first zero unit are not valid in the wide encoding.
    */
    #[cfg(feature="wchar")]
    pub fn from_wide(units: &[wchar_t]) -> Result<Self, MalformedInput> {
        Utf8String::from_scalars(wide::decode(structure::until_term(units))
            .map(|r| r.map_err(MalformedInput::Wide)))
    }

    /**
    Constructs a `Utf8String` from a zero-terminated UTF-8 string.  A null pointer produces an empty string.

    # Safety

    `ptr` must be null, or point to a readable sequence of bytes ending in a zero byte.

    # Failure

    As for `from_utf8`.
    */
    pub unsafe fn from_utf8_ptr(ptr: *const u8) -> Result<Self, MalformedInput> {
        Utf8String::from_utf8(structure::slice_from_ptr(ptr))
    }

    /**
    Constructs a `Utf8String` from a zero-terminated C string, assumed to be UTF-8.  A null pointer produces an empty string.

    # Safety

    As for `from_utf8_ptr`.

    # Failure

    As for `from_utf8`.
    */
    pub unsafe fn from_c_ptr(ptr: *const c_char) -> Result<Self, MalformedInput> {
        Utf8String::from_utf8_ptr(ptr as *const u8)
    }

    /**
    Constructs a `Utf8String` from a zero-terminated UTF-16 string.  A null pointer produces an empty string.

    # Safety

    `ptr` must be null, or point to a readable sequence of units ending in a zero unit.

    # Failure

    As for `from_utf16`.
    */
    pub unsafe fn from_utf16_ptr(ptr: *const u16) -> Result<Self, MalformedInput> {
        Utf8String::from_utf16(structure::slice_from_ptr(ptr))
    }

    /**
    Constructs a `Utf8String` from a zero-terminated UTF-32 string.  A null pointer produces an empty string.

    # Safety

    `ptr` must be null, or point to a readable sequence of units ending in a zero unit.

    # Failure

    As for `from_utf32`.
    */
    pub unsafe fn from_utf32_ptr(ptr: *const u32) -> Result<Self, MalformedInput> {
        Utf8String::from_utf32(structure::slice_from_ptr(ptr))
    }

    /**
    Constructs a `Utf8String` from a zero-terminated C wide string.  A null pointer produces an empty string.

    # Safety

    `ptr` must be null, or point to a readable sequence of units ending in a zero unit.

    # Failure

    As for `from_wide`.
    */
    #[cfg(feature="wchar")]
    pub unsafe fn from_wide_ptr(ptr: *const wchar_t) -> Result<Self, MalformedInput> {
        Utf8String::from_wide(structure::slice_from_ptr(ptr))
    }

    /**
    Returns the UTF-8 encoded contents of this string.  This *does not* include the terminating zero.
    */
    pub fn as_bytes(&self) -> &[u8] {
        structure::without_term(&self.encoded[..])
    }

    /**
    Returns the UTF-8 encoded contents of this string.  This *includes* the terminating zero.
    */
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.encoded
    }

    pub fn as_str(&self) -> &str {
        // The contents were validated on construction.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    pub fn as_c_str(&self) -> &CStr {
        // Exactly one zero byte, at the end.
        unsafe { CStr::from_bytes_with_nul_unchecked(&self.encoded) }
    }

    /**
    Returns a pointer to the zero-terminated UTF-8 contents.

    The returned pointer is valid for as long as the `Utf8String` itself is.
    */
    pub fn as_ptr(&self) -> *const c_char {
        self.encoded.as_ptr() as *const c_char
    }

    /**
    Returns the contents as UTF-16 units.  This *does not* include a terminating zero.

    # Efficiency

    The units are re-encoded on every call.
    */
    pub fn to_utf16(&self) -> Vec<u16> {
        self.scalars().encode_utf16().collect()
    }

    /**
    Returns the contents as UTF-16 units.  This *includes* a terminating zero.
    */
    pub fn to_utf16_with_nul(&self) -> Vec<u16> {
        structure::collect_with_term(self.scalars().encode_utf16())
    }

    /**
    Returns the contents as UTF-32 units.  This *does not* include a terminating zero.

    # Efficiency

    The units are re-encoded on every call.
    */
    pub fn to_utf32(&self) -> Vec<u32> {
        self.scalars().encode_utf32().collect()
    }

    /**
    Returns the contents as UTF-32 units.  This *includes* a terminating zero.
    */
    pub fn to_utf32_with_nul(&self) -> Vec<u32> {
        structure::collect_with_term(self.scalars().encode_utf32())
    }

    /**
    Returns the contents in the native C wide encoding.  This *does not* include the terminating zero.

    # Efficiency

    The wide form is computed on the first call to any of the wide accessors, and cached.  Concurrent first calls block until one of them has filled the cache.
    */
    #[cfg(feature="wchar")]
    pub fn as_wide(&self) -> &[wchar_t] {
        structure::without_term(self.as_wide_with_nul())
    }

    /**
    Returns the contents in the native C wide encoding.  This *includes* the terminating zero.
    */
    #[cfg(feature="wchar")]
    pub fn as_wide_with_nul(&self) -> &[wchar_t] {
        self.wide.get_or_init(|| {
            let units = structure::collect_with_term(self.scalars().encode_wide());
            trace!("cached {} wide units for {} chars", units.len() - 1, self.chars);
            units.into_boxed_slice()
        })
    }

    /**
    Returns a pointer to the zero-terminated contents in the native C wide encoding.

    The returned pointer is valid for as long as the `Utf8String` itself is.
    */
    #[cfg(feature="wchar")]
    pub fn as_wide_ptr(&self) -> *const wchar_t {
        self.as_wide_with_nul().as_ptr()
    }

    /**
    Returns an iterator over the `char`s of this string.
    */
    pub fn chars(&self) -> Chars<'_> {
        self.as_str().chars()
    }

    /**
    Returns the number of Unicode scalar values in this string.

    This is neither the number of bytes, nor the number of UTF-16 units.  It was computed on construction, so this is *O*(1).
    */
    pub fn char_count(&self) -> usize {
        self.chars
    }

    /**
    Returns the length of the UTF-8 contents in bytes, not counting the terminating zero.
    */
    pub fn byte_count(&self) -> usize {
        self.encoded.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.byte_count() == 0
    }

    /**
    Decodes the stored UTF-8 for re-encoding into the other forms.

    The bytes were validated on construction, so the decoder never yields an `Err`.
    */
    fn scalars(&self) -> impl Iterator<Item=char> + '_ {
        self.as_bytes().transcode().filter_map(Result::ok)
    }

    /**
    Decodes `scalars`, re-encoding them as zero-terminated UTF-8.
    */
    fn from_scalars<It, E>(scalars: It) -> Result<Self, MalformedInput>
    where
        It: Iterator<Item=Result<char, E>>,
        E: Into<MalformedInput>,
    {
        let mut trap = Ok(());
        let mut chars = 0;
        let encoded = structure::collect_with_term(scalars
            .trap_err(&mut trap)
            .inspect(|_| chars += 1)
            .encode_utf8());
        trap.map_err(reject)?;

        Ok(Utf8String::from_parts(encoded, chars))
    }

    fn from_parts(encoded: Vec<u8>, chars: usize) -> Self {
        debug_assert_eq!(encoded.iter().position(Unit::is_zero), Some(encoded.len() - 1));
        Utf8String {
            encoded: encoded.into_boxed_slice(),
            chars: chars,
            #[cfg(feature="wchar")]
            wide: OnceCell::new(),
        }
    }
}

fn reject<E>(err: E) -> MalformedInput where E: Into<MalformedInput> {
    let err = err.into();
    debug!("rejected input: {}", err);
    err
}

impl AsRef<str> for Utf8String {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Utf8String {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<CStr> for Utf8String {
    fn as_ref(&self) -> &CStr {
        self.as_c_str()
    }
}

impl Borrow<str> for Utf8String {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Debug for Utf8String {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(self.as_str(), fmt)
    }
}

impl Default for Utf8String {
    fn default() -> Self {
        Utf8String::from_parts(vec![0], 0)
    }
}

impl Display for Utf8String {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self.as_str(), fmt)
    }
}

impl Eq for Utf8String {}

/**
Constructs a `Utf8String` from the text of `s` up to its first NUL, if any.
*/
impl<'a> From<&'a str> for Utf8String {
    fn from(s: &'a str) -> Self {
        let s = match s.find('\0') {
            Some(end) => &s[..end],
            None => s,
        };
        Utf8String::from_parts(structure::collect_with_term(s.bytes()), s.chars().count())
    }
}

impl From<char> for Utf8String {
    fn from(c: char) -> Self {
        let mut buf = [0; 4];
        Utf8String::from(&*c.encode_utf8(&mut buf))
    }
}

impl FromStr for Utf8String {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Utf8String::from(s))
    }
}

impl Hash for Utf8String {
    fn hash<H>(&self, state: &mut H) where H: Hasher {
        self.as_str().hash(state)
    }
}

impl Ord for Utf8String {
    fn cmp(&self, other: &Utf8String) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialEq<Utf8String> for Utf8String {
    fn eq(&self, other: &Utf8String) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<str> for Utf8String {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}

impl<'a> PartialEq<&'a str> for Utf8String {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str().eq(*other)
    }
}

impl PartialEq<Utf8String> for str {
    fn eq(&self, other: &Utf8String) -> bool {
        self.eq(other.as_str())
    }
}

impl PartialOrd<Utf8String> for Utf8String {
    fn partial_cmp(&self, other: &Utf8String) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> TryFrom<&'a [u8]> for Utf8String {
    type Error = MalformedInput;

    fn try_from(units: &'a [u8]) -> Result<Self, MalformedInput> {
        Utf8String::from_utf8(units)
    }
}

impl<'a> TryFrom<&'a [u16]> for Utf8String {
    type Error = MalformedInput;

    fn try_from(units: &'a [u16]) -> Result<Self, MalformedInput> {
        Utf8String::from_utf16(units)
    }
}

impl<'a> TryFrom<&'a [u32]> for Utf8String {
    type Error = MalformedInput;

    fn try_from(units: &'a [u32]) -> Result<Self, MalformedInput> {
        Utf8String::from_utf32(units)
    }
}
