/*!
This crate defines `Utf8String`, an immutable Unicode string which can be built from, and exported to, the encodings used at foreign interfaces.

Input is *never* trusted: every constructor validates its input, and fails with `MalformedInput` rather than producing a string holding ill-formed text.  Once built, a `Utf8String` holds canonical UTF-8, and every accessor is infallible.

# Quick Reference

All foreign strings are zero-terminated.  Constructors given a Rust slice stop at the first zero unit, or at the end of the slice.

| Encoding | Foreign type | Construct with | Export with |
| ---: | --- | --- | --- |
| UTF-8 | `*const c_char`, `*const u8` | `from_utf8`, `from_c_ptr`, `from_utf8_ptr` | `as_bytes`, `as_str`, `as_c_str`, `as_ptr` |
| UTF-16 | `*const u16` | `from_utf16`, `from_utf16_ptr` | `to_utf16`, `to_utf16_with_nul` |
| UTF-32 | `*const u32` | `from_utf32`, `from_utf32_ptr` | `to_utf32`, `to_utf32_with_nul` |
| C wide | `*const wchar_t` | `from_wide`, `from_wide_ptr` | `as_wide`, `as_wide_with_nul`, `as_wide_ptr` |

The C wide encoding is UTF-16 on Windows and UTF-32 elsewhere; which one is fixed when the crate is compiled.  Wide support can be disabled by turning off the default `wchar` feature.

The codecs themselves are available in the `encoding` module, as iterator adapters.
*/
pub mod encoding;
pub mod error;
pub mod structure;

mod util;
mod wrapper;

pub use error::MalformedInput;
pub use wrapper::Utf8String;
