extern crate utf8string;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::thread;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use utf8string::{MalformedInput, Utf8String};
use utf8string::encoding::{Utf8Error, Utf16Error, Utf32Error};

const WORD: &'static str = "gªrçon";
const WORD_UTF8: &'static [u8] = b"g\xc2\xaar\xc3\xa7on\0";
const WORD_UTF16: &'static [u16] = &[0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E, 0x00];
const WORD_UTF32: &'static [u32] = &[0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E, 0x00];

#[test]
fn test_garcon() {
    let from8 = Utf8String::from_utf8(WORD_UTF8).expect(here!());
    let from16 = Utf8String::from_utf16(WORD_UTF16).expect(here!());
    let from32 = Utf8String::from_utf32(WORD_UTF32).expect(here!());

    assert_eq!(from8, WORD);
    assert_eq!(from16, from8);
    assert_eq!(from32, from8);

    assert_eq!(from8.to_utf16_with_nul(), WORD_UTF16);
    assert_eq!(from8.to_utf32_with_nul(), WORD_UTF32);
    assert_eq!(from32.as_bytes_with_nul(), WORD_UTF8);
    assert_eq!(from16.char_count(), 6);
    assert_eq!(from16.byte_count(), 8);
}

#[test]
fn test_from_ptr() {
    let from8 = unsafe { Utf8String::from_utf8_ptr(WORD_UTF8.as_ptr()) }.expect(here!());
    let from_c = unsafe { Utf8String::from_c_ptr(from8.as_ptr()) }.expect(here!());
    let from16 = unsafe { Utf8String::from_utf16_ptr(WORD_UTF16.as_ptr()) }.expect(here!());
    let from32 = unsafe { Utf8String::from_utf32_ptr(WORD_UTF32.as_ptr()) }.expect(here!());

    assert_eq!(from8, WORD);
    assert_eq!(from_c, WORD);
    assert_eq!(from16, WORD);
    assert_eq!(from32, WORD);

    let null = unsafe { Utf8String::from_utf16_ptr(std::ptr::null()) }.expect(here!());
    assert!(null.is_empty());
}

#[test]
fn test_supplementary_plane() {
    let s = Utf8String::from_utf32(&[0x1F600]).expect(here!());
    assert_eq!(s.to_utf16(), vec![0xD83D, 0xDE00]);
    assert_eq!(s.as_bytes(), &[0xF0, 0x9F, 0x98, 0x80]);
    assert_eq!(s.to_utf32(), vec![0x1F600]);
    assert_eq!(s.char_count(), 1);
    assert_eq!(s.byte_count(), 4);

    let back = Utf8String::from_utf16(&s.to_utf16()).expect(here!());
    assert_eq!(back, s);
}

#[test]
fn test_char_and_byte_count() {
    let s = Utf8String::from_utf8(&[0xC3, 0xA9]).expect(here!());
    assert_eq!(s.char_count(), 1);
    assert_eq!(s.byte_count(), 2);
    assert_eq!(s, "\u{e9}");

    let s = Utf8String::from("a\u{e9}\u{20ac}\u{1f600}");
    assert_eq!(s.char_count(), 4);
    assert_eq!(s.byte_count(), 10);
    assert_eq!(s.to_utf16().len(), 5);
}

#[test]
fn test_reject_overlong_nul() {
    let r = Utf8String::from_utf8(&[0xC0, 0x80]);
    assert_eq!(r, Err(MalformedInput::Utf8(Utf8Error::OverlongAt { at: 0, cp: 0 })));
}

#[test]
fn test_reject_lone_high_surrogate() {
    let r = Utf8String::from_utf16(&[0xD800]);
    assert_eq!(r, Err(MalformedInput::Utf16(Utf16Error::UnpairedHighAt { at: 0, unit: 0xD800 })));

    // The terminator ends the input, so it cannot complete the pair either.
    let r = Utf8String::from_utf16(&[0xD800, 0x0000, 0xDC00]);
    assert_matches!(r, Err(MalformedInput::Utf16(Utf16Error::UnpairedHighAt { .. })));
}

#[test]
fn test_reject_lone_low_surrogate() {
    assert_matches!(
        Utf8String::from_utf16(&[0xDC00, 0x41]),
        Err(MalformedInput::Utf16(Utf16Error::UnpairedLowAt { at: 0, .. }))
    );
    assert_matches!(
        Utf8String::from_utf16(&[0x41, 0xDC00]),
        Err(MalformedInput::Utf16(Utf16Error::UnpairedLowAt { at: 1, .. }))
    );
}

#[test]
fn test_reject_above_max() {
    let r = Utf8String::from_utf32(&[0x110000]);
    assert_eq!(r, Err(MalformedInput::Utf32(Utf32Error::OutOfRangeAt { at: 0, unit: 0x110000 })));
    assert_eq!(r.map_err(|err| err.to_string()), Err("malformed UTF-32: value 0x110000 beyond U+10FFFF at offset 0".to_string()));
}

#[test]
fn test_reject_truncated_by_terminator() {
    let r = Utf8String::from_utf8(b"ab\xc3\0\xa9");
    assert_eq!(r, Err(MalformedInput::Utf8(Utf8Error::IncompleteAt(2))));
}

#[test]
fn test_stops_at_terminator() {
    let s = Utf8String::from_utf8(b"abc\0\xff\xff").expect(here!());
    assert_eq!(s, "abc");

    let s = Utf8String::from_utf32(&[0x41, 0, 0x110000]).expect(here!());
    assert_eq!(s, "A");
}

#[test]
fn test_round_trips() {
    let samples = [
        "",
        "plain ascii",
        "\u{7f}\u{80}\u{7ff}\u{800}\u{d7ff}\u{e000}\u{fffd}\u{ffff}",
        "\u{10000}\u{1f600}\u{10ffff}",
        "Stra\u{df}e \u{3b1}\u{3b2}\u{3b3} \u{65e5}\u{672c}\u{8a9e} \u{1f980}",
    ];

    for sample in samples.iter() {
        let s = Utf8String::from(*sample);
        let s16 = Utf8String::from_utf16(&s.to_utf16()).expect(here!());
        let s32 = Utf8String::from_utf32(&s.to_utf32()).expect(here!());
        let s8 = Utf8String::from_utf8(s.as_bytes()).expect(here!());

        assert_eq!(s16, s);
        assert_eq!(s32, s);
        assert_eq!(s8, s);
        assert_eq!(s.chars().collect::<String>(), *sample);
        assert_eq!(s.to_utf16(), sample.encode_utf16().collect::<Vec<_>>());
    }
}

#[test]
fn test_idempotent() {
    let a = Utf8String::from_utf16(WORD_UTF16).expect(here!());
    let b = Utf8String::from_utf16(WORD_UTF16).expect(here!());
    assert_eq!(a.as_bytes(), a.as_bytes());
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert_eq!(a.to_utf16(), a.to_utf16());
    assert_eq!(a.clone(), a);
}

#[test]
fn test_traits() {
    use std::collections::HashSet;
    use std::convert::TryFrom;

    let s: Utf8String = WORD.parse().expect(here!());
    assert_eq!(format!("{}", s), WORD);
    assert_eq!(format!("{:?}", s), format!("{:?}", WORD));
    assert_eq!(s.as_c_str().to_bytes_with_nul(), WORD_UTF8);

    let mut set = HashSet::new();
    set.insert(s.clone());
    assert!(set.contains(WORD));

    assert_eq!(Utf8String::try_from(WORD_UTF16).expect(here!()), s);
    assert_eq!(Utf8String::try_from(WORD_UTF32).expect(here!()), s);
    assert_eq!(Utf8String::try_from(WORD_UTF8).expect(here!()), s);

    assert!(Utf8String::from("a") < Utf8String::from("b"));
    assert!(Utf8String::from("z") < Utf8String::from("\u{e9}"));
}

#[test]
fn test_share_between_threads() {
    let s = std::sync::Arc::new(Utf8String::from(WORD));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = s.clone();
            thread::spawn(move || s.to_utf16())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect(here!()), &WORD_UTF16[..6]);
    }
}
