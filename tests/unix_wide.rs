#![cfg(all(not(windows), feature="wchar"))]
extern crate libc;
extern crate utf8string;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::sync::Arc;
use std::thread;
use assert_matches::assert_matches;
use libc::wchar_t;
use pretty_assertions::assert_eq;
use utf8string::{MalformedInput, Utf8String};
use utf8string::encoding::Utf32Error;

const WORD: &'static str = "gªrçon😀";
const WORD_W: &'static [wchar_t] = &[0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E, 0x1F600, 0x00];

#[test]
fn test_garcon() {
    let s = Utf8String::from(WORD);
    assert_eq!(s.as_wide_with_nul(), WORD_W);
    assert_eq!(s.as_wide(), &WORD_W[..7]);

    let back = unsafe { Utf8String::from_wide_ptr(s.as_wide_ptr()) }.expect(here!());
    assert_eq!(back, s);
    assert_eq!(Utf8String::from_wide(WORD_W).expect(here!()), s);
}

#[test]
fn test_cached() {
    let s = Utf8String::from(WORD);
    assert_eq!(s.as_wide_ptr(), s.as_wide_ptr());
    assert_eq!(s.as_wide().as_ptr(), s.as_wide_ptr());
}

#[test]
fn test_cache_shared_between_threads() {
    let s = Arc::new(Utf8String::from(WORD));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = s.clone();
            thread::spawn(move || s.as_wide_ptr() as usize)
        })
        .collect();

    let ptrs: Vec<usize> = handles.into_iter().map(|h| h.join().expect(here!())).collect();
    assert!(ptrs.iter().all(|&p| p == ptrs[0]));
    assert_eq!(s.as_wide_ptr() as usize, ptrs[0]);
}

#[test]
fn test_reject() {
    assert_matches!(
        Utf8String::from_wide(&[0x41, 0xD800]),
        Err(MalformedInput::Wide(Utf32Error::SurrogateAt { at: 1, .. }))
    );
    assert_matches!(
        Utf8String::from_wide(&[0x110000]),
        Err(MalformedInput::Wide(Utf32Error::OutOfRangeAt { at: 0, .. }))
    );
}
