/*!
Zero-terminated unit sequences.

Every string this crate accepts or produces is terminated by a single zero unit, as C strings are.  Sequences given as Rust slices may omit the terminator, in which case the whole slice is used.
*/
use std::iter;
use std::slice;
use crate::encoding::Unit;

/**
Returns the units before the first zero unit.

If `units` contains no zero unit, it is returned unchanged.
*/
pub fn until_term<U>(units: &[U]) -> &[U] where U: Unit {
    match units.iter().position(Unit::is_zero) {
        Some(end) => &units[..end],
        None => units,
    }
}

/**
Borrows the units of a zero-terminated foreign string.  This *does not* include the terminating zero.

A null `ptr` is treated as the empty string.

# Safety

`ptr` must either be null, or point to a sequence of units which is terminated by a zero unit, all of which is readable.  The returned slice must not outlive that sequence.

# Efficiency

This requires a complete traversal of the string to find the terminator.
*/
pub unsafe fn slice_from_ptr<'a, U>(ptr: *const U) -> &'a [U] where U: Unit {
    if ptr.is_null() {
        return &[];
    }

    let mut len = 0;
    let mut cur = ptr;

    while !(*cur).is_zero() {
        len += 1;
        cur = cur.offset(1);
    }

    slice::from_raw_parts(ptr, len)
}

/**
Collects `units`, followed by a terminating zero.
*/
pub fn collect_with_term<U, It>(units: It) -> Vec<U> where U: Unit, It: Iterator<Item=U> {
    units.chain(iter::once(U::zero())).collect()
}

/**
Strips the terminating zero off a sequence produced by `collect_with_term`.
*/
pub fn without_term<U>(units: &[U]) -> &[U] where U: Unit {
    match units.split_last() {
        Some((_, init)) => init,
        None => units,
    }
}
