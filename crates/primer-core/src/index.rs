//! Ordinal indexing
//!
//! Sequences are indexed from 1. Negative indexes count back from the end,
//! so `-1` is the last value. Index 0 is never valid.

use std::ops::Range;

use crate::{PrimitiveError, PrimitiveResult};

/// Convert an ordinal index into a zero-based offset.
pub fn to_offset(index: isize, size: usize) -> PrimitiveResult<usize> {
    let magnitude = index.unsigned_abs();
    if index == 0 || magnitude > size {
        return Err(PrimitiveError::IndexOutOfRange { index, size });
    }
    if index > 0 {
        Ok(magnitude - 1)
    } else {
        Ok(size - magnitude)
    }
}

/// Convert an inclusive ordinal range into a zero-based slice range.
pub fn to_offsets(first: isize, last: isize, size: usize) -> PrimitiveResult<Range<usize>> {
    let start = to_offset(first, size)?;
    let end = to_offset(last, size)?;
    if start > end {
        return Err(PrimitiveError::IndexOutOfRange { index: last, size });
    }
    Ok(start..end + 1)
}

/// Ordinal of the first matching value, or 0 when nothing matches.
pub fn ordinal_of<V: PartialEq>(values: &[V], value: &V) -> usize {
    values
        .iter()
        .position(|candidate| candidate == value)
        .map_or(0, |offset| offset + 1)
}
