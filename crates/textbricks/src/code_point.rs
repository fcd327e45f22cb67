//! Conversions between 16-bit code-unit strings and code point sequences.
//!
//! Code points are carried as plain `u32` values rather than [`char`]:
//! unmatched surrogate code units pass through decoding unchanged, and `char`
//! cannot represent them.
//!
//! # Surrogate handling
//!
//! A high surrogate (`0xD800..=0xDBFF`) immediately followed by a low
//! surrogate (`0xDC00..=0xDFFF`) combines into one supplementary code point.
//! Any other surrogate unit is emitted as its own raw value; decoding never
//! fails.

use alloc::vec::Vec;
use core::iter::{FusedIterator, Peekable};

use crate::error::{CodecError, Result};

/// A Unicode code point in `0..=0x10FFFF`, surrogates included.
pub type CodePoint = u32;

/// Largest valid code point.
pub const MAX_CODE_POINT: CodePoint = 0x10_FFFF;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

/// Returns `true` if `value` lies in `0..=0x10FFFF`.
///
/// Surrogate values are accepted.
#[inline]
#[must_use]
pub const fn is_valid_code_point(value: u32) -> bool {
    value <= MAX_CODE_POINT
}

/// Returns `value` unchanged if it is a valid code point.
///
/// # Errors
///
/// [`CodecError::InvalidCodePoint`] (reported at index 0) if `value` exceeds
/// `0x10FFFF`.
pub fn validate_code_point(value: u32) -> Result<CodePoint> {
    validate_at(0, value)
}

pub(crate) fn validate_at(index: usize, value: u32) -> Result<CodePoint> {
    if is_valid_code_point(value) {
        Ok(value)
    } else {
        Err(CodecError::invalid_code_point(index, value))
    }
}

/// Validates every value of `points`, reporting the first offender.
pub(crate) fn validate_all(points: &[CodePoint]) -> Result<()> {
    points
        .iter()
        .enumerate()
        .try_for_each(|(i, &p)| validate_at(i, p).map(drop))
}

/// Iterator returned by [`decode_code_units`].
#[derive(Debug, Clone)]
pub struct CodeUnitDecoder<I: Iterator<Item = u16>> {
    units: Peekable<I>,
}

impl<I: Iterator<Item = u16>> Iterator for CodeUnitDecoder<I> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        let unit = self.units.next()?;
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(low) = self.units.next_if(|u| LOW_SURROGATES.contains(u)) {
                return Some(combine_surrogates(unit, low));
            }
        }
        Some(CodePoint::from(unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.units.size_hint();
        // At most every unit pairs up with its neighbour.
        (lower.div_ceil(2), upper)
    }
}

impl<I: Iterator<Item = u16>> FusedIterator for CodeUnitDecoder<I> {}

#[inline]
fn combine_surrogates(high: u16, low: u16) -> CodePoint {
    ((u32::from(high) & 0x3FF) << 10) + (u32::from(low) & 0x3FF) + SUPPLEMENTARY_BASE
}

/// Lazily decodes a sequence of 16-bit code units into code points.
pub fn decode_code_units<I>(units: I) -> CodeUnitDecoder<I::IntoIter>
where
    I: IntoIterator<Item = u16>,
{
    CodeUnitDecoder {
        units: units.into_iter().peekable(),
    }
}

/// Decodes a code-unit string into its code points.
///
/// Unmatched surrogates are passed through as raw values.
#[must_use]
pub fn code_points_from_string(units: &[u16]) -> Vec<CodePoint> {
    decode_code_units(units.iter().copied()).collect()
}

/// Encodes code points as a code-unit string, splitting supplementary code
/// points into surrogate pairs.
///
/// # Errors
///
/// [`CodecError::InvalidCodePoint`] for the first value above `0x10FFFF`.
pub fn string_from_code_points(points: &[CodePoint]) -> Result<Vec<u16>> {
    let mut units = Vec::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        let point = validate_at(i, point)?;
        push_code_units(&mut units, point);
    }
    Ok(units)
}

/// Appends the units for one already-validated code point.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn push_code_units(units: &mut Vec<u16>, point: CodePoint) {
    if point < SUPPLEMENTARY_BASE {
        units.push(point as u16);
    } else {
        let v = point - SUPPLEMENTARY_BASE;
        units.push(0xD800 + (v >> 10) as u16);
        units.push(0xDC00 + (v & 0x3FF) as u16);
    }
}

/// Collects the code points of a Rust string.
#[must_use]
pub fn code_points_from_str(s: &str) -> Vec<CodePoint> {
    s.chars().map(CodePoint::from).collect()
}

/// Collects the code units of a Rust string.
#[must_use]
pub fn string_from_str(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
