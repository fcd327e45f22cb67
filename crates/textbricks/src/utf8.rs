//! UTF-8 conversion between code points and bytes.
//!
//! The encoder follows the RFC 3629 byte layout. Surrogate code points are
//! written in their three-byte form so that every valid code point survives a
//! round trip through bytes.
//!
//! The decoder is strict: a stray continuation byte, an interrupted or
//! truncated multi-byte sequence, an overlong form or a byte of `0xF8` and
//! above is a hard error. Nothing is ever replaced with U+FFFD. Decoding is
//! therefore the exact inverse of encoding.

use alloc::{string::String, vec::Vec};
use core::{iter::FusedIterator, str::FromStr};

use crate::{
    CodePoint,
    code_point::validate_at,
    error::{CodecError, Result, Utf8Error},
};

/// Binary text encodings understood by the byte conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "lowercase"))]
pub enum TextEncoding {
    /// UTF-8, the only supported encoding.
    #[default]
    Utf8,
}

impl TextEncoding {
    /// Canonical name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("utf8") || name.eq_ignore_ascii_case("utf-8") {
            Ok(Self::Utf8)
        } else {
            Err(CodecError::UnsupportedEncoding(String::from(name)))
        }
    }
}

impl core::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of bytes needed to encode `point`.
#[inline]
#[must_use]
pub const fn encoded_len(point: CodePoint) -> usize {
    match point {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Appends the UTF-8 bytes of one already-validated code point.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn push_utf8(bytes: &mut Vec<u8>, c: CodePoint) {
    match encoded_len(c) {
        1 => bytes.push(c as u8),
        2 => bytes.extend_from_slice(&[0xC0 | (c >> 6) as u8, 0x80 | (c & 0x3F) as u8]),
        3 => bytes.extend_from_slice(&[
            0xE0 | (c >> 12) as u8,
            0x80 | ((c >> 6) & 0x3F) as u8,
            0x80 | (c & 0x3F) as u8,
        ]),
        _ => bytes.extend_from_slice(&[
            0xF0 | (c >> 18) as u8,
            0x80 | ((c >> 12) & 0x3F) as u8,
            0x80 | ((c >> 6) & 0x3F) as u8,
            0x80 | (c & 0x3F) as u8,
        ]),
    }
}

/// Encodes code points as UTF-8 bytes.
///
/// # Errors
///
/// [`CodecError::InvalidCodePoint`] for the first value above `0x10FFFF`.
pub fn bytes_from_code_points(points: &[CodePoint]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        push_utf8(&mut bytes, validate_at(i, point)?);
    }
    Ok(bytes)
}

/// Encodes code points using the encoding called `encoding`.
///
/// This function is like [`bytes_from_code_points`], but takes an encoding
/// name.
///
/// # Errors
///
/// [`CodecError::UnsupportedEncoding`] for any name other than `utf8`, plus the
/// errors of [`bytes_from_code_points`].
pub fn bytes_from_code_points_with(points: &[CodePoint], encoding: &str) -> Result<Vec<u8>> {
    match encoding.parse()? {
        TextEncoding::Utf8 => bytes_from_code_points(points),
    }
}

/// Decodes UTF-8 bytes into code points.
///
/// # Errors
///
/// [`CodecError::MalformedByteSequence`] for the first structural error, or
/// [`CodecError::InvalidCodePoint`] for a sequence decoding above `0x10FFFF`.
pub fn code_points_from_bytes(bytes: &[u8]) -> Result<Vec<CodePoint>> {
    decode_utf8(bytes.iter().copied()).collect()
}

/// Decodes bytes using the encoding called `encoding`.
///
/// This function is like [`code_points_from_bytes`], but takes an encoding
/// name.
///
/// # Errors
///
/// [`CodecError::UnsupportedEncoding`] for any name other than `utf8`, plus the
/// errors of [`code_points_from_bytes`].
pub fn code_points_from_bytes_with(bytes: &[u8], encoding: &str) -> Result<Vec<CodePoint>> {
    match encoding.parse()? {
        TextEncoding::Utf8 => code_points_from_bytes(bytes),
    }
}

/// Lazily decodes UTF-8 bytes into code points.
///
/// The iterator yields at most one error and then ends.
pub fn decode_utf8<I>(bytes: I) -> Utf8Decoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    Utf8Decoder {
        bytes: bytes.into_iter(),
        index: 0,
        pending: None,
        failed: false,
    }
}

/// Classification of a single byte by its leading bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Ascii,
    Continuation,
    /// Lead byte announcing this many continuation bytes.
    Lead(u8),
    Invalid,
}

impl ByteClass {
    #[inline]
    const fn of(byte: u8) -> Self {
        match byte {
            0x00..=0x7F => Self::Ascii,
            0x80..=0xBF => Self::Continuation,
            0xC0..=0xDF => Self::Lead(1),
            0xE0..=0xEF => Self::Lead(2),
            0xF0..=0xF7 => Self::Lead(3),
            0xF8..=0xFF => Self::Invalid,
        }
    }

    /// Payload bits carried by a lead byte.
    #[inline]
    const fn lead_bits(byte: u8, continuations: u8) -> u32 {
        (byte & (0x7F >> (continuations + 1))) as u32
    }
}

/// A multi-byte sequence that is still waiting for continuation bytes.
#[derive(Debug, Clone, Copy)]
struct Pending {
    start: usize,
    value: u32,
    continuations: u8,
    remaining: u8,
}

/// Smallest value a sequence with this many continuation bytes may carry.
const MIN_SEQUENCE_VALUE: [u32; 4] = [0, 0x80, 0x800, 0x1_0000];

/// Iterator returned by [`decode_utf8`].
#[derive(Debug, Clone)]
pub struct Utf8Decoder<I> {
    bytes: I,
    index: usize,
    pending: Option<Pending>,
    failed: bool,
}

impl<I> Utf8Decoder<I> {
    fn fail(&mut self, err: CodecError) -> Option<Result<CodePoint>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<I: Iterator<Item = u8>> Iterator for Utf8Decoder<I> {
    type Item = Result<CodePoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let Some(byte) = self.bytes.next() else {
                return if self.pending.is_some() {
                    let index = self.index;
                    self.fail(CodecError::malformed(index, Utf8Error::UnexpectedEndOfBytes))
                } else {
                    None
                };
            };
            let index = self.index;
            self.index += 1;

            match (ByteClass::of(byte), self.pending) {
                (ByteClass::Invalid, _) => {
                    return self.fail(CodecError::malformed(index, Utf8Error::InvalidByte));
                }
                (ByteClass::Continuation, None) => {
                    return self.fail(CodecError::malformed(
                        index,
                        Utf8Error::UnexpectedContinuationByte,
                    ));
                }
                (ByteClass::Ascii | ByteClass::Lead(_), Some(_)) => {
                    return self.fail(CodecError::malformed(
                        index,
                        Utf8Error::ContinuationByteExpected,
                    ));
                }
                (ByteClass::Continuation, Some(open)) => {
                    let value = (open.value << 6) | u32::from(byte & 0x3F);
                    if open.remaining > 1 {
                        self.pending = Some(Pending {
                            value,
                            remaining: open.remaining - 1,
                            ..open
                        });
                        continue;
                    }
                    self.pending = None;
                    if value < MIN_SEQUENCE_VALUE[usize::from(open.continuations)] {
                        return self.fail(CodecError::malformed(
                            open.start,
                            Utf8Error::OverlongEncoding,
                        ));
                    }
                    return match validate_at(open.start, value) {
                        Ok(point) => Some(Ok(point)),
                        Err(err) => self.fail(err),
                    };
                }
                (ByteClass::Ascii, None) => return Some(Ok(u32::from(byte))),
                (ByteClass::Lead(n), None) => {
                    self.pending = Some(Pending {
                        start: index,
                        value: ByteClass::lead_bits(byte, n),
                        continuations: n,
                        remaining: n,
                    });
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let (lower, upper) = self.bytes.size_hint();
        // Each remaining byte yields at most one item, and a truncated
        // sequence adds one trailing error.
        (usize::from(lower > 0), upper.and_then(|n| n.checked_add(1)))
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for Utf8Decoder<I> {}
