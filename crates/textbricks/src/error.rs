use alloc::string::String;

use thiserror::Error;

use crate::CodePoint;

/// Errors raised for malformed input.
///
/// Conditions that are routine while scanning free-form text (an unparsable
/// numeral, an unmatched Roman prefix) are not errors; those operations return
/// `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A value outside `0..=0x10FFFF` was supplied or decoded as a code point.
    #[error("invalid code point {value:#X} at index {index}")]
    InvalidCodePoint {
        /// Position of the value in the input sequence (or of the lead byte
        /// when decoding bytes).
        index: usize,
        /// The rejected value.
        value: u32,
    },
    /// The requested text encoding is not supported.
    #[error("unsupported encoding '{0}'")]
    UnsupportedEncoding(String),
    /// The byte sequence is not well-formed UTF-8.
    #[error("{reason} at byte {index}")]
    MalformedByteSequence {
        /// Offset of the offending byte (the input length for a truncated
        /// sequence).
        index: usize,
        /// What went wrong.
        reason: Utf8Error,
    },
    /// A parsed numeral does not fit the safe integer range.
    #[error("integer overflow: value exceeds {}", crate::numeral::MAX_SAFE_INTEGER)]
    IntegerOverflow,
    /// Mark token lists of different lengths were paired up.
    #[error("mark count mismatch: {from} source marks, {to} target marks")]
    MarkCountMismatch {
        /// Number of source tokens.
        from: usize,
        /// Number of target tokens.
        to: usize,
    },
    /// A source mark token was empty.
    #[error("mark {index} is empty")]
    EmptyMark {
        /// Position of the empty token.
        index: usize,
    },
}

/// Reason carried by [`CodecError::MalformedByteSequence`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Error {
    /// A continuation byte appeared with no open multi-byte sequence.
    #[error("unexpected continuation byte")]
    UnexpectedContinuationByte,
    /// A lead or ASCII byte interrupted an open multi-byte sequence.
    #[error("continuation byte expected")]
    ContinuationByteExpected,
    /// The input ended inside a multi-byte sequence.
    #[error("unexpected end of bytes")]
    UnexpectedEndOfBytes,
    /// A byte of `0xF8` or above.
    #[error("invalid byte")]
    InvalidByte,
    /// A sequence longer than its value needs (RFC 3629 forbids these).
    #[error("overlong encoding")]
    OverlongEncoding,
}

impl CodecError {
    pub(crate) fn invalid_code_point(index: usize, value: CodePoint) -> Self {
        log::debug!("rejecting code point {value:#X} at index {index}");
        Self::InvalidCodePoint { index, value }
    }

    pub(crate) fn malformed(index: usize, reason: Utf8Error) -> Self {
        log::debug!("malformed UTF-8 at byte {index}: {reason}");
        Self::MalformedByteSequence { index, reason }
    }
}

/// Alias of <code>[Result](core::result::Result)\<T, [CodecError]></code>.
pub type Result<T> = core::result::Result<T, CodecError>;
