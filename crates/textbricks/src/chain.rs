//! [`Chain`]: a text value available as code points, code units or bytes.

use alloc::{string::String, vec::Vec};
use core::{cell::OnceCell, fmt};

use crate::{
    CodePoint,
    code_point::{self, push_code_units, validate_all},
    error::Result,
    utf8::{self, push_utf8},
};

/// Immutable text holding a validated code point sequence.
///
/// The code-unit and UTF-8 forms are built on first request and cached, so a
/// chain handed between converters is never re-encoded twice.
///
/// Two chains are equal when their code points are equal.
///
/// # Examples
///
/// ```rust
/// use textbricks::Chain;
///
/// let chain = Chain::from("hé");
/// assert_eq!(chain.code_points(), &[0x68, 0xE9]);
/// assert_eq!(chain.bytes(), &[0x68, 0xC3, 0xA9]);
/// assert_eq!(chain.code_units(), &[0x68, 0xE9]);
/// ```
#[derive(Clone, Default)]
pub struct Chain {
    points: Vec<CodePoint>,
    units: OnceCell<Vec<u16>>,
    bytes: OnceCell<Vec<u8>>,
}

impl Chain {
    fn with_points(points: Vec<CodePoint>) -> Self {
        Self {
            points,
            units: OnceCell::new(),
            bytes: OnceCell::new(),
        }
    }

    /// Wraps a code point sequence.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidCodePoint`](crate::CodecError::InvalidCodePoint)
    /// for the first value above `0x10FFFF`.
    pub fn from_code_points(points: Vec<CodePoint>) -> Result<Self> {
        validate_all(&points)?;
        Ok(Self::with_points(points))
    }

    /// Decodes a code-unit string; unmatched surrogates are kept.
    #[must_use]
    pub fn from_code_units(units: &[u16]) -> Self {
        let chain = Self::with_points(code_point::code_points_from_string(units));
        // The units decode losslessly, so they are the cached form as-is.
        let _ = chain.units.set(units.to_vec());
        chain
    }

    /// Decodes UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// The errors of [`code_points_from_bytes`](crate::code_points_from_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let chain = Self::with_points(utf8::code_points_from_bytes(bytes)?);
        let _ = chain.bytes.set(bytes.to_vec());
        Ok(chain)
    }

    /// The code points.
    #[must_use]
    pub fn code_points(&self) -> &[CodePoint] {
        &self.points
    }

    /// The code-unit (UTF-16) form.
    #[must_use]
    pub fn code_units(&self) -> &[u16] {
        self.units.get_or_init(|| {
            let mut units = Vec::with_capacity(self.points.len());
            for &point in &self.points {
                push_code_units(&mut units, point);
            }
            units
        })
    }

    /// The UTF-8 form.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.bytes.get_or_init(|| {
            let mut bytes = Vec::with_capacity(self.points.len());
            for &point in &self.points {
                push_utf8(&mut bytes, point);
            }
            bytes
        })
    }

    /// Number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the chain holds no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The text as a Rust string, or `None` if it contains a surrogate code
    /// point.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        self.points.iter().map(|&p| char::from_u32(p)).collect()
    }
}

impl From<&str> for Chain {
    fn from(s: &str) -> Self {
        let chain = Self::with_points(code_point::code_points_from_str(s));
        let _ = chain.bytes.set(s.as_bytes().to_vec());
        chain
    }
}

impl From<String> for Chain {
    fn from(s: String) -> Self {
        let chain = Self::with_points(code_point::code_points_from_str(&s));
        let _ = chain.bytes.set(s.into_bytes());
        chain
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Eq for Chain {}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Chain")
            .field(&bstr::BStr::new(self.bytes()))
            .finish()
    }
}
