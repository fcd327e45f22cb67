//! Numeral systems: positional bases 2, 8, 10 and 16 of arbitrary magnitude,
//! and Roman numerals.
//!
//! Parse failures are routine when scanning free-form text for numbers, so
//! [`decode_number`] and [`encode_number`] report them as `None` rather than as
//! errors.

mod convert;
mod roman;

use alloc::string::String;
use core::{fmt, str::FromStr};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

pub use convert::convert_numerals;
pub use roman::{MAX_ROMAN, MIN_ROMAN};

use crate::error::{CodecError, Result};

/// A non-negative integer of unbounded size.
pub type Magnitude = BigUint;

/// Largest integer a fixed-width caller may rely on, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A numeral system selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "lowercase"))]
pub enum NumeralSystem {
    /// Base 2, digits `[01]`.
    Binary,
    /// Base 8, digits `[0-7]`.
    Octal,
    /// Base 10, digits `[0-9]`.
    Decimal,
    /// Base 16, digits `[0-9a-fA-F]`, written lowercase.
    Hexadecimal,
    /// Roman numerals in `1..=3999`, written uppercase.
    Roman,
}

impl NumeralSystem {
    /// Every supported system, positional ones first.
    pub const ALL: [Self; 5] = [
        Self::Binary,
        Self::Octal,
        Self::Decimal,
        Self::Hexadecimal,
        Self::Roman,
    ];

    /// The radix of a positional system, `None` for Roman numerals.
    #[must_use]
    pub const fn radix(self) -> Option<u32> {
        match self {
            Self::Binary => Some(2),
            Self::Octal => Some(8),
            Self::Decimal => Some(10),
            Self::Hexadecimal => Some(16),
            Self::Roman => None,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Roman => "roman",
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`NumeralSystem`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown numeral system '{0}'")]
pub struct UnknownNumeralSystem(pub String);

impl FromStr for NumeralSystem {
    type Err = UnknownNumeralSystem;

    fn from_str(name: &str) -> core::result::Result<Self, Self::Err> {
        let lower = name.to_ascii_lowercase();
        Ok(match lower.as_str() {
            "binary" | "bin" | "2" => Self::Binary,
            "octal" | "oct" | "8" => Self::Octal,
            "decimal" | "dec" | "10" => Self::Decimal,
            "hexadecimal" | "hex" | "16" => Self::Hexadecimal,
            "roman" => Self::Roman,
            _ => return Err(UnknownNumeralSystem(String::from(name))),
        })
    }
}

/// Parses `digits` in `system`.
///
/// Positional digits are matched case-insensitively and may carry leading
/// zeros; signs, separators, prefixes and whitespace are rejected. Returns
/// `None` for an empty string or any character outside the system's digits.
#[must_use]
pub fn decode_number(system: NumeralSystem, digits: &str) -> Option<Magnitude> {
    match system.radix() {
        Some(radix) => {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            BigUint::parse_bytes(digits.as_bytes(), radix)
        }
        None => roman::decode(digits).map(Magnitude::from),
    }
}

/// Formats `value` in `system`.
///
/// Hexadecimal is written lowercase and positional output has no leading
/// zeros. Returns `None` for Roman numerals outside
/// [`MIN_ROMAN`]`..=`[`MAX_ROMAN`].
#[must_use]
pub fn encode_number(system: NumeralSystem, value: &Magnitude) -> Option<String> {
    match system.radix() {
        Some(radix) => Some(value.to_str_radix(radix)),
        None => value.to_u32().and_then(roman::encode),
    }
}

/// Parses `digits` in `system` into a fixed-width integer.
///
/// This is the counterpart of [`decode_number`] for callers that cannot hold
/// arbitrary magnitudes.
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if the value exceeds [`MAX_SAFE_INTEGER`];
/// the value is never truncated.
pub fn decode_safe_integer(system: NumeralSystem, digits: &str) -> Result<Option<u64>> {
    let Some(value) = decode_number(system, digits) else {
        return Ok(None);
    };
    match value.to_u64() {
        Some(n) if n <= MAX_SAFE_INTEGER => Ok(Some(n)),
        _ => Err(CodecError::IntegerOverflow),
    }
}

/// Strips leading zeros and lowercases, producing the form [`encode_number`]
/// writes for a positional numeral.
#[cfg(test)]
pub(crate) fn normalize_positional(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        String::from("0")
    } else {
        trimmed.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(NumeralSystem::Binary, "101010", 42)]
    #[case(NumeralSystem::Octal, "755", 493)]
    #[case(NumeralSystem::Decimal, "0042", 42)]
    #[case(NumeralSystem::Hexadecimal, "FF", 255)]
    #[case(NumeralSystem::Hexadecimal, "dEaD", 0xDEAD)]
    #[case(NumeralSystem::Roman, "xlii", 42)]
    fn decodes_small_values(#[case] system: NumeralSystem, #[case] digits: &str, #[case] n: u64) {
        assert_eq!(decode_number(system, digits), Some(Magnitude::from(n)));
    }

    #[rstest]
    #[case::binary_two(NumeralSystem::Binary, "102")]
    #[case::octal_eight(NumeralSystem::Octal, "78")]
    #[case::decimal_letter(NumeralSystem::Decimal, "12a")]
    #[case::hex_g(NumeralSystem::Hexadecimal, "fg")]
    #[case::sign(NumeralSystem::Decimal, "+1")]
    #[case::underscore(NumeralSystem::Decimal, "1_000")]
    #[case::prefix(NumeralSystem::Hexadecimal, "0x10")]
    #[case::space(NumeralSystem::Decimal, " 1")]
    #[case::empty(NumeralSystem::Decimal, "")]
    #[case::fullwidth(NumeralSystem::Decimal, "１")]
    fn rejects_foreign_digits(#[case] system: NumeralSystem, #[case] digits: &str) {
        assert_eq!(decode_number(system, digits), None);
    }

    #[test]
    fn magnitudes_beyond_machine_words() {
        let digits = "123456789012345678901234567890123456789012345678901234567890";
        let value = decode_number(NumeralSystem::Decimal, digits).unwrap();
        assert_eq!(
            encode_number(NumeralSystem::Decimal, &value).as_deref(),
            Some(digits)
        );
        let hex = encode_number(NumeralSystem::Hexadecimal, &value).unwrap();
        assert_eq!(decode_number(NumeralSystem::Hexadecimal, &hex), Some(value));
    }

    #[test]
    fn encodes_lowercase_without_leading_zeros() {
        let value = decode_number(NumeralSystem::Hexadecimal, "00ABCDEF").unwrap();
        assert_eq!(
            encode_number(NumeralSystem::Hexadecimal, &value).as_deref(),
            Some("abcdef")
        );
        assert_eq!(
            encode_number(NumeralSystem::Binary, &Magnitude::from(0u32)).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn roman_encode_bounds() {
        let encode = |n: u32| encode_number(NumeralSystem::Roman, &Magnitude::from(n));
        assert_eq!(encode(0), None);
        assert_eq!(encode(1).as_deref(), Some("I"));
        assert_eq!(encode(3999).as_deref(), Some("MMMCMXCIX"));
        assert_eq!(encode(4000), None);
        let huge = decode_number(NumeralSystem::Decimal, "99999999999999999999").unwrap();
        assert_eq!(encode_number(NumeralSystem::Roman, &huge), None);
    }

    #[test]
    fn safe_integer_limit() {
        assert_eq!(
            decode_safe_integer(NumeralSystem::Decimal, "9007199254740991"),
            Ok(Some(MAX_SAFE_INTEGER))
        );
        assert_eq!(
            decode_safe_integer(NumeralSystem::Decimal, "9007199254740992"),
            Err(CodecError::IntegerOverflow)
        );
        assert_eq!(
            decode_safe_integer(NumeralSystem::Hexadecimal, "ffffffffffffffffffff"),
            Err(CodecError::IntegerOverflow)
        );
        assert_eq!(decode_safe_integer(NumeralSystem::Binary, "12"), Ok(None));
    }

    #[test]
    fn system_names() {
        for system in NumeralSystem::ALL {
            assert_eq!(system.name().parse::<NumeralSystem>(), Ok(system));
            assert_eq!(system.to_string(), system.name());
        }
        assert_eq!("16".parse::<NumeralSystem>(), Ok(NumeralSystem::Hexadecimal));
        assert_eq!("HEX".parse::<NumeralSystem>(), Ok(NumeralSystem::Hexadecimal));
        assert_eq!(
            "base64".parse::<NumeralSystem>(),
            Err(UnknownNumeralSystem("base64".into()))
        );
    }

    #[test]
    fn settings_serialize_by_name() {
        let json = serde_json::to_string(&NumeralSystem::Hexadecimal).unwrap();
        assert_eq!(json, "\"hexadecimal\"");
        let back: NumeralSystem = serde_json::from_str("\"roman\"").unwrap();
        assert_eq!(back, NumeralSystem::Roman);
    }

    #[rstest]
    #[case("000", "0")]
    #[case("0", "0")]
    #[case("00Ab", "ab")]
    #[case("10", "10")]
    fn normalization(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_positional(input), expected);
    }
}
