//! Lossless conversions between the representations text takes inside a
//! converter toolkit: 16-bit code-unit strings, code point sequences, UTF-8
//! bytes and numeral strings of arbitrary magnitude, plus the token
//! substitution used to re-skin symbol alphabets.
//!
//! Every function is pure and reentrant. Malformed input (an out-of-range code
//! point, an unknown encoding, broken UTF-8) is reported as a [`CodecError`];
//! a numeral that simply does not parse yields `None`.
//!
//! ```rust
//! use textbricks::{NumeralSystem, bytes_from_code_points, code_points_from_bytes, decode_number, encode_number};
//!
//! let bytes = bytes_from_code_points(&[0x48, 0x1F600]).unwrap();
//! assert_eq!(bytes, [0x48, 0xF0, 0x9F, 0x98, 0x80]);
//! assert_eq!(code_points_from_bytes(&bytes).unwrap(), [0x48, 0x1F600]);
//!
//! let n = decode_number(NumeralSystem::Decimal, "1994").unwrap();
//! assert_eq!(encode_number(NumeralSystem::Roman, &n).as_deref(), Some("MCMXCIV"));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chain;
mod code_point;
mod error;
mod marks;
pub mod numeral;
mod options;
mod utf8;


pub use chain::Chain;
pub use code_point::{
    CodePoint, CodeUnitDecoder, MAX_CODE_POINT, code_points_from_str, code_points_from_string,
    decode_code_units, is_valid_code_point, string_from_code_points, string_from_str,
    validate_code_point,
};
pub use error::{CodecError, Result, Utf8Error};
pub use marks::{MarkTable, translate};
pub use numeral::{
    MAX_ROMAN, MAX_SAFE_INTEGER, MIN_ROMAN, Magnitude, NumeralSystem, UnknownNumeralSystem,
    convert_numerals, decode_number, decode_safe_integer, encode_number,
};
pub use options::ConvertOptions;
pub use utf8::{
    TextEncoding, Utf8Decoder, bytes_from_code_points, bytes_from_code_points_with,
    code_points_from_bytes, code_points_from_bytes_with, decode_utf8, encoded_len,
};
