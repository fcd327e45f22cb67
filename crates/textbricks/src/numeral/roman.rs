//! Roman numerals using the additive/subtractive thirteen-symbol table.

use alloc::string::String;

/// Symbols in decreasing value, which is also their matching priority.
const SYMBOLS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Smallest encodable value.
pub const MIN_ROMAN: u32 = 1;
/// Largest encodable value.
pub const MAX_ROMAN: u32 = 3999;

/// Decodes a Roman numeral, ignoring ASCII case.
///
/// Scans left to right, at each position taking the first symbol (in table
/// order) whose text matches, among symbols ranked no higher than the
/// previous match. Returns `None` when some position has no acceptable match
/// or the input is empty.
pub(crate) fn decode(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    let digits = digits.to_ascii_uppercase();
    let mut rest = digits.as_str();
    let mut rank = 0;
    let mut total = 0u64;
    while !rest.is_empty() {
        let offset = SYMBOLS[rank..]
            .iter()
            .position(|(text, _)| rest.starts_with(text))?;
        rank += offset;
        let (text, value) = SYMBOLS[rank];
        total += u64::from(value);
        rest = &rest[text.len()..];
    }
    Some(total)
}

/// Encodes `value` as an uppercase Roman numeral, or `None` outside
/// [`MIN_ROMAN`]`..=`[`MAX_ROMAN`].
pub(crate) fn encode(mut value: u32) -> Option<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return None;
    }
    let mut out = String::new();
    for &(text, symbol_value) in &SYMBOLS {
        while value >= symbol_value {
            out.push_str(text);
            value -= symbol_value;
        }
    }
    Some(out)
}
