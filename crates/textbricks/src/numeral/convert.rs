use alloc::string::String;

use super::{NumeralSystem, decode_number, encode_number};
use crate::options::ConvertOptions;

/// Rewrites every whitespace-delimited numeral in `text` from `from` to `to`.
///
/// Whitespace is copied verbatim. A token that does not decode in `from`, or
/// whose value cannot be written in `to` (a Roman numeral out of range), is
/// kept as-is unless [`ConvertOptions::drop_unmatched`] is set.
#[must_use]
pub fn convert_numerals(
    text: &str,
    from: NumeralSystem,
    to: NumeralSystem,
    options: ConvertOptions,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let split = rest
            .find(|c| options.is_separator(c))
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(split);
        if !token.is_empty() {
            match decode_number(from, token).and_then(|value| encode_number(to, &value)) {
                Some(converted) => out.push_str(&converted),
                None => {
                    log::trace!("leaving {from} token {token:?} unconverted");
                    if !options.drop_unmatched {
                        out.push_str(token);
                    }
                }
            }
        }
        let gap = tail
            .find(|c| !options.is_separator(c))
            .unwrap_or(tail.len());
        out.push_str(&tail[..gap]);
        rest = &tail[gap..];
    }
    out
}
