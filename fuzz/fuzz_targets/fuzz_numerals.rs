#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textbricks::{ConvertOptions, NumeralSystem, convert_numerals, decode_number, encode_number};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    from: u8,
    to: u8,
    drop_unmatched: bool,
    text: &'a str,
}

fn system(n: u8) -> NumeralSystem {
    NumeralSystem::ALL[usize::from(n) % NumeralSystem::ALL.len()]
}

fuzz_target!(|input: Input<'_>| {
    let (from, to) = (system(input.from), system(input.to));

    if let Some(value) = decode_number(from, input.text) {
        if let Some(written) = encode_number(to, &value) {
            assert_eq!(decode_number(to, &written), Some(value));
        }
    }

    let options = ConvertOptions {
        drop_unmatched: input.drop_unmatched,
        ..ConvertOptions::default()
    };
    let _ = convert_numerals(input.text, from, to, options);
});
