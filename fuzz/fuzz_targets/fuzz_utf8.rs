#![no_main]

use libfuzzer_sys::fuzz_target;
use textbricks::{
    Chain, bytes_from_code_points, code_points_from_bytes, code_points_from_string,
    string_from_code_points,
};

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode to the same bytes.
    if let Ok(points) = code_points_from_bytes(data) {
        let bytes = bytes_from_code_points(&points).expect("decoded points are valid");
        assert_eq!(bytes, data);
        assert_eq!(Chain::from_bytes(data).expect("decoded once").code_points(), points);
    }

    // Reinterpret the input as code units; decoding is lenient and must never
    // produce an invalid code point.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let points = code_points_from_string(&units);
    let back = string_from_code_points(&points).expect("decoded points are valid");
    assert_eq!(back, units);
});
