#![expect(missing_docs)]

use core::fmt::Write;

use textbricks::{
    ConvertOptions, Magnitude, NumeralSystem, convert_numerals, decode_number, encode_number,
};

fn render_row(n: u64) -> String {
    let value = Magnitude::from(n);
    let mut out = format!("{n}:");
    for system in NumeralSystem::ALL {
        let written = encode_number(system, &value).unwrap_or_else(|| "-".to_owned());
        write!(out, " {system}={written}").unwrap();
    }
    out
}

#[test]
fn snapshot_systems_table() {
    let rows: Vec<String> = [0, 1, 68, 83, 649, 798, 891, 3999, 4000]
        .into_iter()
        .map(render_row)
        .collect();

    insta::assert_snapshot!(rows.join("\n"), @r"
    0: binary=0 octal=0 decimal=0 hexadecimal=0 roman=-
    1: binary=1 octal=1 decimal=1 hexadecimal=1 roman=I
    68: binary=1000100 octal=104 decimal=68 hexadecimal=44 roman=LXVIII
    83: binary=1010011 octal=123 decimal=83 hexadecimal=53 roman=LXXXIII
    649: binary=1010001001 octal=1211 decimal=649 hexadecimal=289 roman=DCXLIX
    798: binary=1100011110 octal=1436 decimal=798 hexadecimal=31e roman=DCCXCVIII
    891: binary=1101111011 octal=1573 decimal=891 hexadecimal=37b roman=DCCCXCI
    3999: binary=111110011111 octal=7637 decimal=3999 hexadecimal=f9f roman=MMMCMXCIX
    4000: binary=111110100000 octal=7640 decimal=4000 hexadecimal=fa0 roman=-
    ");
}

#[test]
fn snapshot_large_magnitude() {
    let value = decode_number(NumeralSystem::Hexadecimal, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF").unwrap();
    insta::assert_snapshot!(
        encode_number(NumeralSystem::Decimal, &value).unwrap(),
        @"340282366920938463463374607431768211455"
    );
    let value = decode_number(NumeralSystem::Decimal, "18446744073709551616").unwrap();
    insta::assert_snapshot!(
        encode_number(NumeralSystem::Octal, &value).unwrap(),
        @"2000000000000000000000"
    );
}

#[test]
fn snapshot_text_conversion() {
    let text = "MCMXCIV   mmxxiv\nIIII  IM  MMMMCM";
    insta::assert_snapshot!(
        convert_numerals(text, NumeralSystem::Roman, NumeralSystem::Decimal, ConvertOptions::default()),
        @r"
    1994   2024
    4  IM  4900
    "
    );
}
