//! One-call conversions.
//!
//! Each function runs a single stage with the default [`Context`] and returns
//! a fresh `String`. The character and digit converters accept anything that
//! implements `Display`, so `convert_en_numbers(2024)` works as well as
//! `convert_en_numbers("2024")`.
use crate::{
    context::{Context, UrlDecoding},
    stage::{
        Stage, StageError,
        decode_url::{DecodeUrl, decode_lossy, encode},
        half_space::join_with_zwnj,
        substitute::substitute,
    },
    table::{Direction, MappingTable, data},
};
use std::borrow::Cow;
use std::fmt::Display;

#[inline]
fn convert(table: &MappingTable, input: impl Display) -> String {
    substitute(table, Cow::Owned(input.to_string())).into_owned()
}

/// Latin digits → Persian digits.
pub fn convert_en_numbers(input: impl Display) -> String {
    convert(data::numbers(Direction::EnToFa), input)
}

/// Latin letters and `?` → Persian glyphs.
pub fn convert_en_characters(input: impl Display) -> String {
    convert(data::characters(Direction::EnToFa), input)
}

/// Persian digits → Latin digits.
pub fn convert_fa_numbers(input: impl Display) -> String {
    convert(data::numbers(Direction::FaToEn), input)
}

/// Persian letters and `؟` → Latin transliteration.
pub fn convert_fa_characters(input: impl Display) -> String {
    convert(data::characters(Direction::FaToEn), input)
}

/// Replace the space after `می` and before the `ای`/`ام`/… suffixes with U+200C.
pub fn convert_fa_spaces(input: &str) -> String {
    join_with_zwnj(input).into_owned()
}

/// Percent-decode `input` as UTF-8. Invalid UTF-8 is an error.
pub fn decode_url(input: &str) -> Result<String, StageError> {
    let ctx = Context::new().with_url_decoding(UrlDecoding::Strict);
    DecodeUrl
        .apply(Cow::Borrowed(input), &ctx)
        .map(Cow::into_owned)
}

/// Percent-decode `input`, replacing invalid UTF-8 with U+FFFD.
pub fn decode_url_lossy(input: &str) -> String {
    decode_lossy(input).into_owned()
}

/// Percent-encode `input` as UTF-8 (ASCII alphanumerics and `_.-~/` are kept).
pub fn encode_url(input: &str) -> String {
    encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_is_stringified() {
        assert_eq!(convert_en_numbers(1403), "۱۴۰۳");
        assert_eq!(convert_en_numbers(-7i64), "-۷");
        assert_eq!(convert_fa_numbers(42u8), "42");
    }

    #[test]
    fn owned_and_borrowed_inputs() {
        let owned = String::from("salam");
        assert_eq!(convert_en_characters(&owned), "سالام");
        assert_eq!(convert_en_characters(owned), "سالام");
    }

    #[test]
    fn spaces() {
        assert_eq!(convert_fa_spaces("من می روم"), "من می\u{200C}روم");
        assert_eq!(convert_fa_spaces("hello"), "hello");
    }

    #[test]
    fn url_round_trip() {
        let s = "میدان آزادی ۱۲";
        assert_eq!(decode_url(&encode_url(s)).unwrap(), s);
    }

    #[test]
    fn url_errors_and_lossy() {
        assert!(decode_url("%E0%A4").is_err());
        assert_eq!(decode_url_lossy("%E0%A4x"), "\u{FFFD}x");
    }
}
