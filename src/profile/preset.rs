use crate::{
    process::Process,
    profile::Profile,
    stage::{
        convert_numbers::{EN_TO_FA_NUMBERS, FA_TO_EN_NUMBERS},
        decode_url::DecodeUrl,
        half_space::HalfSpace,
        transliterate::{EN_TO_FA_CHARACTERS, FA_TO_EN_CHARACTERS},
    },
};

/// Latin digits and letters → Persian glyphs.
pub fn persianize() -> Profile<impl Process> {
    Profile::builder("persianize")
        .add_stage(EN_TO_FA_NUMBERS)
        .add_stage(EN_TO_FA_CHARACTERS)
        .build()
}

/// Persian digits and letters → ASCII. Useful for slugs and ASCII-only systems.
pub fn romanize() -> Profile<impl Process> {
    Profile::builder("romanize")
        .add_stage(FA_TO_EN_NUMBERS)
        .add_stage(FA_TO_EN_CHARACTERS)
        .build()
}

/// Only the `می` / suffix half-space rewrites.
pub fn half_space() -> Profile<impl Process> {
    Profile::builder("half_space").add_stage(HalfSpace).build()
}

/// Turn a percent-encoded Persian URL path into readable, correctly joined text.
pub fn url_to_persian() -> Profile<impl Process> {
    Profile::builder("url_to_persian")
        .add_stage(DecodeUrl)
        .add_stage(HalfSpace)
        .build()
}

/// Canonical key for search indexes: decoded, ASCII digits, half-spaces joined.
pub fn search_key() -> Profile<impl Process> {
    Profile::builder("search_key")
        .add_stage(DecodeUrl)
        .add_stage(FA_TO_EN_NUMBERS)
        .add_stage(HalfSpace)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use std::borrow::Cow;

    fn run<P: Process>(profile: Profile<P>, input: &str) -> String {
        profile
            .run(Cow::Borrowed(input), &Context::default())
            .unwrap()
            .into_owned()
    }

    #[test]
    fn persianize_digits_and_letters() {
        assert_eq!(run(persianize(), "salam 123"), "سالام ۱۲۳");
    }

    #[test]
    fn romanize_digits_and_letters() {
        assert_eq!(run(romanize(), "تهران ۱۴۰۳"), "thran 1403");
    }

    #[test]
    fn half_space_preset() {
        assert_eq!(run(half_space(), "من می روم"), "من می\u{200C}روم");
    }

    #[test]
    fn url_to_persian_decodes_then_joins() {
        // "من می روم" percent-encoded
        let url = "%D9%85%D9%86%20%D9%85%DB%8C%20%D8%B1%D9%88%D9%85";
        assert_eq!(run(url_to_persian(), url), "من می\u{200C}روم");
    }

    #[test]
    fn search_key_normalizes_digits() {
        let url = "%D8%B3%D8%A7%D9%84%20%DB%B1%DB%B4%DB%B0%DB%B3";
        assert_eq!(run(search_key(), url), "سال 1403");
    }

    #[test]
    fn profile_names() {
        assert_eq!(persianize().name(), "persianize");
        assert_eq!(romanize().name(), "romanize");
        assert_eq!(search_key().name(), "search_key");
    }
}
