#[cfg(test)]
mod integration_tests {

    use crate::{
        Context, DecodeUrl, EN_TO_FA_CHARACTERS, EN_TO_FA_NUMBERS, FA_TO_EN_CHARACTERS,
        FA_TO_EN_NUMBERS, HalfSpace, Parsi, ParsiError, Profile, StageError, UrlDecoding,
        profile::preset,
    };
    use std::borrow::Cow;

    #[test]
    fn url_slug_pipeline() {
        let parsi = Parsi::builder()
            .add_stage(DecodeUrl)
            .add_stage(FA_TO_EN_NUMBERS)
            .add_stage(FA_TO_EN_CHARACTERS)
            .build();

        // "تهران ۱۴۰۳"
        let input = "%D8%AA%D9%87%D8%B1%D8%A7%D9%86%20%DB%B1%DB%B4%DB%B0%DB%B3";
        assert_eq!(parsi.normalize(input).unwrap(), "thran 1403");
    }

    #[test]
    fn persian_keyboard_pipeline() {
        let parsi = Parsi::builder()
            .add_stage(EN_TO_FA_NUMBERS)
            .add_stage(EN_TO_FA_CHARACTERS)
            .add_stage(HalfSpace)
            .build();
        assert_eq!(
            parsi.normalize("man mi ravam 2").unwrap(),
            "مان می\u{200C}راوام ۲"
        );
    }

    #[test]
    fn custom_joiner_reaches_half_space_stage() {
        let parsi = Parsi::builder().joiner('\u{200D}').add_stage(HalfSpace).build();
        assert_eq!(parsi.context().joiner, '\u{200D}');
        assert_eq!(parsi.normalize("من می روم").unwrap(), "من می\u{200D}روم");
    }

    #[test]
    fn strict_url_errors_surface_through_facade() {
        let parsi = Parsi::builder().add_stage(DecodeUrl).build();
        let err = parsi.normalize("%FF%FE").unwrap_err();
        assert!(matches!(
            err,
            ParsiError::Stage(StageError::InvalidUtf8 { stage: "decode_url", .. })
        ));
    }

    #[test]
    fn lossy_url_policy() {
        let parsi = Parsi::builder()
            .url_decoding(UrlDecoding::Lossy)
            .add_stage(DecodeUrl)
            .build();
        assert_eq!(parsi.normalize("%FFok").unwrap(), "\u{FFFD}ok");
    }

    #[test]
    fn zero_copy_through_facade() {
        let parsi = Parsi::builder()
            .add_stage(FA_TO_EN_NUMBERS)
            .add_stage(HalfSpace)
            .build();
        let input = "nothing to do here";
        let out = parsi.normalize(input).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn facade_runs_profiles_with_its_context() {
        let parsi = Parsi::builder().joiner('_').build();
        let out = parsi
            .normalize_with_profile(&preset::half_space(), "رفته ام")
            .unwrap();
        assert_eq!(out, "رفته_ام");
    }

    #[test]
    fn profile_errors_surface_through_facade() {
        let parsi = Parsi::builder().build();
        let profile = Profile::plugin_builder("decode").add_stage(DecodeUrl).build();
        let err = parsi.normalize_with_profile(&profile, "%C0").unwrap_err();
        assert!(matches!(err, ParsiError::Profile(_)));
    }

    #[test]
    fn stages_are_shareable_across_threads() {
        let parsi = std::sync::Arc::new(
            Parsi::builder()
                .add_stage(FA_TO_EN_NUMBERS)
                .add_stage(HalfSpace)
                .build(),
        );
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parsi = parsi.clone();
                std::thread::spawn(move || {
                    let input = format!("بار {} رفته ام", crate::convert_en_numbers(i));
                    parsi.normalize(input).unwrap().into_owned()
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("بار {i} رفته\u{200C}ام"));
        }
    }

    #[test]
    fn context_default_is_what_facade_uses() {
        let parsi = Parsi::builder().build();
        assert_eq!(*parsi.context(), Context::default());
    }
}
