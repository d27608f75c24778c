use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    /// Every sample must be a fixed point after one `apply`.
    fn samples(&self) -> &'static [&'static str] {
        &["Hello World 123", "سلام دنیا ۱۲۳", " می ", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    fn should_pass_through(&self) -> &'static [&'static str] {
        &["", " ", "!@#", "\t\n"]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `char_mapper_equivalent_to_apply` → the `CharMapper` path, when offered, agrees with `apply()`
/// 3. `stage_is_idempotent` → applying twice yields same result as once
/// 4. `needs_apply_is_accurate` → correctly predicts whether `apply()` would change text
/// 5. `handles_empty_string` → `""` in, `""` out
/// 6. `no_panic_on_mixed_scripts` → returns `Ok` on pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::char_mapper_equivalent_to_apply($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

use crate::context::Context;
use std::borrow::Cow;

const MIXED_SCRIPTS: &str =
    "Hello 世界 русский سلام می روم ۱۲۳ 456 ؟? %D8%A7 رفته ام\u{200C} العربية";

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();

    for &input in stage.samples() {
        let mut text = Cow::Borrowed(input);

        // First pass – respect needs_apply
        if stage.needs_apply(&text, &ctx).unwrap() {
            let old_ptr = text.as_ref() as *const str;
            text = stage.apply(text, &ctx).unwrap();
            assert_ne!(old_ptr, text.as_ref() as *const str);
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass – must never allocate again
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text, &ctx).unwrap() {
            text = stage.apply(text, &ctx).unwrap();
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass (stage: {}, input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in stage.should_pass_through() {
        let original_ptr = pass_through as *const str;
        let text = stage.apply(Cow::Borrowed(pass_through), &ctx).unwrap();

        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            original_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample (stage: {}, input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in stage.should_transform() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text, &ctx).unwrap() {
            text = stage.apply(text, &ctx).unwrap();
        }
        assert_eq!(text.as_ref(), expected, "stage `{}`", stage.name());
    }
}

pub fn char_mapper_equivalent_to_apply<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let Some(mapper) = stage.as_char_mapper(&ctx) else {
        return;
    };
    for input in stage.samples().iter().copied().chain([MIXED_SCRIPTS]) {
        let via_apply = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        let via_mapper: String = mapper.bind(input, &ctx).collect();
        assert_eq!(
            via_apply.as_ref(),
            via_mapper,
            "CharMapper path ≠ apply() for stage `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    for &input in stage.samples() {
        let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        let twice = stage.apply(once.clone(), &ctx).unwrap();
        assert_eq!(
            once,
            twice,
            "apply() not idempotent for stage `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    for &sample in stage.samples() {
        check_accuracy(&stage, sample, &ctx);
    }
    for &(input, _) in stage.should_transform() {
        check_accuracy(&stage, input, &ctx);
    }
    for &clean in stage.should_pass_through() {
        check_accuracy(&stage, clean, &ctx);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    // Owned input so that stages which always allocate are not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    assert!(!stage.needs_apply("", &ctx).unwrap());
    let result = stage.apply(Cow::Borrowed(""), &ctx).unwrap();
    assert_eq!(result.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let result = stage.apply(Cow::Borrowed(MIXED_SCRIPTS), &ctx);
    assert!(
        result.is_ok(),
        "{}: failed on mixed-script input: {:?}",
        stage.name(),
        result.err()
    );
}
