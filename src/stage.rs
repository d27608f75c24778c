//! Core conversion stage abstraction.
//!
//! Every conversion in this crate is a [`Stage`]: a pure `Cow<str> → Cow<str>`
//! step that hands the input back untouched (`Cow::Borrowed`, same pointer)
//! whenever it has nothing to change.
//!
//! Stages whose work is a pure 1→1 character mapping additionally expose a
//! [`CharMapper`] through [`Stage::as_char_mapper`]. Processes use it to run
//! the stage as a plain `chars()` adapter instead of the general `apply` path.
//! Stages that expand characters (`چ` → `"tsh"`) or look at context (the
//! half-space rules) return `None` and always go through `apply`.

pub mod convert_numbers;
pub mod decode_url;
pub mod half_space;
pub mod substitute;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;
use std::iter::FusedIterator;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("conversion failed at stage `{0}`: {1}")]
    Failed(&'static str, String),

    #[error("stage `{stage}` produced bytes that are not valid UTF-8: {source}")]
    InvalidUtf8 {
        stage: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// A single conversion step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` means `apply` would return the
    /// text unchanged, so the whole stage can be skipped.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, whether or
    /// not `needs_apply` was consulted first.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Return `self` as a [`CharMapper`] **iff** the stage is a pure 1→1
    /// character mapping under `ctx`.
    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        None
    }
}

/// A stage that maps one `char` to exactly one `char`.
pub trait CharMapper: Send + Sync {
    /// Map a single Unicode scalar value.
    /// Return `None` if the character should be **removed**.
    fn map(&self, c: char, ctx: &Context) -> Option<char>;

    /// Bind the mapper to a concrete `&str`.
    fn bind<'a>(&self, text: &'a str, ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a>;
}
