// src/context.rs
// Runtime configuration handed to every stage. Tiny and Copy so it can be
// passed by reference through hot loops without a second thought.

use crate::unicode::ZWNJ;

/// What to do when percent-decoding yields bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UrlDecoding {
    /// Report [`StageError::InvalidUtf8`](crate::stage::StageError::InvalidUtf8).
    #[default]
    Strict,
    /// Replace each invalid sequence with U+FFFD.
    Lossy,
}

/// Runtime context passed to every conversion stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Character emitted by the half-space rules in place of a space.
    pub joiner: char,
    pub url_decoding: UrlDecoding,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            joiner: ZWNJ,
            url_decoding: UrlDecoding::Strict,
        }
    }

    #[inline(always)]
    pub const fn with_joiner(mut self, joiner: char) -> Self {
        self.joiner = joiner;
        self
    }

    #[inline(always)]
    pub const fn with_url_decoding(mut self, url_decoding: UrlDecoding) -> Self {
        self.url_decoding = url_decoding;
        self
    }
}
