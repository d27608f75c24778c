//! stage/decode_url.rs
//! Percent-decoding of URLs carrying Persian text (`%D8%A7` → `ا`)
//! UTF-8 is assumed; invalid sequences follow `Context::url_decoding`
//! Malformed escapes (`%zz`, a trailing `%`) are left verbatim
//! `+` is not a space here
//! Zero-copy when the text holds no `%XX` escape
use crate::{
    context::{Context, UrlDecoding},
    stage::{Stage, StageError},
};
use memchr::memchr_iter;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;
use tracing::warn;

/// Everything but ASCII alphanumerics and `_ . - ~ /` gets escaped.
const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeUrl;

/// `true` iff `text` contains at least one well-formed `%XX` escape.
#[inline]
pub fn has_percent_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr_iter(b'%', bytes).any(|i| {
        bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
    })
}

/// Strict UTF-8 decoding.
pub fn decode(text: &str) -> Result<Cow<'_, str>, std::str::Utf8Error> {
    if !has_percent_escape(text) {
        return Ok(Cow::Borrowed(text));
    }
    percent_decode_str(text).decode_utf8()
}

/// Decoding that replaces invalid UTF-8 with U+FFFD.
pub fn decode_lossy(text: &str) -> Cow<'_, str> {
    if !has_percent_escape(text) {
        return Cow::Borrowed(text);
    }
    percent_decode_str(text).decode_utf8_lossy()
}

/// Percent-encode `text` as UTF-8; the inverse of [`decode`].
pub fn encode(text: &str) -> String {
    utf8_percent_encode(text, URL_ENCODE_SET).to_string()
}

impl Stage for DecodeUrl {
    fn name(&self) -> &'static str {
        "decode_url"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(has_percent_escape(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !has_percent_escape(&text) {
            return Ok(text);
        }
        let decoded = match ctx.url_decoding {
            UrlDecoding::Strict => decode(&text)
                .map_err(|source| {
                    warn!(stage = self.name(), error = %source, "percent-decoded bytes are not valid UTF-8");
                    StageError::InvalidUtf8 {
                        stage: self.name(),
                        source,
                    }
                })?
                .into_owned(),
            UrlDecoding::Lossy => decode_lossy(&text).into_owned(),
        };
        Ok(Cow::Owned(decoded))
    }
}
