//! stage/half_space.rs – **Persian half-space (ZWNJ) normalization**
//!
//! Persian orthography joins the verbal prefix `می` and a handful of
//! pronominal/verbal suffixes to their word with a zero-width non-joiner
//! instead of a full space. This stage rewrites exactly two contexts:
//!
//! | Rule          | Shape                                         | Example                    |
//! |---------------|-----------------------------------------------|----------------------------|
//! | `mi_prefix`   | `\s` `می` `\s+` Persian run                   | `من می روم` → `من می‌روم`   |
//! | `de_yii`      | Persian run `\s+` one of `ای ایی اند ایم اید ام` | `رفته ام` → `رفته‌ام`       |
//!
//! The rules run in that order, the second over the output of the first.
//! Each rule keeps its capture groups 2 and 4 and drops group 3 (the
//! whitespace), emitting [`Context::joiner`] in its place. Matching is the
//! regex engine's leftmost-first, non-overlapping scan; all matches of a rule
//! are rewritten in a single pass.
//!
//! "Whitespace" here is Unicode `White_Space` plus the ASCII information
//! separators U+001C–U+001F, the set `\s` covers in Python's `re`. The
//! `regex` crate's `\s` leaves those four out, so both patterns spell the
//! class as `[\s\x{1C}-\x{1F}]`.
//!
//! The suffix alternatives are not anchored to a word end, so `ام` also
//! matches the start of `امروز`. The alternation is tried left to right, so
//! `ایی` is matched as `ای` and the trailing `ی` is copied through.
use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{ZWNJ, contains_persian},
};
use lazy_static::lazy_static;
use regex::{Captures, Regex, Replacer};
use std::borrow::Cow;

lazy_static! {
    static ref MI_PREFIX: Regex =
        Regex::new(r"(([\s\x{1C}-\x{1F}]\x{0645}\x{06CC})+([\s\x{1C}-\x{1F}])+([\x{0600}-\x{06EF}]{1,}){1,})").unwrap();
    static ref DE_YII_SUFFIX: Regex =
        Regex::new(r"(([\x{0600}-\x{06EF}]{1,})+([\s\x{1C}-\x{1F}])+(ای|ایی|اند|ایم|اید|ام){1})").unwrap();
}

/// One morphological rewrite: a pattern with four capture groups.
#[derive(Clone, Copy)]
pub struct HalfSpaceRule {
    pub name: &'static str,
    regex: &'static Regex,
}

impl std::fmt::Debug for HalfSpaceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HalfSpaceRule")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

impl HalfSpaceRule {
    #[inline]
    pub fn pattern(&self) -> &'static str {
        self.regex.as_str()
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Rewrite every match in `text`; zero-copy when nothing matches.
    pub fn rewrite<'a>(&self, text: Cow<'a, str>, joiner: char) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => self.regex.replace_all(s, JoinAffix(joiner)),
            Cow::Owned(s) => {
                let replaced = match self.regex.replace_all(&s, JoinAffix(joiner)) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(out) => Some(out),
                };
                Cow::Owned(replaced.unwrap_or(s))
            }
        }
    }
}

/// The two rules, in the order they must run.
pub fn rules() -> [HalfSpaceRule; 2] {
    [
        HalfSpaceRule {
            name: "mi_prefix",
            regex: &*MI_PREFIX,
        },
        HalfSpaceRule {
            name: "de_yii",
            regex: &*DE_YII_SUFFIX,
        },
    ]
}

/// Emits `$2 <joiner> $4`.
struct JoinAffix(char);

impl Replacer for JoinAffix {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        dst.push_str(caps.get(2).map_or("", |m| m.as_str()));
        dst.push(self.0);
        dst.push_str(caps.get(4).map_or("", |m| m.as_str()));
    }
}

/// Apply both rules in order with `joiner` as the half-space.
pub fn join_half_spaces<'a>(text: Cow<'a, str>, joiner: char) -> Cow<'a, str> {
    if !contains_persian(&text) {
        return text;
    }
    rules()
        .into_iter()
        .fold(text, |acc, rule| rule.rewrite(acc, joiner))
}

/// [`join_half_spaces`] with U+200C.
#[inline]
pub fn join_with_zwnj(text: &str) -> Cow<'_, str> {
    join_half_spaces(Cow::Borrowed(text), ZWNJ)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSpace;

impl Stage for HalfSpace {
    fn name(&self) -> &'static str {
        "half_space"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if !contains_persian(text) {
            return Ok(false);
        }
        Ok(rules().iter().any(|rule| rule.is_match(text)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(join_half_spaces(text, ctx.joiner))
    }
}
