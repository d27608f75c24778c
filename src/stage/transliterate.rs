//! stage/transliterate.rs – **Script transliteration (lossy, by design)**
//! * Latin → Persian: `salam` → `سالام`; `c`, `e`, `y` stay as they are
//! * Persian → Latin: `چ` → `tsh`, `ظ` → `zzz`, `ع` → `` ` ``
//! * Many-to-one in both directions, so the two are NOT inverses
//! * Uppercase Latin, digits and punctuation (except `?` / `؟`) pass through
//! * Zero-copy when nothing would change
use crate::{
    context::Context,
    stage::{
        CharMapper, Stage, StageError,
        substitute::{SubstituteIter, map_one, needs_substitution, substitute},
    },
    table::{Direction, MappingTable, data},
};
use std::borrow::Cow;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transliterate(pub Direction);

/// Latin letters and `?` → Persian glyphs.
pub const EN_TO_FA_CHARACTERS: Transliterate = Transliterate(Direction::EnToFa);
/// Persian letters and `؟` → Latin transliteration.
pub const FA_TO_EN_CHARACTERS: Transliterate = Transliterate(Direction::FaToEn);

impl Transliterate {
    #[inline(always)]
    fn table(&self) -> &'static MappingTable {
        data::characters(self.0)
    }
}

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        self.table().name
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // Persian source glyphs are never ASCII.
        if self.0 == Direction::FaToEn && text.is_ascii() {
            return Ok(false);
        }
        Ok(needs_substitution(self.table(), text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(substitute(self.table(), text))
    }

    /// Only enable CharMapper if every transliteration is 1→1
    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        if self.table().is_one_to_one() {
            Some(self)
        } else {
            None
        }
    }
}

impl CharMapper for Transliterate {
    #[inline(always)]
    fn map(&self, c: char, _ctx: &Context) -> Option<char> {
        Some(map_one(self.table(), c))
    }

    fn bind<'a>(&self, text: &'a str, _ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        Box::new(SubstituteIter::new(text, self.table()))
    }
}
