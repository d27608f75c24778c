//! stage/convert_numbers.rs
//! Latin digits ↔ Persian digits (`0`–`9` ↔ `۰`–`۹`)
//! Pure glyph substitution: no grouping, no locale, no rounding
//! Zero-copy when the text has no digit of the source script
//! CharMapper path: both digit tables are 1→1
use crate::{
    context::Context,
    stage::{
        CharMapper, Stage, StageError,
        substitute::{SubstituteIter, map_one, needs_substitution, substitute},
    },
    table::{Direction, MappingTable, data},
    unicode::contains_digit,
};
use std::borrow::Cow;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertNumbers(pub Direction);

/// `0123` → `۰۱۲۳`
pub const EN_TO_FA_NUMBERS: ConvertNumbers = ConvertNumbers(Direction::EnToFa);
/// `۰۱۲۳` → `0123`
pub const FA_TO_EN_NUMBERS: ConvertNumbers = ConvertNumbers(Direction::FaToEn);

impl ConvertNumbers {
    #[inline(always)]
    fn table(&self) -> &'static MappingTable {
        data::numbers(self.0)
    }
}

impl Stage for ConvertNumbers {
    fn name(&self) -> &'static str {
        self.table().name
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if !contains_digit(text) {
            return Ok(false);
        }
        Ok(needs_substitution(self.table(), text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(substitute(self.table(), text))
    }

    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for ConvertNumbers {
    #[inline(always)]
    fn map(&self, c: char, _ctx: &Context) -> Option<char> {
        Some(map_one(self.table(), c))
    }

    fn bind<'a>(&self, text: &'a str, _ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        Box::new(SubstituteIter::new(text, self.table()))
    }
}
