//! stage/substitute.rs – **Table-driven single-scan substitution**
//! * One left-to-right pass over `chars()`; each char is looked up once
//! * Replacements are never re-scanned, so no double translation
//! * Zero-copy when no char in the text would change (self-maps included)
//! * CharMapper path only when every value in the table is exactly one char
use crate::{
    context::Context,
    stage::{CharMapper, Stage, StageError},
    table::MappingTable,
};
use std::borrow::Cow;
use std::iter::FusedIterator;

/// Generic substitution stage over any static table.
#[derive(Debug, Clone, Copy)]
pub struct Substitute {
    table: &'static MappingTable,
}

impl Substitute {
    #[inline(always)]
    pub const fn new(table: &'static MappingTable) -> Self {
        Self { table }
    }
}

/// Replace every key of `table` found in `text` by its value.
pub fn substitute<'a>(table: &MappingTable, text: Cow<'a, str>) -> Cow<'a, str> {
    let (count, extra_bytes) = table.count_rewrites(&text);
    if count == 0 {
        return text;
    }

    let mut out = String::with_capacity(text.len() + extra_bytes);
    for c in text.chars() {
        match table.get(c) {
            Some(to) => out.push_str(to),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[inline]
pub(crate) fn needs_substitution(table: &MappingTable, text: &str) -> bool {
    text.chars().any(|c| table.rewrite(c).is_some())
}

impl Stage for Substitute {
    fn name(&self) -> &'static str {
        self.table.name
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(needs_substitution(self.table, text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(substitute(self.table, text))
    }

    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        if self.table.is_one_to_one() {
            Some(self)
        } else {
            None
        }
    }
}

impl CharMapper for Substitute {
    #[inline(always)]
    fn map(&self, c: char, _ctx: &Context) -> Option<char> {
        Some(map_one(self.table, c))
    }

    fn bind<'a>(&self, text: &'a str, _ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        Box::new(SubstituteIter::new(text, self.table))
    }
}

/// First char of the replacement, or `c` itself when unmapped.
#[inline(always)]
pub(crate) fn map_one(table: &MappingTable, c: char) -> char {
    table.get(c).and_then(|to| to.chars().next()).unwrap_or(c)
}

/// `chars()` adapter for one-to-one tables.
pub(crate) struct SubstituteIter<'a> {
    chars: std::str::Chars<'a>,
    table: &'static MappingTable,
}

impl<'a> SubstituteIter<'a> {
    #[inline(always)]
    pub(crate) fn new(text: &'a str, table: &'static MappingTable) -> Self {
        Self {
            chars: text.chars(),
            table,
        }
    }
}

impl Iterator for SubstituteIter<'_> {
    type Item = char;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        Some(map_one(self.table, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for SubstituteIter<'_> {}
