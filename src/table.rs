pub mod data;

use phf::Map;

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Latin script / ASCII digits → Persian.
    EnToFa,
    /// Persian script / Persian digits → Latin.
    FaToEn,
}

/// A named single-character substitution table.
///
/// Keys are single `char`s, so a lookup never depends on its neighbours and
/// the order of entries is irrelevant. Values may be empty, one `char`, or a
/// short transliteration (`چ` → `"tsh"`).
#[derive(Debug)]
pub struct MappingTable {
    pub name: &'static str,
    pub map: Map<char, &'static str>,
    /// Every value is exactly one `char`; computed at compile time.
    pub one_to_one: bool,
}

impl MappingTable {
    #[inline(always)]
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.map.get(&c).copied()
    }

    /// Like [`get`](Self::get), but `None` for self-mappings (`c` → `"c"`)
    /// because they leave the text unchanged.
    #[inline(always)]
    pub fn rewrite(&self, c: char) -> Option<&'static str> {
        let to = self.get(c)?;
        let mut buf = [0u8; 4];
        if to == c.encode_utf8(&mut buf) {
            None
        } else {
            Some(to)
        }
    }

    #[inline(always)]
    pub fn is_one_to_one(&self) -> bool {
        self.one_to_one
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.map.entries().map(|(k, v)| (*k, *v))
    }

    /// Returns `(rewrites, extra_bytes)`: how many characters of `text` this
    /// table would change, and how many bytes the output grows by.
    pub fn count_rewrites(&self, text: &str) -> (usize, usize) {
        let mut count = 0;
        let mut extra = 0;
        for c in text.chars() {
            if let Some(to) = self.rewrite(c) {
                count += 1;
                extra += to.len().saturating_sub(c.len_utf8());
            }
        }
        (count, extra)
    }
}

/// `true` iff `s` holds exactly one UTF-8 encoded scalar value.
pub(crate) const fn is_single_char(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let width = match bytes[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    };
    bytes.len() == width
}
