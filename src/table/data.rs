use crate::table::{Direction, MappingTable, is_single_char};

use paste::paste;
use phf::phf_map;

// ---------------------------------------------------------------------------
//    Macro – one static `MappingTable` plus an accessor per table
// ---------------------------------------------------------------------------
macro_rules! define_tables {
    ($(
        $name:ident, $label:literal,
        [ $($from:literal => $to:literal),* $(,)? ]
    );* $(;)?) => {
        paste! {
            $(
                pub static [<$name:upper>]: MappingTable = MappingTable {
                    name: $label,
                    map: phf_map! { $($from => $to),* },
                    one_to_one: true $(&& is_single_char($to))*,
                };

                #[inline(always)]
                pub fn $name() -> &'static MappingTable {
                    &[<$name:upper>]
                }
            )*
        }
    };
}

// ---------------------------------------------------------------------------
//    Table definitions (single source of truth)
//
//    The Latin → Persian table is deliberately lossy: `c`, `e`, `y` map to
//    themselves, `k`/`q` share `ک`, `o`/`u`/`v`/`w` share `و`, and `x` has no
//    entry at all. Keep it that way; downstream indexes depend on it.
// ---------------------------------------------------------------------------
define_tables! {
    en_numbers, "en_to_fa_numbers",
        [
            '0' => "۰", '1' => "۱", '2' => "۲", '3' => "۳", '4' => "۴",
            '5' => "۵", '6' => "۶", '7' => "۷", '8' => "۸", '9' => "۹",
        ];

    fa_numbers, "fa_to_en_numbers",
        [
            '۰' => "0", '۱' => "1", '۲' => "2", '۳' => "3", '۴' => "4",
            '۵' => "5", '۶' => "6", '۷' => "7", '۸' => "8", '۹' => "9",
        ];

    en_characters, "en_to_fa_characters",
        [
            'a' => "ا", 'b' => "ب", 'c' => "c", 'd' => "د", 'e' => "e", 'f' => "ف",
            'g' => "گ", 'h' => "ه", 'i' => "ی", 'j' => "ژ", 'k' => "ک", 'l' => "ل",
            'm' => "م", 'n' => "ن", 'o' => "و", 'p' => "پ", 'q' => "ک", 'r' => "ر",
            's' => "س", 't' => "ت", 'u' => "و", 'v' => "و", 'w' => "و", 'y' => "y",
            'z' => "ز", '?' => "؟",
        ];

    fa_characters, "fa_to_en_characters",
        [
            'آ' => "aa", 'ا' => "a", 'ب' => "b", 'پ' => "p", 'ت' => "t", 'ث' => "s",
            'ج' => "dj", 'چ' => "tsh", 'ح' => "h", 'خ' => "kh", 'د' => "d", 'ذ' => "z",
            'ر' => "r", 'ز' => "z", 'ژ' => "j", 'س' => "s", 'ش' => "sh", 'ص' => "ss",
            'ض' => "zz", 'ط' => "t", 'ظ' => "zzz", 'ع' => "`", 'غ' => "gh", 'ف' => "f",
            'ق' => "q", 'ک' => "k", 'گ' => "g", 'ل' => "l", 'م' => "m", 'ن' => "n",
            'و' => "v", 'ه' => "h", 'ی' => "i", '؟' => "?",
        ];
}

/// Digit table for `direction`.
#[inline(always)]
pub fn numbers(direction: Direction) -> &'static MappingTable {
    match direction {
        Direction::EnToFa => en_numbers(),
        Direction::FaToEn => fa_numbers(),
    }
}

/// Letter table for `direction`.
#[inline(always)]
pub fn characters(direction: Direction) -> &'static MappingTable {
    match direction {
        Direction::EnToFa => en_characters(),
        Direction::FaToEn => fa_characters(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(EN_NUMBERS.len(), 10);
        assert_eq!(FA_NUMBERS.len(), 10);
        // 25 letters (no `x`) plus `?`
        assert_eq!(EN_CHARACTERS.len(), 26);
        // 33 letters plus `؟`
        assert_eq!(FA_CHARACTERS.len(), 34);
    }

    #[test]
    fn one_to_one_flags() {
        assert!(EN_NUMBERS.is_one_to_one());
        assert!(FA_NUMBERS.is_one_to_one());
        assert!(EN_CHARACTERS.is_one_to_one());
        assert!(!FA_CHARACTERS.is_one_to_one()); // چ → "tsh"
    }

    #[test]
    fn digit_tables_are_exact_inverses() {
        for (from, to) in EN_NUMBERS.entries() {
            let back = to.chars().next().and_then(|c| FA_NUMBERS.get(c));
            assert_eq!(back, Some(from.encode_utf8(&mut [0u8; 4]) as &str));
        }
    }

    #[test]
    fn latin_collisions_are_preserved() {
        assert_eq!(EN_CHARACTERS.get('k'), EN_CHARACTERS.get('q'));
        assert_eq!(EN_CHARACTERS.get('u'), Some("و"));
        assert_eq!(EN_CHARACTERS.get('v'), Some("و"));
        assert_eq!(EN_CHARACTERS.get('w'), Some("و"));
        assert_eq!(EN_CHARACTERS.get('x'), None);
        assert_eq!(EN_CHARACTERS.get('A'), None);
    }

    #[test]
    fn persian_multi_char_entries() {
        assert_eq!(FA_CHARACTERS.get('چ'), Some("tsh"));
        assert_eq!(FA_CHARACTERS.get('ظ'), Some("zzz"));
        assert_eq!(FA_CHARACTERS.get('ع'), Some("`"));
        assert_eq!(FA_CHARACTERS.get('آ'), Some("aa"));
    }

    #[test]
    fn direction_lookup() {
        assert_eq!(numbers(Direction::EnToFa).name, "en_to_fa_numbers");
        assert_eq!(characters(Direction::FaToEn).name, "fa_to_en_characters");
    }
}
