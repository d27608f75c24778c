//! Character classes used by the Persian stages.

/// Zero-width non-joiner, the Persian "half-space".
pub const ZWNJ: char = '\u{200C}';

/// First and last code point of the range the half-space rules treat as
/// Persian letters (Arabic block up to, but excluding, the extended digits).
pub const PERSIAN_RANGE_START: char = '\u{0600}';
pub const PERSIAN_RANGE_END: char = '\u{06EF}';

#[inline(always)]
pub const fn is_persian_range(c: char) -> bool {
    matches!(c, PERSIAN_RANGE_START..=PERSIAN_RANGE_END)
}

/// `۰`..=`۹` (U+06F0..=U+06F9).
#[inline(always)]
pub const fn is_persian_digit(c: char) -> bool {
    matches!(c, '\u{06F0}'..='\u{06F9}')
}

#[inline]
pub fn contains_persian(text: &str) -> bool {
    // Every code point in U+0600..=U+06EF encodes with lead byte 0xD8..=0xDB.
    text.bytes().any(|b| matches!(b, 0xD8..=0xDB)) && text.chars().any(is_persian_range)
}

#[inline]
pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit() || is_persian_digit(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_range_bounds() {
        assert!(is_persian_range('\u{0600}'));
        assert!(is_persian_range('م'));
        assert!(is_persian_range('ی'));
        assert!(is_persian_range('\u{06EF}'));
        assert!(!is_persian_range('\u{06F0}')); // ۰ is outside
        assert!(!is_persian_range(ZWNJ));
        assert!(!is_persian_range('a'));
    }

    #[test]
    fn digits() {
        assert!(is_persian_digit('۰'));
        assert!(is_persian_digit('۹'));
        assert!(!is_persian_digit('9'));
        assert!(contains_digit("abc ۳"));
        assert!(contains_digit("x1"));
        assert!(!contains_digit("سلام"));
    }

    #[test]
    fn contains_persian_mixed() {
        assert!(contains_persian("hello سلام"));
        assert!(!contains_persian("hello"));
        assert!(!contains_persian("۱۲۳")); // digits live above the range
        assert!(!contains_persian(""));
    }
}
