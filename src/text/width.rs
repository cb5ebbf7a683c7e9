//! Display width: how many terminal columns a string occupies.
//!
//! The default measurement uses a fixed table of "wide" code point ranges
//! (CJK ideographs, Hangul, compatibility forms, enclosed ideographic
//! supplement). Everything outside the table counts as one column. A second
//! mode delegates to `unicode-width` for callers that want East Asian Width
//! semantics instead.

use unicode_width::UnicodeWidthChar;

/// Inclusive code point ranges that occupy two terminal columns.
pub const WIDE_RANGES: [(u32, u32); 6] = [
    (0x1100, 0x115F),   // Hangul Jamo initial consonants
    (0x2E80, 0x9FFF),   // CJK radicals through unified ideographs
    (0xAC00, 0xD7AF),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0x1F200, 0x1F2FF), // Enclosed ideographic supplement
];

/// Strategy used to measure a character's column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthMode {
    /// Fixed wide-range table: 2 columns inside [`WIDE_RANGES`], 1 otherwise.
    #[default]
    Ranges,
    /// Unicode East Asian Width via `unicode-width`. Control and zero-width
    /// characters count as 0.
    Unicode,
}

impl WidthMode {
    /// Column width of a single character.
    #[inline]
    pub fn char_width(self, c: char) -> usize {
        match self {
            Self::Ranges => {
                if is_wide(c) {
                    2
                } else {
                    1
                }
            }
            Self::Unicode => UnicodeWidthChar::width(c).unwrap_or(0),
        }
    }

    /// Column width of a whole string.
    pub fn str_width(self, s: &str) -> usize {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Parse a mode name (`ranges` or `unicode`, case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ranges" | "table" => Some(Self::Ranges),
            "unicode" | "uax11" => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// Whether `c` falls into one of the [`WIDE_RANGES`].
#[inline]
pub fn is_wide(c: char) -> bool {
    let cp = u32::from(c);
    // Nothing below U+1100 is wide.
    cp >= 0x1100 && WIDE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Column width of a single character using the fixed range table.
#[inline]
pub fn char_width(c: char) -> usize {
    WidthMode::Ranges.char_width(c)
}

/// Number of terminal columns `s` occupies, using the fixed range table.
///
/// ```
/// use diffprint::display_width;
///
/// assert_eq!(display_width(""), 0);
/// assert_eq!(display_width("A"), 1);
/// assert_eq!(display_width("中"), 2);
/// assert_eq!(display_width("中A"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    WidthMode::Ranges.str_width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(display_width(""), 0);
        assert_eq!(WidthMode::Unicode.str_width(""), 0);
    }

    #[test]
    fn test_ascii_is_one_column() {
        assert_eq!(display_width("A"), 1);
        assert_eq!(display_width("hello, world"), 12);
    }

    #[test]
    fn test_cjk_is_two_columns() {
        assert_eq!(display_width("中"), 2);
        assert_eq!(display_width("中A"), 3);
        assert_eq!(display_width("한국어"), 6);
        assert_eq!(display_width("进度50%"), 2 * 2 + 3);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(char_width('\u{10FF}'), 1);
        assert_eq!(char_width('\u{1100}'), 2);
        assert_eq!(char_width('\u{115F}'), 2);
        assert_eq!(char_width('\u{1160}'), 1);
        assert_eq!(char_width('\u{2E7F}'), 1);
        assert_eq!(char_width('\u{2E80}'), 2);
        assert_eq!(char_width('\u{9FFF}'), 2);
        assert_eq!(char_width('\u{A000}'), 1);
        assert_eq!(char_width('\u{D7AF}'), 2);
        assert_eq!(char_width('\u{FE4F}'), 2);
        assert_eq!(char_width('\u{FE50}'), 1);
        assert_eq!(char_width('\u{1F200}'), 2);
        assert_eq!(char_width('\u{1F300}'), 1);
    }

    #[test]
    fn test_table_counts_control_as_one() {
        // The fixed table has no zero-width class.
        assert_eq!(display_width("\t"), 1);
        assert_eq!(WidthMode::Unicode.str_width("\u{7}"), 0);
    }

    #[test]
    fn test_unicode_mode() {
        assert_eq!(WidthMode::Unicode.str_width("中A"), 3);
        assert_eq!(WidthMode::Unicode.str_width("e\u{301}"), 1);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(WidthMode::parse("ranges"), Some(WidthMode::Ranges));
        assert_eq!(WidthMode::parse(" Unicode "), Some(WidthMode::Unicode));
        assert_eq!(WidthMode::parse("bogus"), None);
    }
}
