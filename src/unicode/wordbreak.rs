//! Word-break classification for Ctrl+Arrow navigation.
//!
//! Each glyph is assigned a word-break property derived from its first
//! scalar. The only consumer is [`is_word_character`], which groups letters,
//! Hebrew letters, Katakana, and numerics into words; every other category
//! breaks a word. Codepoints outside all listed categories (Han ideographs,
//! most symbols) classify as `ALetter` and therefore count as word
//! characters.

use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

/// Word-break property of a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordBreakProperty {
    ALetter,
    CR,
    DoubleQuote,
    Extend,
    ExtendNumLet,
    Format,
    HebrewLetter,
    Katakana,
    LF,
    MidLetter,
    MidNum,
    MidNumLet,
    Newline,
    Numeric,
    RegionalIndicator,
    SingleQuote,
    WSegSpace,
    ZWJ,
}

/// Check whether a glyph with this property belongs to a word.
///
/// Letters, Hebrew letters, Katakana, and numerics group together so that
/// e.g. letters and digits form a single word. Connector and quote
/// punctuation, whitespace, and the extend/format/regional-indicator/ZWJ
/// categories all break words.
#[must_use]
pub fn is_word_character(property: WordBreakProperty) -> bool {
    matches!(
        property,
        WordBreakProperty::ALetter
            | WordBreakProperty::HebrewLetter
            | WordBreakProperty::Katakana
            | WordBreakProperty::Numeric
    )
}

/// Classify every glyph of a string.
#[must_use]
pub fn word_break_properties(s: &str) -> Vec<WordBreakProperty> {
    s.graphemes(true)
        .map(|glyph| match glyph.chars().next() {
            Some(c) => classify(c),
            None => WordBreakProperty::ALetter,
        })
        .collect()
}

fn classify(c: char) -> WordBreakProperty {
    use WordBreakProperty::*;
    match c {
        '\r' => CR,
        '\n' => LF,
        '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}' => Newline,
        '\u{200D}' => ZWJ,
        '"' => DoubleQuote,
        '\'' => SingleQuote,
        '\u{1F1E6}'..='\u{1F1FF}' => RegionalIndicator,
        ':' | '\u{00B7}' | '\u{0387}' | '\u{05F4}' | '\u{2027}' | '\u{FE13}' | '\u{FE55}'
        | '\u{FF1A}' => MidLetter,
        ',' | ';' | '\u{037E}' | '\u{0589}' | '\u{060C}' | '\u{060D}' | '\u{066C}' | '\u{07F8}'
        | '\u{2044}' | '\u{FE10}' | '\u{FE14}' | '\u{FE50}' | '\u{FE54}' | '\u{FF0C}'
        | '\u{FF1B}' => MidNum,
        '.' | '\u{2018}' | '\u{2019}' | '\u{2024}' | '\u{FE52}' | '\u{FF07}' | '\u{FF0E}' => {
            MidNumLet
        }
        '_' | '\u{203F}' | '\u{2040}' | '\u{2054}' | '\u{FE33}' | '\u{FE34}'
        | '\u{FE4D}'..='\u{FE4F}' | '\u{FF3F}' => ExtendNumLet,
        '\u{05D0}'..='\u{05EA}' | '\u{05EF}'..='\u{05F2}' | '\u{FB1D}' | '\u{FB1F}'..='\u{FB28}'
        | '\u{FB2A}'..='\u{FB4F}' => HebrewLetter,
        '\u{30A1}'..='\u{30FA}' | '\u{30FC}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}' | '\u{1B000}' => Katakana,
        '\u{00AD}' | '\u{061C}' | '\u{070F}' | '\u{180E}' | '\u{200B}' | '\u{200C}'
        | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2064}'
        | '\u{FEFF}' | '\u{FFF9}'..='\u{FFFB}' => Format,
        c if c.is_whitespace() => WSegSpace,
        c if is_combining_mark(c) => Extend,
        c if c.is_numeric() => Numeric,
        _ => ALetter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits_are_words() {
        assert_eq!(
            word_break_properties("a1"),
            vec![WordBreakProperty::ALetter, WordBreakProperty::Numeric]
        );
        assert!(is_word_character(WordBreakProperty::ALetter));
        assert!(is_word_character(WordBreakProperty::Numeric));
    }

    #[test]
    fn test_separators_break_words() {
        for p in word_break_properties(" \t\"',.;:_") {
            assert!(!is_word_character(p), "{p:?} should break a word");
        }
    }

    #[test]
    fn test_newlines() {
        assert_eq!(
            word_break_properties("\r\n"),
            // CRLF segments as a single glyph, classified by the CR
            vec![WordBreakProperty::CR]
        );
        assert_eq!(word_break_properties("\n"), vec![WordBreakProperty::LF]);
    }

    #[test]
    fn test_scripts() {
        assert_eq!(
            word_break_properties("\u{05D0}"),
            vec![WordBreakProperty::HebrewLetter]
        );
        assert_eq!(
            word_break_properties("\u{30AB}"),
            vec![WordBreakProperty::Katakana]
        );
        assert!(is_word_character(WordBreakProperty::HebrewLetter));
        assert!(is_word_character(WordBreakProperty::Katakana));
    }

    #[test]
    fn test_han_counts_as_word() {
        let props = word_break_properties("测");
        assert_eq!(props, vec![WordBreakProperty::ALetter]);
    }

    #[test]
    fn test_unsure_categories_stay_non_word() {
        assert!(!is_word_character(WordBreakProperty::Extend));
        assert!(!is_word_character(WordBreakProperty::ExtendNumLet));
        assert!(!is_word_character(WordBreakProperty::Format));
        assert!(!is_word_character(WordBreakProperty::RegionalIndicator));
        assert!(!is_word_character(WordBreakProperty::ZWJ));
    }

    #[test]
    fn test_regional_indicator() {
        assert_eq!(
            word_break_properties("\u{1F1EB}\u{1F1F7}x"),
            // the flag pair segments as one glyph
            vec![
                WordBreakProperty::RegionalIndicator,
                WordBreakProperty::ALetter
            ]
        );
    }

    #[test]
    fn test_one_property_per_glyph() {
        let s = "wo测d e\u{0301}";
        assert_eq!(
            word_break_properties(s).len(),
            crate::unicode::glyph_count(s)
        );
    }
}
