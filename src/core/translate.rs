//! # Translator
//!
//! Greedy longest-match conversion from text to glyphs.
//!
//! At each position the longest key (up to [`MAX_KEY_LEN`] code points) that
//! exists in the catalog wins. Positions with no match are skipped: unmapped
//! characters are dropped, not passed through.
//!
//! ```text
//! "the cat"  →  t h e ␠ cat  →  𓏏𓉔𓇋 𓅓𓇋𓅱
//! ```

use crate::core::catalog::{Catalog, MAX_KEY_LEN, catalog};

/// Translate `text` using the process-wide catalog.
pub fn translate(text: &str) -> String {
    translate_with(catalog(), text)
}

/// Translate `text` against an explicit catalog.
pub fn translate_with(catalog: &Catalog, text: &str) -> String {
    let lower = text.to_lowercase();
    // Byte offset of every code point, plus the end, so substrings can be
    // sliced by code point count.
    let bounds: Vec<usize> = lower
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(lower.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut output = String::with_capacity(lower.len());
    let mut cursor = 0;

    while cursor < char_count {
        let longest = MAX_KEY_LEN.min(char_count - cursor);
        let matched = (1..=longest).rev().find_map(|len| {
            let candidate = &lower[bounds[cursor]..bounds[cursor + len]];
            catalog.lookup(candidate).map(|symbol| (len, symbol))
        });

        match matched {
            Some((len, symbol)) => {
                output.push_str(symbol);
                cursor += len;
            }
            None => cursor += 1,
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Concatenate the single-key glyphs for each char of `text`.
    fn per_char(text: &str) -> String {
        text.chars()
            .map(|c| catalog().lookup(&c.to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_single_letters() {
        assert_eq!(translate("a"), "𓄿");
        assert_eq!(translate("bdf"), "𓃀𓂧𓆑");
    }

    #[test]
    fn test_longest_match_cat() {
        assert_eq!(translate("cat"), "𓅓𓇋𓅱");
        assert_ne!(translate("cat"), per_char("cat"));
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(translate("CAT"), translate("cat"));
        assert_eq!(translate("Sun"), "𓇳");
    }

    #[test]
    fn test_hello_world() {
        let expected = "𓉔𓇋𓃭𓃭𓍯 𓍯𓍯𓂋𓃭𓂧";
        assert_eq!(translate("hello world"), expected);
        assert_eq!(translate("Hello World"), expected);
    }

    #[test]
    fn test_one_glyph_per_char_without_word_collisions() {
        let text = "bdfhjqxz";
        let out = translate(text);
        assert_eq!(out, per_char(text));
        assert_eq!(out.chars().count(), text.chars().count());
    }

    #[test]
    fn test_unmapped_characters_are_dropped() {
        assert_eq!(translate("0"), "");
        assert_eq!(translate("a-b"), "𓄿𓃀");
        assert_eq!(translate("@#$%"), "");
        assert_eq!(translate("a;:b"), "𓄿𓃀");
    }

    #[test]
    fn test_whitespace_and_punctuation() {
        assert_eq!(translate("a b"), "𓄿 𓃀");
        assert_eq!(translate("a  b"), "𓄿  𓃀");
        assert_eq!(translate("a.b,c!d?"), "𓄿𓊪𓃀𓊪𓎡𓊪𓂧𓊪");
        // Tabs and newlines are not keys
        assert_eq!(translate("a\tb\n"), "𓄿𓃀");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(translate("10"), "𓎆");
        assert_eq!(translate("1 2"), "𓏺 𓏻");
        // "100": longest match takes "10", then "0" is dropped
        assert_eq!(translate("100"), "𓎆");
    }

    #[test]
    fn test_word_inside_longer_text() {
        // "cats" = "cat" + "s"
        assert_eq!(translate("cats"), "𓅓𓇋𓅱𓋴");
        // "beautiful" beats any shorter prefix
        assert_eq!(translate("beautiful"), "𓄤𓆑");
        // leading unmatched chars do not block a later word
        assert_eq!(translate("0sun"), "𓇳");
    }

    #[test]
    fn test_greedy_is_not_globally_optimal() {
        // "manile": "man" wins at position 0, leaving "ile" as letters
        assert_eq!(translate("manile"), "𓀀𓇋𓃭𓇋");
    }

    #[test]
    fn test_non_ascii_input_is_dropped_without_panic() {
        assert_eq!(translate("é"), "");
        assert_eq!(translate("日本a"), "𓄿");
        assert_eq!(translate("𓄿"), "");
    }

    #[test]
    fn test_not_a_round_trip() {
        let once = translate("cat");
        // Glyphs are not keys, so re-translating loses everything
        assert_eq!(translate(&once), "");
    }

    #[test]
    fn test_translate_with_custom_catalog() {
        static PAIRS: &[(&str, &str)] = &[("ab", "X"), ("a", "Y"), ("b", "Z")];
        let custom = Catalog::from_pairs(PAIRS);
        assert_eq!(translate_with(&custom, "abab"), "XX");
        assert_eq!(translate_with(&custom, "ba"), "ZY");
    }
}
