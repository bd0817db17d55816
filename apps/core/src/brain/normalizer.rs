//! Text normalization for keyword matching.
//!
//! Folds case and strips combining diacritics so that keyword lists written
//! without accents ("epuise") match accented input ("Épuisé").
//! The normalized form is only ever used for matching, never displayed.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Lowercase, decompose (NFD) and drop combining marks.
///
/// Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_case_and_accents() {
        assert_eq!(normalize("ÉPUISÉ"), "epuise");
        assert_eq!(normalize("Épuisé"), "epuise");
        assert_eq!(normalize("épuisé"), "epuise");
        assert_eq!(normalize("Colère"), "colere");
        assert_eq!(normalize("Fâché, décédé"), "fache, decede");
    }

    #[test]
    fn test_plain_ascii_unchanged_except_case() {
        assert_eq!(normalize("Hello World 123"), "hello world 123");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "   ");
    }

    #[test]
    fn test_ligatures_are_not_decomposed() {
        // NFD leaves "œ" intact, so "cœur" does not become "coeur"
        assert_eq!(normalize("Cœur"), "cœur");
    }
}
