//! Text normalization for comparison.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: trim, lowercase, strip diacritics, and
/// collapse whitespace.
///
/// Accented and plain spellings compare equal after normalization:
/// - "Enchanté" → "enchante"
/// - "Crete  D'or " → "crete d'or"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFKD normalize (decompose characters into base + combining marks)
/// 3. Drop the combining diacritical marks block (U+0300–U+036F)
/// 4. Collapse whitespace runs to single spaces, trimming the ends
///
/// # Example
/// ```
/// use pfc_directory::normalize;
/// assert_eq!(normalize("  Enchanté   Perfumes "), "enchante perfumes");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining diacritical mark.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
