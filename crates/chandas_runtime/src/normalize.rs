//! Input normalisation.
//!
//! The scanner expects one composed, lowercase line with no whitespace.
//! Everything that reaches it from a file, the REPL, or the demonstration
//! text passes through [`normalize_line`] first.

use unicode_normalization::UnicodeNormalization;

/// Composes `raw` to NFC, lowercases it, and removes all whitespace.
#[must_use]
pub fn normalize_line(raw: &str) -> String {
    raw.nfc()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Splits `text` into normalised lines, skipping blank ones.
///
/// Each item carries the 1-based physical line number it came from.
pub fn verse_lines(text: &str) -> impl Iterator<Item = (usize, String)> + '_ {
    text.lines()
        .enumerate()
        .map(|(number, raw)| (number + 1, normalize_line(raw)))
        .filter(|(_, line)| !line.is_empty())
}
