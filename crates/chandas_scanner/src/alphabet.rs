//! Letter tables for romanised Pāli.
//!
//! Consonants are matched as units: aspirates (`kh`, `bh`, ...) and the soft
//! conjuncts `dr`, `by`, `br`, `vy` count as a single onset, so they never
//! close the preceding syllable.

/// Vowel letters.
pub const VOWELS: &[char] = &['a', 'i', 'u', 'ā', 'ī', 'ū', 'e', 'o'];

/// Vowel letters that leave an open syllable light.
pub const SHORT_VOWELS: &[char] = &['a', 'i', 'u'];

/// Consonant units, in table order.
pub const CONSONANTS: &[&str] = &[
    "k", "c", "ṭ", "t", "p", //
    "kh", "ch", "ṭh", "th", "ph", //
    "g", "j", "ḍ", "d", "b", //
    "gh", "jh", "ḍh", "dh", "bh", //
    "ṅ", "ñ", "ṇ", "n", "m", //
    "h", "y", "r", "l", "v", //
    "ḷh", "ḷ", "s", //
    "dr", "by", "br", "vy",
];

/// The niggahīta, which closes the syllable it follows.
pub const NASAL: char = 'ṃ';

/// Returns true if `c` is a vowel letter.
#[must_use]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Returns true if `c` is a short vowel letter.
#[must_use]
pub fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c)
}

/// Returns the byte lengths of every consonant unit `s` starts with,
/// longest first.
#[must_use]
pub fn consonant_units(s: &str) -> Vec<usize> {
    let mut lengths: Vec<usize> = CONSONANTS
        .iter()
        .filter(|unit| s.starts_with(**unit))
        .map(|unit| unit.len())
        .collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths
}

/// Returns true if `s` starts with a consonant unit.
#[must_use]
pub fn starts_with_consonant(s: &str) -> bool {
    CONSONANTS.iter().any(|unit| s.starts_with(unit))
}

/// Returns the vowel `s` starts with, if any.
#[must_use]
pub fn leading_vowel(s: &str) -> Option<char> {
    s.chars().next().filter(|c| is_vowel(*c))
}

/// Returns true if `s` starts with a vowel or with a consonant unit
/// followed by a vowel, i.e. a following syllable opens here.
#[must_use]
pub fn starts_with_onset_and_vowel(s: &str) -> bool {
    leading_vowel(s).is_some()
        || consonant_units(s)
            .into_iter()
            .any(|n| leading_vowel(&s[n..]).is_some())
}
