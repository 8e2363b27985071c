//! Syllables emitted by the syllabifier.

use chandas_foundation::{ScannedSyllable, Weight};

use crate::alphabet::is_short_vowel;
use crate::span::Span;

/// Whether a syllable ends in its vowel or in a consonant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyllableKind {
    /// Ends in a vowel.
    Open,
    /// Ends in a consonant or the niggahīta.
    Closed,
}

/// One syllable of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syllable {
    /// The consumed text, separator included.
    pub text: String,
    /// Where the text sits in its line.
    pub span: Span,
    /// Open or closed.
    pub kind: SyllableKind,
    /// The nucleus vowel.
    pub vowel: char,
    /// Whether this is the last syllable of the line.
    pub line_final: bool,
    /// Whether a separator trailed the syllable.
    pub separator: bool,
    /// Weight class.
    pub weight: Weight,
}

impl Syllable {
    /// Creates a syllable and assigns its weight.
    ///
    /// Line-final syllables are always [`Weight::FinalHeavy`]; otherwise an
    /// open syllable on a short vowel is light and everything else heavy.
    /// A trailing separator never changes the weight.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        span: Span,
        kind: SyllableKind,
        vowel: char,
        line_final: bool,
        separator: bool,
    ) -> Self {
        let weight = if line_final {
            Weight::FinalHeavy
        } else if kind == SyllableKind::Open && is_short_vowel(vowel) {
            Weight::Light
        } else {
            Weight::Heavy
        };
        Self {
            text: text.into(),
            span,
            kind,
            vowel,
            line_final,
            separator,
            weight,
        }
    }

    /// Returns true if the syllable ends in its vowel.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.kind == SyllableKind::Open
    }

    /// Character width of the consumed text.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// Converts to the scansion entry for this syllable.
    #[must_use]
    pub fn to_scanned(&self) -> ScannedSyllable {
        ScannedSyllable {
            weight: self.weight,
            separator: self.separator,
            width: self.width(),
        }
    }
}
