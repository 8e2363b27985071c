//! Syllable weights and the scansion symbol alphabet.

use std::fmt;

/// The separator character carried over from source punctuation.
pub const SEPARATOR: char = ',';

/// Metrical weight of one syllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    /// One mora (laghu).
    Light,
    /// Two morae (garu).
    Heavy,
    /// The last syllable of a line, heavy by position (pādantagaru).
    FinalHeavy,
    /// A position whose weight is indifferent. Only produced by scansion
    /// adjustment, never by the syllabifier.
    Anceps,
}

impl Weight {
    /// Returns the scansion symbol for this weight.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Light => '1',
            Self::Heavy => '2',
            Self::FinalHeavy => 'X',
            Self::Anceps => 'x',
        }
    }

    /// Parses a scansion symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(Self::Light),
            '2' => Some(Self::Heavy),
            'X' => Some(Self::FinalHeavy),
            'x' => Some(Self::Anceps),
            _ => None,
        }
    }

    /// Returns the number of morae this weight counts for.
    ///
    /// Anceps positions are counted as light.
    #[must_use]
    pub const fn morae(self) -> u8 {
        match self {
            Self::Light | Self::Anceps => 1,
            Self::Heavy | Self::FinalHeavy => 2,
        }
    }

    /// Returns true for the two heavy weights.
    #[must_use]
    pub const fn is_heavy(self) -> bool {
        matches!(self, Self::Heavy | Self::FinalHeavy)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One symbol of the flattened scansion alphabet.
///
/// Class tokens are patterns over marks: a syllable contributes its weight
/// mark, followed by a separator mark when punctuation trailed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// A syllable weight.
    Weight(Weight),
    /// A word or caesura separator.
    Separator,
}

impl Mark {
    /// Light mark.
    pub const LIGHT: Self = Self::Weight(Weight::Light);
    /// Heavy mark.
    pub const HEAVY: Self = Self::Weight(Weight::Heavy);
    /// Line-final heavy mark.
    pub const FINAL_HEAVY: Self = Self::Weight(Weight::FinalHeavy);

    /// Returns the scansion symbol for this mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Weight(weight) => weight.symbol(),
            Self::Separator => SEPARATOR,
        }
    }

    /// Returns true if this mark is a syllable weight.
    #[must_use]
    pub const fn is_weight(self) -> bool {
        matches!(self, Self::Weight(_))
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
