//! The class-token alphabet.
//!
//! Each [`ClassToken`] stands for a small set of mark sequences it accepts.
//! Both the incremental [`Fitter`](crate::Fitter) and the whole-line
//! [`LineGrammar`](crate::LineGrammar) are derived from the same
//! alternative table in [`ClassToken::alternatives`].
//!
//! Alternatives are tried in table order and the first one that is a prefix
//! of the remaining marks wins; there is no backtracking. A token whose
//! alternatives share a prefix (only [`ClassToken::PartialResolution`]) must
//! be followed by a token that disambiguates it.

use std::fmt;

use chandas_foundation::Mark;

const L: Mark = Mark::LIGHT;
const H: Mark = Mark::HEAVY;
const F: Mark = Mark::FINAL_HEAVY;
const S: Mark = Mark::Separator;

const LIGHT: &[&[Mark]] = &[&[L]];
const HEAVY: &[&[Mark]] = &[&[H]];
const FINAL: &[&[Mark]] = &[&[F]];
const EITHER: &[&[Mark]] = &[&[L], &[H]];
const RESOLVED: &[&[Mark]] = &[&[L, L], &[H]];
const PARTIAL: &[&[Mark]] = &[&[L, L], &[H], &[L]];
const GROUP_A: &[&[Mark]] = &[&[L, H, L], &[H, H]];
const GROUP_B: &[&[Mark]] = &[&[L, L, H], &[H, L, L]];
const SEPARATOR: &[&[Mark]] = &[&[S]];

/// One position of a metrical structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ClassToken {
    /// `1` - exactly one light syllable.
    FixedLight,
    /// `2` - exactly one heavy syllable.
    FixedHeavy,
    /// `X` - the line-final heavy syllable; last token only.
    LineFinalHeavy,
    /// `x` - one light or heavy syllable, captured for adjustment.
    LineInitialAnceps,
    /// `i` - one light or heavy syllable.
    Indifferent,
    /// `v` - one heavy or two lights.
    Resolution,
    /// `y` - two lights, one heavy, or a single light.
    PartialResolution,
    /// `W` - light heavy light, or heavy heavy.
    GroupA,
    /// `N` - light light heavy, or heavy light light.
    GroupB,
    /// `,` - the separator.
    Separator,
}

impl ClassToken {
    /// Every token, in alphabet order.
    pub const ALL: [Self; 10] = [
        Self::FixedLight,
        Self::FixedHeavy,
        Self::LineFinalHeavy,
        Self::LineInitialAnceps,
        Self::Indifferent,
        Self::Resolution,
        Self::PartialResolution,
        Self::GroupA,
        Self::GroupB,
        Self::Separator,
    ];

    /// Returns the structure character for this token.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::FixedLight => '1',
            Self::FixedHeavy => '2',
            Self::LineFinalHeavy => 'X',
            Self::LineInitialAnceps => 'x',
            Self::Indifferent => 'i',
            Self::Resolution => 'v',
            Self::PartialResolution => 'y',
            Self::GroupA => 'W',
            Self::GroupB => 'N',
            Self::Separator => ',',
        }
    }

    /// Parses a structure character.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    /// Returns a human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedLight => "fixed-light",
            Self::FixedHeavy => "fixed-heavy",
            Self::LineFinalHeavy => "line-final-heavy",
            Self::LineInitialAnceps => "line-initial-anceps",
            Self::Indifferent => "position-indifferent",
            Self::Resolution => "resolution",
            Self::PartialResolution => "partial-resolution",
            Self::GroupA => "group-a",
            Self::GroupB => "group-b",
            Self::Separator => "separator",
        }
    }

    /// Returns the mark sequences this token accepts, in match order.
    #[must_use]
    pub const fn alternatives(self) -> &'static [&'static [Mark]] {
        match self {
            Self::FixedLight => LIGHT,
            Self::FixedHeavy => HEAVY,
            Self::LineFinalHeavy => FINAL,
            Self::LineInitialAnceps | Self::Indifferent => EITHER,
            Self::Resolution => RESOLVED,
            Self::PartialResolution => PARTIAL,
            Self::GroupA => GROUP_A,
            Self::GroupB => GROUP_B,
            Self::Separator => SEPARATOR,
        }
    }

    /// Returns true if the grammar captures what this token matched.
    #[must_use]
    pub const fn is_capturing(self) -> bool {
        matches!(self, Self::LineInitialAnceps)
    }

    /// Matches this token against the start of `marks`.
    ///
    /// Returns the number of marks consumed by the first alternative that
    /// is a prefix, or `None`.
    #[must_use]
    pub fn match_prefix(self, marks: &[Mark]) -> Option<usize> {
        self.alternatives()
            .iter()
            .find(|alternative| marks.starts_with(alternative))
            .map(|alternative| alternative.len())
    }

    /// Returns the regular-expression fragment for this token over compact
    /// scansion symbols.
    #[must_use]
    pub fn regex_fragment(self) -> String {
        let alternatives: Vec<String> = self
            .alternatives()
            .iter()
            .map(|alternative| {
                let symbols: String = alternative.iter().map(|m| m.symbol()).collect();
                regex::escape(&symbols)
            })
            .collect();
        let body = alternatives.join("|");
        if self.is_capturing() {
            format!("({body})")
        } else if alternatives.len() > 1 {
            format!("(?:{body})")
        } else {
            body
        }
    }

    /// Returns the smallest and largest number of syllables this token
    /// consumes.
    #[must_use]
    pub fn syllable_bounds(self) -> (usize, usize) {
        let counts = self
            .alternatives()
            .iter()
            .map(|alternative| alternative.iter().filter(|m| m.is_weight()).count());
        let min = counts.clone().min().unwrap_or(0);
        let max = counts.max().unwrap_or(0);
        (min, max)
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
