//! Scansion sequences.
//!
//! A [`Scansion`] is the ordered list of syllable weights of one line. Each
//! entry remembers the character width of the source text it came from, so
//! the scansion can be laid out directly under the verse:
//!
//! ```text
//! karaṇīyamatthakusalena,
//! 1 1 2 1 2  1  1 1 2 1,
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::weight::{Mark, SEPARATOR, Weight};

/// One syllable as it appears in a scansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannedSyllable {
    /// Weight class.
    pub weight: Weight,
    /// Whether a separator followed the syllable in the source.
    pub separator: bool,
    /// Character width of the source span, separator included.
    pub width: usize,
}

impl ScannedSyllable {
    /// Creates a scanned syllable without a separator.
    #[must_use]
    pub const fn new(weight: Weight, width: usize) -> Self {
        Self {
            weight,
            separator: false,
            width,
        }
    }

    /// Marks this syllable as followed by a separator.
    #[must_use]
    pub const fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }

    /// Returns the layout cells this syllable occupies.
    ///
    /// The weight cell comes first; a separator cell absorbs the remaining
    /// padding when present.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        if self.separator {
            vec![
                Cell::new(Mark::Weight(self.weight), 1),
                Cell::new(Mark::Separator, self.width.saturating_sub(1).max(1)),
            ]
        } else {
            vec![Cell::new(Mark::Weight(self.weight), self.width.max(1))]
        }
    }
}

/// A scansion mark together with the layout columns it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The mark.
    pub mark: Mark,
    /// Number of layout columns, symbol included.
    pub width: usize,
}

impl Cell {
    /// Creates a new cell.
    #[must_use]
    pub const fn new(mark: Mark, width: usize) -> Self {
        Self { mark, width }
    }
}

/// An ordered sequence of scanned syllables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scansion {
    syllables: Vec<ScannedSyllable>,
}

impl Scansion {
    /// Creates an empty scansion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scansion from scanned syllables.
    #[must_use]
    pub fn from_syllables(syllables: Vec<ScannedSyllable>) -> Self {
        Self { syllables }
    }

    /// Appends a syllable.
    pub fn push(&mut self, syllable: ScannedSyllable) {
        self.syllables.push(syllable);
    }

    /// Returns the number of syllables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Returns true if there are no syllables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Returns the scanned syllables.
    #[must_use]
    pub fn syllables(&self) -> &[ScannedSyllable] {
        &self.syllables
    }

    /// Returns the weight of the syllable at `index`.
    #[must_use]
    pub fn weight(&self, index: usize) -> Option<Weight> {
        self.syllables.get(index).map(|s| s.weight)
    }

    /// Iterates over the syllable weights.
    pub fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.syllables.iter().map(|s| s.weight)
    }

    /// Returns a copy with the weight at `index` replaced.
    ///
    /// Out-of-range indices leave the scansion unchanged.
    #[must_use]
    pub fn with_weight(mut self, index: usize, weight: Weight) -> Self {
        if let Some(syllable) = self.syllables.get_mut(index) {
            syllable.weight = weight;
        }
        self
    }

    /// Flattens the scansion into layout cells.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.syllables.iter().flat_map(ScannedSyllable::cells).collect()
    }

    /// Flattens the scansion into marks, dropping layout.
    #[must_use]
    pub fn marks(&self) -> Vec<Mark> {
        self.cells().into_iter().map(|c| c.mark).collect()
    }

    /// Renders the scansion without layout padding, e.g. `"1121,2X"`.
    #[must_use]
    pub fn compact(&self) -> String {
        self.marks().into_iter().map(Mark::symbol).collect()
    }

    /// Renders the scansion padded to the width of the source text.
    #[must_use]
    pub fn padded(&self) -> String {
        let mut out = String::new();
        for cell in self.cells() {
            push_cell(&mut out, cell.mark.symbol(), cell.width);
        }
        out
    }

    /// Total morae of the line.
    #[must_use]
    pub fn morae(&self) -> usize {
        self.weights().map(|w| usize::from(w.morae())).sum()
    }
}

/// Appends `symbol` followed by enough spaces to fill `width` columns.
fn push_cell(out: &mut String, symbol: char, width: usize) {
    out.push(symbol);
    for _ in 1..width {
        out.push(' ');
    }
}

impl fmt::Display for Scansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.padded())
    }
}

impl FromStr for Scansion {
    type Err = Error;

    /// Parses a compact scansion such as `"1121,2X"`.
    ///
    /// Every syllable gets the minimal width; spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut syllables: Vec<ScannedSyllable> = Vec::new();
        for (position, symbol) in s.chars().enumerate() {
            if symbol == ' ' {
                continue;
            }
            if symbol == SEPARATOR {
                match syllables.last_mut() {
                    Some(last) if !last.separator => {
                        last.separator = true;
                        last.width += 1;
                    }
                    _ => {
                        return Err(Error::new(ErrorKind::InvalidSymbol { symbol, position }));
                    }
                }
                continue;
            }
            let weight = Weight::from_symbol(symbol)
                .ok_or_else(|| Error::new(ErrorKind::InvalidSymbol { symbol, position }))?;
            syllables.push(ScannedSyllable::new(weight, 1));
        }
        Ok(Self { syllables })
    }
}

impl FromIterator<ScannedSyllable> for Scansion {
    fn from_iter<I: IntoIterator<Item = ScannedSyllable>>(iter: I) -> Self {
        Self {
            syllables: iter.into_iter().collect(),
        }
    }
}
