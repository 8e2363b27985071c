//! Whole-line grammars.
//!
//! A [`LineGrammar`] compiles a [`Structure`] into one anchored regular
//! expression over the compact scansion string. It accepts exactly the
//! lines the [`Fitter`](crate::Fitter) fits completely, and additionally
//! reports which syllables the anceps tokens matched.

use chandas_foundation::{Error, ErrorKind, Mark, Result, Scansion};
use regex::Regex;

use crate::structure::Structure;

/// A compiled whole-line grammar.
#[derive(Clone, Debug)]
pub struct LineGrammar {
    regex: Regex,
}

/// A successful whole-line match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineMatch {
    /// Syllable indices matched by anceps tokens, in line order.
    pub anceps: Vec<usize>,
}

impl LineGrammar {
    /// Compiles the grammar for a structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated expression fails to compile.
    pub fn compile(structure: &Structure) -> Result<Self> {
        let body: String = structure
            .tokens()
            .iter()
            .map(|token| token.regex_fragment())
            .collect();
        let pattern = format!("^(?:{body})$");
        let regex = Regex::new(&pattern)
            .map_err(|e| Error::new(ErrorKind::InvalidGrammar(e.to_string())))?;
        Ok(Self { regex })
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the whole scansion matches.
    #[must_use]
    pub fn is_match(&self, scansion: &Scansion) -> bool {
        self.regex.is_match(&scansion.compact())
    }

    /// Matches the whole scansion, returning the anceps positions.
    #[must_use]
    pub fn match_line(&self, scansion: &Scansion) -> Option<LineMatch> {
        let compact = scansion.compact();
        let captures = self.regex.captures(&compact)?;
        let anceps = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|group| syllable_index(&compact, group.start()))
            .collect();
        Some(LineMatch { anceps })
    }
}

/// Maps a byte offset in a compact scansion to the index of the syllable
/// that starts there.
fn syllable_index(compact: &str, offset: usize) -> usize {
    compact[..offset]
        .chars()
        .filter(|c| *c != Mark::Separator.symbol())
        .count()
}
