//! Metrical structures.
//!
//! A structure is written as a string over the class-token alphabet, with
//! `,` marking the half-line boundary:
//!
//! ```text
//! y2Wv2i,2iv2Wv2X
//! ```

use std::fmt;
use std::str::FromStr;

use chandas_foundation::{Error, Result};

use crate::token::ClassToken;

/// One metrical variant of a verse line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Structure {
    /// The source text, whitespace removed.
    source: String,
    /// Parsed tokens.
    tokens: Vec<ClassToken>,
}

impl Structure {
    /// Parses a structure string.
    ///
    /// Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the structure is empty, contains a character
    /// outside the class-token alphabet, or has a line-final-heavy token
    /// anywhere but last.
    pub fn parse(source: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut compact = String::new();
        for (position, symbol) in source.chars().enumerate() {
            if symbol.is_whitespace() {
                continue;
            }
            let token = ClassToken::from_symbol(symbol).ok_or_else(|| {
                Error::invalid_structure(
                    source,
                    position,
                    format!("unknown class token '{symbol}'"),
                )
            })?;
            tokens.push(token);
            compact.push(symbol);
        }

        if tokens.is_empty() {
            return Err(Error::invalid_structure(source, 0, "empty structure"));
        }

        if let Some(index) = tokens
            .iter()
            .position(|t| *t == ClassToken::LineFinalHeavy)
        {
            if index + 1 != tokens.len() {
                return Err(Error::invalid_structure(
                    source,
                    index,
                    "line-final-heavy must be the last token",
                ));
            }
        }

        Ok(Self {
            source: compact,
            tokens,
        })
    }

    /// Returns the structure string.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the tokens.
    #[must_use]
    pub fn tokens(&self) -> &[ClassToken] {
        &self.tokens
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; empty structures are rejected by [`Structure::parse`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the fewest and most syllables a matching line can have.
    #[must_use]
    pub fn syllable_bounds(&self) -> (usize, usize) {
        self.tokens.iter().fold((0, 0), |(min, max), token| {
            let (lo, hi) = token.syllable_bounds();
            (min + lo, max + hi)
        })
    }

    /// Splits the structure at separators into its half-lines.
    #[must_use]
    pub fn half_lines(&self) -> Vec<&[ClassToken]> {
        self.tokens
            .split(|t| *t == ClassToken::Separator)
            .collect()
    }
}

impl FromStr for Structure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
