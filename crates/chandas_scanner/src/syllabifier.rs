//! Syllabifier for romanised Pāli verse.
//!
//! A line is consumed one syllable at a time. At each read position the
//! [`Alternative`]s are tried in order and the first that matches wins:
//!
//! 1. [`Alternative::Open`] - `(C)V` followed by another vowel or by a
//!    consonant that itself opens the next syllable.
//! 2. [`Alternative::Closed`] - `(C)VC` followed by another consonant, or
//!    `(C)Vṃ` followed by anything.
//! 3. [`Alternative::Final`] - any syllable shape that ends the line.
//!
//! Within an alternative, longer consonant units are preferred. A separator
//! directly after a syllable is always consumed with it.

use chandas_foundation::{Error, Result, Scansion, SEPARATOR};
use tracing::{debug, trace};

use crate::alphabet::{
    NASAL, consonant_units, leading_vowel, starts_with_consonant, starts_with_onset_and_vowel,
};
use crate::span::{Cursor, Span};
use crate::syllable::{Syllable, SyllableKind};

/// One alternative of the syllable grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alternative {
    /// Open syllable inside the line.
    Open,
    /// Closed syllable inside the line.
    Closed,
    /// Last syllable of the line (pādantagaru).
    Final,
}

/// The grammar alternatives in the order they are tried.
pub const ALTERNATIVES: [Alternative; 3] =
    [Alternative::Open, Alternative::Closed, Alternative::Final];

/// A successful alternative match at the start of some text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    /// Byte length consumed, separator included.
    pub len: usize,
    /// Nucleus vowel.
    pub vowel: char,
    /// Open or closed.
    pub kind: SyllableKind,
    /// Whether a separator was consumed.
    pub separator: bool,
}

/// Onset plus vowel at the start of a syllable.
#[derive(Clone, Copy)]
struct Nucleus {
    vowel: char,
    /// Byte offset just past the vowel.
    end: usize,
}

impl Alternative {
    /// Returns the name of this alternative.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Final => "final",
        }
    }

    /// Tries to match this alternative at the start of `rest`.
    #[must_use]
    pub fn try_match(self, rest: &str) -> Option<Shape> {
        nuclei(rest).into_iter().find_map(|nucleus| match self {
            Self::Open => match_open(rest, nucleus),
            Self::Closed => match_closed(rest, nucleus),
            Self::Final => match_final(rest, nucleus),
        })
    }
}

/// Every way `rest` can begin with an optional consonant unit and a vowel,
/// longest onset first.
fn nuclei(rest: &str) -> Vec<Nucleus> {
    if let Some(vowel) = leading_vowel(rest) {
        return vec![Nucleus {
            vowel,
            end: vowel.len_utf8(),
        }];
    }
    consonant_units(rest)
        .into_iter()
        .filter_map(|onset| {
            leading_vowel(&rest[onset..]).map(|vowel| Nucleus {
                vowel,
                end: onset + vowel.len_utf8(),
            })
        })
        .collect()
}

/// Consumes a separator at `at` if one is there.
fn attach_separator(rest: &str, at: usize) -> (usize, bool) {
    if rest[at..].starts_with(SEPARATOR) {
        (at + SEPARATOR.len_utf8(), true)
    } else {
        (at, false)
    }
}

fn shape(len: usize, nucleus: Nucleus, kind: SyllableKind, separator: bool) -> Shape {
    Shape {
        len,
        vowel: nucleus.vowel,
        kind,
        separator,
    }
}

fn match_open(rest: &str, nucleus: Nucleus) -> Option<Shape> {
    let (end, separator) = attach_separator(rest, nucleus.end);
    starts_with_onset_and_vowel(&rest[end..])
        .then(|| shape(end, nucleus, SyllableKind::Open, separator))
}

fn match_closed(rest: &str, nucleus: Nucleus) -> Option<Shape> {
    let after = &rest[nucleus.end..];
    for coda in consonant_units(after) {
        let (end, separator) = attach_separator(rest, nucleus.end + coda);
        if starts_with_consonant(&rest[end..]) {
            return Some(shape(end, nucleus, SyllableKind::Closed, separator));
        }
    }
    if after.starts_with(NASAL) {
        let (end, separator) = attach_separator(rest, nucleus.end + NASAL.len_utf8());
        if end < rest.len() {
            return Some(shape(end, nucleus, SyllableKind::Closed, separator));
        }
    }
    None
}

fn match_final(rest: &str, nucleus: Nucleus) -> Option<Shape> {
    let after = &rest[nucleus.end..];
    let mut codas = consonant_units(after);
    if after.starts_with(NASAL) {
        codas.push(NASAL.len_utf8());
    }
    codas.push(0);
    codas.into_iter().find_map(|coda| {
        let (end, separator) = attach_separator(rest, nucleus.end + coda);
        let kind = if coda == 0 {
            SyllableKind::Open
        } else {
            SyllableKind::Closed
        };
        (end == rest.len()).then(|| shape(end, nucleus, kind, separator))
    })
}

/// Consumes one syllable from the start of `rest`.
///
/// `at` is the position of `rest` within its line; it only feeds the span
/// of the syllable and the error offset.
///
/// # Errors
///
/// Returns a syllabification error carrying `rest` if no alternative
/// matches.
pub fn segment_next(rest: &str, at: Cursor) -> Result<(Syllable, &str)> {
    for alternative in ALTERNATIVES {
        if let Some(shape) = alternative.try_match(rest) {
            let (text, remainder) = rest.split_at(shape.len);
            let syllable = Syllable::new(
                text,
                Span::covering(at, text),
                shape.kind,
                shape.vowel,
                alternative == Alternative::Final,
                shape.separator,
            );
            trace!(
                syllable = text,
                alternative = alternative.name(),
                weight = %syllable.weight,
                "segmented syllable"
            );
            return Ok((syllable, remainder));
        }
    }
    Err(Error::syllabification(rest, at.column))
}

/// Iterates over the syllables of one line.
///
/// Yields at most one error; iteration stops after it.
pub struct Syllabifier<'src> {
    /// Unconsumed text.
    rest: &'src str,
    /// Position of `rest` within the line.
    cursor: Cursor,
    /// Set once an error has been yielded.
    failed: bool,
}

impl<'src> Syllabifier<'src> {
    /// Creates a syllabifier over one line.
    #[must_use]
    pub fn new(line: &'src str) -> Self {
        Self {
            rest: line,
            cursor: Cursor::start(),
            failed: false,
        }
    }

    /// Returns the text not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.rest
    }

    /// Returns the current read position.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl Iterator for Syllabifier<'_> {
    type Item = Result<Syllable>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        match segment_next(self.rest, self.cursor) {
            Ok((syllable, rest)) => {
                self.cursor = self.cursor.advance(&syllable.text);
                self.rest = rest;
                Some(Ok(syllable))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Splits a whole line into syllables.
///
/// # Errors
///
/// Returns a syllabification error if any position of the line matches no
/// alternative; no partial result is returned.
pub fn syllabify(line: &str) -> Result<Vec<Syllable>> {
    Syllabifier::new(line).collect()
}

/// Scans a whole line into its scansion.
///
/// # Errors
///
/// Returns a syllabification error if the line cannot be split.
pub fn scan(line: &str) -> Result<Scansion> {
    let scansion: Scansion = syllabify(line)?
        .iter()
        .map(Syllable::to_scanned)
        .collect();
    debug!(
        line,
        syllables = scansion.len(),
        scansion = %scansion.compact(),
        "scanned line"
    );
    Ok(scansion)
}
