//! Incremental alignment of a scansion against a structure.
//!
//! The [`Fitter`] walks two cursors forward in lock step: one over the
//! scansion cells and one over the structure tokens. Each step takes the
//! next token, matches it as a prefix of the remaining cells, and on success
//! advances both cursors and emits a [`TraceEntry`]. A failed match is not an
//! error; it leaves the cursors in place and reports [`FitStep::NoMatch`].
//!
//! Running out of scansion before structure is [`FitError::ShortLine`].
//! Running out of structure first is [`FitError::LongLine`], reported on the
//! step after the last token matched.
//!
//! The cursor is a plain `Copy` value; [`fit_step`] is the pure transition
//! and [`Fitter`] only threads the cursor through it.

use std::fmt;

use chandas_foundation::{Cell, Mark, Scansion};
use thiserror::Error;
use tracing::trace;

use crate::structure::Structure;
use crate::token::ClassToken;

/// Length mismatch between a scansion and a structure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FitError {
    /// The scansion ran out before the structure.
    #[error("line too short for structure")]
    ShortLine,
    /// The structure ran out before the scansion.
    #[error("line too long for structure")]
    LongLine,
}

/// One matched token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceEntry {
    /// The token that matched.
    pub token: ClassToken,
    /// Syllables consumed.
    pub syllables: usize,
    /// Layout columns consumed.
    pub width: usize,
}

/// Result of one fitter step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitStep {
    /// The next token matched.
    Matched(TraceEntry),
    /// The next token did not match; nothing was consumed.
    NoMatch,
    /// Both cursors are exhausted.
    Done,
}

/// Position of a fitter in its scansion and structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FitCursor {
    /// Index of the next unconsumed cell.
    pub cell: usize,
    /// Index of the next unmatched token.
    pub token: usize,
}

/// Observable state of a [`Fitter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitState {
    /// More steps may succeed.
    Running,
    /// Both cursors were exhausted together.
    Done,
    /// Ended with [`FitError::ShortLine`].
    ShortLine,
    /// Ended with [`FitError::LongLine`].
    LongLine,
}

/// Performs one transition from `cursor`.
///
/// Returns the step and the cursor to continue from.
///
/// # Errors
///
/// Returns [`FitError::LongLine`] if every token has matched but cells
/// remain, and [`FitError::ShortLine`] if cells are exhausted while tokens
/// remain.
pub fn fit_step(
    cells: &[Cell],
    tokens: &[ClassToken],
    cursor: FitCursor,
) -> Result<(FitStep, FitCursor), FitError> {
    let rest = cells.get(cursor.cell..).unwrap_or_default();
    let Some(&token) = tokens.get(cursor.token) else {
        return if rest.is_empty() {
            Ok((FitStep::Done, cursor))
        } else {
            Err(FitError::LongLine)
        };
    };
    if rest.is_empty() {
        return Err(FitError::ShortLine);
    }

    let marks: Vec<Mark> = rest.iter().map(|c| c.mark).collect();
    let Some(consumed) = token.match_prefix(&marks) else {
        return Ok((FitStep::NoMatch, cursor));
    };

    let taken = &rest[..consumed];
    let entry = TraceEntry {
        token,
        syllables: taken.iter().filter(|c| c.mark.is_weight()).count(),
        width: taken.iter().map(|c| c.width).sum(),
    };
    let next = FitCursor {
        cell: cursor.cell + consumed,
        token: cursor.token + 1,
    };
    Ok((FitStep::Matched(entry), next))
}

/// Incremental aligner for one scansion and one structure.
#[derive(Clone, Debug)]
pub struct Fitter<'a> {
    cells: Vec<Cell>,
    tokens: &'a [ClassToken],
    cursor: FitCursor,
    state: FitState,
}

impl<'a> Fitter<'a> {
    /// Creates a fitter positioned at the start of both sequences.
    #[must_use]
    pub fn new(scansion: &Scansion, structure: &'a Structure) -> Self {
        Self {
            cells: scansion.cells(),
            tokens: structure.tokens(),
            cursor: FitCursor::default(),
            state: FitState::Running,
        }
    }

    /// Advances by one token.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] when one side runs out before the other. The
    /// fitter stays in the corresponding state and keeps returning it.
    pub fn step(&mut self) -> Result<FitStep, FitError> {
        match self.state {
            FitState::Done => return Ok(FitStep::Done),
            FitState::ShortLine => return Err(FitError::ShortLine),
            FitState::LongLine => return Err(FitError::LongLine),
            FitState::Running => {}
        }

        match fit_step(&self.cells, self.tokens, self.cursor) {
            Ok((step, next)) => {
                if let FitStep::Matched(entry) = step {
                    trace!(
                        token = %entry.token,
                        syllables = entry.syllables,
                        cell = self.cursor.cell,
                        "token matched"
                    );
                }
                if step == FitStep::Done {
                    self.state = FitState::Done;
                }
                self.cursor = next;
                Ok(step)
            }
            Err(err) => {
                trace!(error = %err, cell = self.cursor.cell, token = self.cursor.token, "fit ended");
                self.state = match err {
                    FitError::ShortLine => FitState::ShortLine,
                    FitError::LongLine => FitState::LongLine,
                };
                Err(err)
            }
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> FitState {
        self.state
    }

    /// Returns the current cursor.
    #[must_use]
    pub fn cursor(&self) -> FitCursor {
        self.cursor
    }

    /// Steps until the fit completes, diverges, or fails, collecting the
    /// trace.
    #[must_use]
    pub fn run(mut self) -> FittingTrace {
        let mut entries = Vec::new();
        let outcome = loop {
            match self.step() {
                Ok(FitStep::Matched(entry)) => entries.push(entry),
                Ok(FitStep::NoMatch) => {
                    break FitOutcome::Diverged {
                        token: self.cursor.token,
                    };
                }
                Ok(FitStep::Done) => break FitOutcome::Complete,
                Err(FitError::ShortLine) => break FitOutcome::ShortLine,
                Err(FitError::LongLine) => break FitOutcome::LongLine,
            }
        };
        FittingTrace { entries, outcome }
    }
}

/// How a fitter run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FitOutcome {
    /// Every token matched and every cell was consumed.
    Complete,
    /// The token at this index did not match.
    Diverged {
        /// Index of the failing token in the structure.
        token: usize,
    },
    /// The scansion ran out first.
    ShortLine,
    /// The structure ran out first.
    LongLine,
}

/// The trace of one fitter run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FittingTrace {
    /// Matched tokens in order.
    pub entries: Vec<TraceEntry>,
    /// How the run ended.
    pub outcome: FitOutcome,
}

impl FittingTrace {
    /// Returns true if the structure fit the whole line.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome == FitOutcome::Complete
    }

    /// Number of syllables covered by the trace.
    #[must_use]
    pub fn syllables(&self) -> usize {
        self.entries.iter().map(|e| e.syllables).sum()
    }

    /// Renders the trace padded to line up with the padded scansion.
    #[must_use]
    pub fn padded(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push(entry.token.symbol());
            for _ in 1..entry.width {
                out.push(' ');
            }
        }
        out
    }
}

impl fmt::Display for FittingTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.padded())
    }
}
