//! Source location tracking.
//!
//! `Span` tracks where a syllable came from in its line; `Cursor` is the
//! read position the syllabifier threads from one step to the next.

/// A read position within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Byte offset.
    pub byte: usize,
    /// Character offset.
    pub column: usize,
}

impl Cursor {
    /// Creates a cursor at the start of a line.
    #[must_use]
    pub const fn start() -> Self {
        Self { byte: 0, column: 0 }
    }

    /// Returns the cursor positioned after `text`.
    #[must_use]
    pub fn advance(self, text: &str) -> Self {
        Self {
            byte: self.byte + text.len(),
            column: self.column + text.chars().count(),
        }
    }
}

/// A span of line text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// Character offset where this span starts.
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, column: usize) -> Self {
        Self { start, end, column }
    }

    /// Creates the span covering `text` read from `at`.
    #[must_use]
    pub const fn covering(at: Cursor, text: &str) -> Self {
        Self {
            start: at.byte,
            end: at.byte + text.len(),
            column: at.column,
        }
    }

    /// Returns the length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers in the given line.
    #[must_use]
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}
