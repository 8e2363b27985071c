//! Error types for the Chandas system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type for Chandas operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Chandas operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syllabification error for the unconsumed part of a line.
    #[must_use]
    pub fn syllabification(remainder: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::Syllabification {
            remainder: remainder.into(),
            offset,
        })
    }

    /// Creates an invalid structure error.
    #[must_use]
    pub fn invalid_structure(
        structure: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidStructure {
            structure: structure.into(),
            position,
            message: message.into(),
        })
    }

    /// Creates an unknown metre error.
    #[must_use]
    pub fn unknown_metre(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMetre(name.into()))
    }

    /// Returns true if this is a syllabification error.
    #[must_use]
    pub fn is_syllabification(&self) -> bool {
        matches!(self.kind, ErrorKind::Syllabification { .. })
    }

    /// Returns the unconsumed remainder of a line that could not be scanned.
    #[must_use]
    pub fn remainder(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Syllabification { remainder, .. } => Some(remainder),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No syllable alternative matched at the current read position.
    #[error("cannot syllabify at offset {offset}: \"{remainder}\"")]
    Syllabification {
        /// The unconsumed remainder of the line.
        remainder: String,
        /// Character offset of the remainder within the line.
        offset: usize,
    },

    /// A structure string could not be parsed into class tokens.
    #[error("invalid structure \"{structure}\" at {position}: {message}")]
    InvalidStructure {
        /// The structure source text.
        structure: String,
        /// Character position of the offending token.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// A scansion string contained a symbol outside the scansion alphabet.
    #[error("invalid scansion symbol '{symbol}' at {position}")]
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// Character position of the symbol.
        position: usize,
    },

    /// A whole-line grammar failed to compile.
    #[error("invalid line grammar: {0}")]
    InvalidGrammar(String),

    /// A template defines the same variant name twice.
    #[error("duplicate variant: {0}")]
    DuplicateVariant(String),

    /// A template defines no variants.
    #[error("metre {0} defines no variants")]
    NoVariants(String),

    /// A registry already holds a metre with this name.
    #[error("duplicate metre: {0}")]
    DuplicateMetre(String),

    /// Metre was not found in the registry.
    #[error("unknown metre: {0}")]
    UnknownMetre(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// The line editor failed.
    #[error("readline error: {0}")]
    Readline(String),

    /// Rendering a report failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command-line or REPL argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file or metre name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Enclosing operations, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
