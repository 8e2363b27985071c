//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable.

use std::borrow::Cow;

use chandas_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the words offered for completion after a `:` command.
    fn set_completions(&mut self, words: Vec<String>);
}

/// REPL commands offered for completion.
pub const COMMANDS: &[&str] = &[":help", ":metres", ":metre", ":index", ":trace", ":quit"];

/// Helper for rustyline that provides completion, hints, and prompt colouring.
#[derive(Helper, Hinter, Validator)]
struct ChandasHelper {
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Completer for ChandasHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for ChandasHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            Cow::Owned(format!("\x1b[36m{line}\x1b[0m"))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _kind: CmdKind) -> bool {
        line.starts_with(':')
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes REPL commands and their arguments.
struct CommandCompleter {
    /// Arguments for `:metre`.
    metres: Vec<String>,
}

impl CommandCompleter {
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        if let Some(rest) = line.strip_prefix(":metre ") {
            let start = line.len() - rest.len();
            let words = self
                .metres
                .iter()
                .map(String::as_str)
                .chain(["all"])
                .filter(|m| m.starts_with(rest))
                .map(String::from)
                .collect();
            return (start, words);
        }
        if line.starts_with(':') && !line.contains(' ') {
            let words = COMMANDS
                .iter()
                .filter(|c| c.starts_with(line))
                .map(|c| (*c).to_string())
                .collect();
            return (0, words);
        }
        (line.len(), Vec::new())
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|w| Pair {
                display: w.clone(),
                replacement: w,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ChandasHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(readline_error)?
            .build();

        let helper = ChandasHelper {
            completer: CommandCompleter { metres: Vec::new() },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(readline_error)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

fn readline_error(e: ReadlineError) -> Error {
    Error::new(ErrorKind::Readline(e.to_string()))
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(readline_error(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.metres = words;
        }
    }
}
