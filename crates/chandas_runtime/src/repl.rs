//! The interactive REPL.
//!
//! Each entered line is scanned against the active metres with an
//! auto-incrementing line index. Lines starting with `:` are commands.

use std::io::{self, Write};

use chandas_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What the REPL should do after one input.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and continue.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (metres, configuration, line index).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the standard metres fail to
    /// initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, Session::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_completions(
            session
                .registry()
                .names()
                .into_iter()
                .map(String::from)
                .collect(),
        );
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "chandas> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let input = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);

            match self.eval(trimmed) {
                Ok(Reply::Output(text)) => println!("{text}"),
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one input: a command or a verse line.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed commands or unknown metres. Lines
    /// that fail to scan are reported in the output instead.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        if let Some(command) = input.strip_prefix(':') {
            return self.command(command);
        }
        let report = self.session.scan_line(input);
        let text = if self.session.config().json_output {
            report.to_json()?
        } else {
            report.render_text(self.session.config().show_trace)
        };
        Ok(Reply::Output(text.trim_end().to_string()))
    }

    fn command(&mut self, command: &str) -> Result<Reply> {
        let mut parts = command.splitn(2, ' ');
        let name = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).unwrap_or_default();

        match (name, argument) {
            ("q" | "quit", _) => Ok(Reply::Quit),
            ("h" | "help", _) => Ok(Reply::Output(HELP.trim_end().to_string())),
            ("metres", _) => Ok(Reply::Output(self.list_metres())),
            ("metre", "") => Err(invalid("usage: :metre <name>|all")),
            ("metre", "all") => {
                self.session.select_metre(None)?;
                Ok(Reply::Silent)
            }
            ("metre", metre) => {
                self.session.select_metre(Some(metre.to_string()))?;
                Ok(Reply::Silent)
            }
            ("index", value) => {
                let index = value
                    .parse()
                    .map_err(|_| invalid(format!("invalid line index: {value:?}")))?;
                self.session.set_next_index(index);
                Ok(Reply::Silent)
            }
            ("trace", "on") => {
                self.session.set_show_trace(true);
                Ok(Reply::Silent)
            }
            ("trace", "off") => {
                self.session.set_show_trace(false);
                Ok(Reply::Silent)
            }
            ("trace", _) => Err(invalid("usage: :trace on|off")),
            (other, _) => Err(invalid(format!("unknown command :{other}"))),
        }
    }

    fn list_metres(&self) -> String {
        let active = self.session.active();
        self.session
            .registry()
            .iter()
            .map(|template| {
                let marker = if active.get(template.name()).is_some() {
                    '*'
                } else {
                    ' '
                };
                format!(
                    "{marker} {}: {}",
                    template.name(),
                    template.variant_names().join(" ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mChandas\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Enter a verse line to scan it, :help for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidArgument(message.into()))
}

/// Prints an error to stderr.
pub fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

const HELP: &str = "\
:help               Show this help
:metres             List metres (* marks active ones)
:metre <name>|all   Report only one metre, or all of them
:index <n>          Set the index of the next line
:trace on|off       Show or hide per-variant traces
:quit               Exit
";
