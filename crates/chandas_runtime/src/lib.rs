//! REPL, CLI, and report formatting for Chandas.
//!
//! This crate provides:
//! - [`Repl`] - Interactive scanning loop
//! - [`Session`] - Active metres, configuration, and line numbering
//! - [`LineReport`] - Text and JSON reports for one line
//! - Input normalisation and the bundled demonstration text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod normalize;
pub mod repl;
pub mod report;
pub mod session;
pub mod texts;

pub use config::ScanConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use normalize::{normalize_line, verse_lines};
pub use repl::{Repl, Reply, print_error};
pub use report::{LineOutcome, LineReport, reports_to_json};
pub use session::Session;
pub use texts::{KARANIYAMETTA_SUTTA, KARANIYAMETTA_TITLE};
