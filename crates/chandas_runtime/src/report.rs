//! Per-line reports.
//!
//! A [`LineReport`] is the printable result of scanning one line against the
//! active metres. Lines are independent: a line that cannot be scanned
//! becomes a [`LineOutcome::Failed`] report and never stops a batch.

use chandas_foundation::{Error, ErrorKind, Result};
use chandas_metre::{MetreFitting, MetreRegistry};
use serde::Serialize;

/// Column where scansions and traces start in text output.
const INDENT: &str = "     ";

/// The result of scanning one line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// Line index passed to variant selection.
    pub index: usize,
    /// The normalised line.
    pub line: String,
    /// What happened.
    #[serde(flatten)]
    pub outcome: LineOutcome,
}

/// Scanned or failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineOutcome {
    /// The line was syllabified and fitted.
    Scanned {
        /// Compact scansion.
        scansion: String,
        /// Scansion padded to line up under the verse.
        padded: String,
        /// One fitting per active metre.
        metres: Vec<MetreFitting>,
    },
    /// The line could not be syllabified.
    Failed {
        /// Unconsumed part of the line.
        remainder: String,
        /// Character offset of the remainder.
        offset: usize,
        /// Error message.
        message: String,
    },
}

impl LineReport {
    /// Scans `line` once and fits it against every metre in `registry`.
    #[must_use]
    pub fn build(registry: &MetreRegistry, line: &str, index: usize) -> Self {
        let outcome = match chandas_scanner::scan(line) {
            Ok(scansion) => LineOutcome::Scanned {
                scansion: scansion.compact(),
                padded: scansion.padded(),
                metres: registry.fit_scansion(&scansion, index),
            },
            Err(err) => failed(&err),
        };
        Self {
            index,
            line: line.to_string(),
            outcome,
        }
    }

    /// Returns true if the line was syllabified.
    #[must_use]
    pub fn is_scanned(&self) -> bool {
        matches!(self.outcome, LineOutcome::Scanned { .. })
    }

    /// Returns the fittings, or an empty slice for a failed line.
    #[must_use]
    pub fn metres(&self) -> &[MetreFitting] {
        match &self.outcome {
            LineOutcome::Scanned { metres, .. } => metres,
            LineOutcome::Failed { .. } => &[],
        }
    }

    /// Returns the names of matching variants of `metre`.
    #[must_use]
    pub fn matching(&self, metre: &str) -> Vec<&str> {
        self.metres()
            .iter()
            .filter(|m| m.metre == metre)
            .flat_map(|m| m.fitting.matching_names())
            .collect()
    }

    /// Renders the report as aligned text.
    #[must_use]
    pub fn render_text(&self, show_trace: bool) -> String {
        let mut out = format!("{:>3}  {}\n", self.index, self.line);
        match &self.outcome {
            LineOutcome::Failed {
                remainder, offset, ..
            } => {
                out.push_str(&format!(
                    "{INDENT}cannot scan at {offset}: \"{remainder}\"\n"
                ));
            }
            LineOutcome::Scanned { padded, metres, .. } => {
                let width = padded.chars().count();
                out.push_str(&format!("{INDENT}{padded}\n"));
                for metre in metres {
                    let names = metre.fitting.matching_names();
                    let verdict = if names.is_empty() {
                        "-".to_string()
                    } else {
                        names.join("|")
                    };
                    out.push_str(&format!("{INDENT}{}: {verdict}\n", metre.metre));
                    if !show_trace {
                        continue;
                    }
                    for variant in &metre.fitting.fitness {
                        let trace = variant.fitting.padded();
                        let pad = width.saturating_sub(trace.chars().count());
                        out.push_str(&format!(
                            "{INDENT}{trace}{:pad$}  {}\n",
                            "", variant.name
                        ));
                    }
                }
            }
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }
}

fn failed(err: &Error) -> LineOutcome {
    let offset = match &err.kind {
        ErrorKind::Syllabification { offset, .. } => *offset,
        _ => 0,
    };
    LineOutcome::Failed {
        remainder: err.remainder().unwrap_or_default().to_string(),
        offset,
        message: err.to_string(),
    }
}

/// Renders a batch of reports as one JSON array.
///
/// # Errors
///
/// Returns a serialization error if encoding fails.
pub fn reports_to_json(reports: &[LineReport]) -> Result<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}
