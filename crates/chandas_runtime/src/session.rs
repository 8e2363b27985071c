//! Session state for scanning.
//!
//! The session holds the metre registry, the subset of it that is active,
//! the run configuration, and the index the next line will get.

use std::fs;
use std::path::Path;

use chandas_foundation::{Error, ErrorContext, ErrorKind, Result};
use chandas_metre::MetreRegistry;
use tracing::debug;

use crate::config::ScanConfig;
use crate::normalize::{normalize_line, verse_lines};
use crate::report::LineReport;

/// A scanning session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Every known metre.
    registry: MetreRegistry,

    /// Metres reports are produced for.
    active: MetreRegistry,

    /// Run configuration.
    config: ScanConfig,

    /// Index for the next line scanned with [`Session::scan_line`].
    next_index: usize,
}

impl Session {
    /// Creates a session over the standard metres with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in metre fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_registry(MetreRegistry::standard()?, ScanConfig::default())
    }

    /// Creates a session over `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownMetre`] if the configuration names a metre
    /// the registry does not hold.
    pub fn with_registry(registry: MetreRegistry, config: ScanConfig) -> Result<Self> {
        let mut session = Self {
            active: registry.clone(),
            registry,
            next_index: config.first_index,
            config,
        };
        session.select_metre(session.config.metre.clone())?;
        Ok(session)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the full registry.
    #[must_use]
    pub const fn registry(&self) -> &MetreRegistry {
        &self.registry
    }

    /// Returns the metres reports are produced for.
    #[must_use]
    pub const fn active(&self) -> &MetreRegistry {
        &self.active
    }

    /// Returns the index the next line will get.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.next_index
    }

    /// Sets the index the next line will get.
    pub fn set_next_index(&mut self, index: usize) {
        self.next_index = index;
    }

    /// Turns trace output on or off.
    pub fn set_show_trace(&mut self, show: bool) {
        self.config.show_trace = show;
    }

    /// Restricts reports to one metre, or `None` for all.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownMetre`] if the metre is not registered.
    pub fn select_metre(&mut self, metre: Option<String>) -> Result<()> {
        self.active = match &metre {
            Some(name) => {
                let template = self.registry.require(name)?.clone();
                MetreRegistry::new().with_template(template)?
            }
            None => self.registry.clone(),
        };
        debug!(metre = ?metre, "selected metre");
        self.config.metre = metre;
        Ok(())
    }

    /// Normalises and scans one line with the next index.
    pub fn scan_line(&mut self, raw: &str) -> LineReport {
        let report = LineReport::build(&self.active, &normalize_line(raw), self.next_index);
        self.next_index += 1;
        report
    }

    /// Scans every non-blank line of `text`, numbering from the configured
    /// first index.
    #[must_use]
    pub fn scan_text(&self, text: &str) -> Vec<LineReport> {
        verse_lines(text)
            .enumerate()
            .map(|(position, (_, line))| {
                LineReport::build(&self.active, &line, self.config.first_index + position)
            })
            .collect()
    }

    /// Reads and scans a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, with the file name attached, if the file cannot
    /// be read. Lines that fail to scan are reported, not returned as errors.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<LineReport>> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(e.to_string()))
                .with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;
        debug!(path = %path.display(), "scanning file");
        Ok(self.scan_text(&text))
    }

    /// Renders reports according to the configuration.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON output fails.
    pub fn render(&self, reports: &[LineReport]) -> Result<String> {
        if self.config.json_output {
            return crate::report::reports_to_json(reports);
        }
        Ok(reports
            .iter()
            .map(|r| r.render_text(self.config.show_trace))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
