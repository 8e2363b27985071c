//! Configuration for scanning runs.

/// Configuration for a scanning run.
///
/// Controls which metres are reported and how reports are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Restrict reports to this metre; `None` reports every metre.
    pub metre: Option<String>,

    /// Print one alignment trace per variant.
    pub show_trace: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Index given to the first line of each text.
    pub first_index: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            metre: None,
            show_trace: true,
            json_output: false,
            first_index: 0,
        }
    }
}

impl ScanConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for machine-readable output.
    #[must_use]
    pub fn json() -> Self {
        Self {
            json_output: true,
            ..Self::default()
        }
    }

    /// Builder method to restrict reports to one metre.
    #[must_use]
    pub fn with_metre(mut self, metre: impl Into<String>) -> Self {
        self.metre = Some(metre.into());
        self
    }

    /// Builder method to set trace output.
    #[must_use]
    pub fn with_trace(mut self, show: bool) -> Self {
        self.show_trace = show;
        self
    }

    /// Builder method to set JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to set the index of the first line.
    #[must_use]
    pub fn with_first_index(mut self, index: usize) -> Self {
        self.first_index = index;
        self
    }
}
