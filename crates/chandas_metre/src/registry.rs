//! The metre registry.
//!
//! An immutable collection of [`MetreTemplate`]s. Adding a template returns a
//! new registry; the persistent vector shares structure with the old one.

use chandas_foundation::{Error, ErrorKind, Result, Scansion};
use im::Vector;
use tracing::debug;

use crate::stdlib;
use crate::template::{Fitting, MetreTemplate};

/// Registered metre templates, in registration order.
#[derive(Clone, Debug, Default)]
pub struct MetreRegistry {
    templates: Vector<MetreTemplate>,
}

/// A line fitted against one metre.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetreFitting {
    /// Metre name.
    pub metre: String,
    /// The fitting.
    pub fitting: Fitting,
}

impl MetreRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn standard() -> Result<Self> {
        stdlib::standard_templates()?
            .into_iter()
            .try_fold(Self::new(), Self::with_template)
    }

    /// Returns a registry with `template` appended.
    ///
    /// # Errors
    ///
    /// Returns an error if a template with the same name is registered.
    pub fn with_template(self, template: MetreTemplate) -> Result<Self> {
        if self.get(template.name()).is_some() {
            return Err(Error::new(ErrorKind::DuplicateMetre(
                template.name().to_string(),
            )));
        }
        let mut templates = self.templates;
        templates.push_back(template);
        Ok(Self { templates })
    }

    /// Looks up a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetreTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }

    /// Looks up a template by name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownMetre`] if no template has that name.
    pub fn require(&self, name: &str) -> Result<&MetreTemplate> {
        self.get(name).ok_or_else(|| Error::unknown_metre(name))
    }

    /// Returns the template names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(MetreTemplate::name).collect()
    }

    /// Returns the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates over the templates.
    pub fn iter(&self) -> impl Iterator<Item = &MetreTemplate> {
        self.templates.iter()
    }

    /// Scans `line` once and fits it against every template.
    ///
    /// # Errors
    ///
    /// Returns the syllabification error if the line cannot be scanned.
    pub fn fit_line(&self, line: &str, index: usize) -> Result<Vec<MetreFitting>> {
        let scansion = chandas_scanner::scan(line)?;
        Ok(self.fit_scansion(&scansion, index))
    }

    /// Fits an already scanned line against every template.
    #[must_use]
    pub fn fit_scansion(&self, scansion: &Scansion, index: usize) -> Vec<MetreFitting> {
        debug!(index, scansion = %scansion.compact(), metres = self.len(), "fitting line");
        self.templates
            .iter()
            .map(|template| MetreFitting {
                metre: template.name().to_string(),
                fitting: template.fit_scansion(scansion.clone(), index),
            })
            .collect()
    }
}
