//! Metre templates.
//!
//! A [`MetreTemplate`] owns a family of named [`Structure`] variants, each
//! compiled once into a [`LineGrammar`]. A selection rule picks the eligible
//! variants for a line index, and an adjustment rule turns a raw scansion
//! into a corrected one for a variant.

use std::fmt;
use std::sync::Arc;

use chandas_foundation::{Error, ErrorContext, ErrorKind, Result, Scansion};
use tracing::{debug, warn};

use crate::fitter::{Fitter, FittingTrace};
use crate::grammar::{LineGrammar, LineMatch};
use crate::structure::Structure;

/// Picks eligible variant names for a line index.
///
/// Receives the line index and every variant name in definition order.
pub type Selector = Arc<dyn Fn(usize, &[String]) -> Vec<String> + Send + Sync>;

/// Computes the corrected scansion for a variant.
///
/// Receives the raw scansion, the variant name and the whole-line match, if
/// any. Returns `None` to decline.
pub type Adjuster =
    Arc<dyn Fn(&Scansion, &str, Option<&LineMatch>) -> Option<Scansion> + Send + Sync>;

/// A named structure with its compiled grammar.
#[derive(Clone, Debug)]
pub struct Variant {
    /// Variant name, unique within its template.
    pub name: String,
    /// The structure.
    pub structure: Structure,
    /// The compiled whole-line grammar.
    pub grammar: LineGrammar,
}

impl Variant {
    /// Parses and compiles a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the structure does not parse or compile.
    pub fn new(name: impl Into<String>, structure: &str) -> Result<Self> {
        let name = name.into();
        let structure = Structure::parse(structure)
            .map_err(|e| e.with_context(ErrorContext::new().with_frame(format!("variant {name}"))))?;
        let grammar = LineGrammar::compile(&structure)?;
        Ok(Self {
            name,
            structure,
            grammar,
        })
    }
}

/// A family of metrical variants with its selection and adjustment rules.
#[derive(Clone)]
pub struct MetreTemplate {
    name: String,
    variants: Vec<Variant>,
    selector: Option<Selector>,
    adjuster: Option<Adjuster>,
}

impl MetreTemplate {
    /// Creates a template from `(name, structure)` pairs, in order.
    ///
    /// Every variant is eligible for every line and the adjustment returns
    /// the raw scansion for matching variants.
    ///
    /// The step fitter never backtracks, so a structure should stay prefix
    /// unambiguous: `y` must be followed by a token that cannot start with a
    /// light syllable. Otherwise the fitter and the whole-line grammar can
    /// disagree, which is only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if no variants are given, a name repeats, or a
    /// structure is invalid.
    pub fn new<N, S>(name: impl Into<String>, variants: impl IntoIterator<Item = (N, S)>) -> Result<Self>
    where
        N: Into<String>,
        S: AsRef<str>,
    {
        let name = name.into();
        let context = || ErrorContext::new().with_source(name.clone());

        let mut compiled: Vec<Variant> = Vec::new();
        for (variant_name, structure) in variants {
            let variant_name = variant_name.into();
            if compiled.iter().any(|v| v.name == variant_name) {
                return Err(Error::new(ErrorKind::DuplicateVariant(variant_name)).with_context(context()));
            }
            let variant = Variant::new(variant_name, structure.as_ref()).map_err(|mut e| {
                let ctx = e.context.take().unwrap_or_default();
                e.with_context(ErrorContext {
                    source: Some(name.clone()),
                    ..ctx
                })
            })?;
            compiled.push(variant);
        }

        if compiled.is_empty() {
            return Err(Error::new(ErrorKind::NoVariants(name.clone())).with_context(context()));
        }

        Ok(Self {
            name,
            variants: compiled,
            selector: None,
            adjuster: None,
        })
    }

    /// Sets the variant-selection rule.
    #[must_use]
    pub fn with_selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(usize, &[String]) -> Vec<String> + Send + Sync + 'static,
    {
        self.selector = Some(Arc::new(selector));
        self
    }

    /// Sets the adjustment rule.
    #[must_use]
    pub fn with_adjuster<F>(mut self, adjuster: F) -> Self
    where
        F: Fn(&Scansion, &str, Option<&LineMatch>) -> Option<Scansion> + Send + Sync + 'static,
    {
        self.adjuster = Some(Arc::new(adjuster));
        self
    }

    /// Returns the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the variants in definition order.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns every variant name in definition order.
    #[must_use]
    pub fn variant_names(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.name.clone()).collect()
    }

    /// Returns the variants eligible for line `index`.
    ///
    /// Names the selector returns that the template does not define are
    /// skipped.
    #[must_use]
    pub fn eligible_variants(&self, index: usize) -> Vec<&Variant> {
        let Some(selector) = &self.selector else {
            return self.variants.iter().collect();
        };
        selector(index, &self.variant_names())
            .iter()
            .filter_map(|name| {
                let variant = self.variant(name);
                if variant.is_none() {
                    warn!(metre = %self.name, variant = %name, "selector chose unknown variant");
                }
                variant
            })
            .collect()
    }

    /// Scans `line` and fits it against every eligible variant.
    ///
    /// # Errors
    ///
    /// Returns the syllabification error if the line cannot be scanned.
    /// Length mismatches and divergence are reported per variant.
    pub fn get_fitting(&self, line: &str, index: usize) -> Result<Fitting> {
        let scansion = chandas_scanner::scan(line)?;
        Ok(self.fit_scansion(scansion, index))
    }

    /// Fits an already scanned line against every eligible variant.
    #[must_use]
    pub fn fit_scansion(&self, scansion: Scansion, index: usize) -> Fitting {
        let fitness = self
            .eligible_variants(index)
            .into_iter()
            .map(|variant| self.fit_variant(&scansion, variant))
            .collect();
        Fitting { scansion, fitness }
    }

    fn fit_variant(&self, scansion: &Scansion, variant: &Variant) -> VariantFitness {
        let fitting = Fitter::new(scansion, &variant.structure).run();
        let line_match = variant.grammar.match_line(scansion);
        let matches = line_match.is_some();

        if fitting.is_complete() != matches {
            warn!(
                metre = %self.name,
                variant = %variant.name,
                scansion = %scansion.compact(),
                "fitter and grammar disagree"
            );
        }

        let adjusted_scansion = match &self.adjuster {
            Some(adjuster) => adjuster(scansion, &variant.name, line_match.as_ref()),
            None => line_match.as_ref().map(|_| scansion.clone()),
        };

        debug!(
            metre = %self.name,
            variant = %variant.name,
            matches,
            outcome = ?fitting.outcome,
            "variant fitted"
        );

        VariantFitness {
            name: variant.name.clone(),
            matches,
            fitting,
            adjusted_scansion,
        }
    }
}

impl fmt::Debug for MetreTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetreTemplate")
            .field("name", &self.name)
            .field("variants", &self.variant_names())
            .field("selector", &self.selector.is_some())
            .field("adjuster", &self.adjuster.is_some())
            .finish()
    }
}

/// The fitting of one line against one template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fitting {
    /// The raw scansion.
    pub scansion: Scansion,
    /// One entry per eligible variant.
    pub fitness: Vec<VariantFitness>,
}

impl Fitting {
    /// Names of the variants whose grammar accepted the line.
    #[must_use]
    pub fn matching_names(&self) -> Vec<&str> {
        self.fitness
            .iter()
            .filter(|f| f.matches)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Returns true if any variant matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.fitness.iter().any(|f| f.matches)
    }
}

/// The fitting of one line against one variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariantFitness {
    /// Variant name.
    pub name: String,
    /// Whole-line grammar verdict.
    pub matches: bool,
    /// Incremental alignment trace.
    pub fitting: FittingTrace,
    /// Corrected scansion, if the adjustment rule produced one.
    pub adjusted_scansion: Option<Scansion>,
}

impl VariantFitness {
    /// Returns true if the fitter and the grammar reached the same verdict.
    #[must_use]
    pub fn fitter_agrees(&self) -> bool {
        self.fitting.is_complete() == self.matches
    }
}
