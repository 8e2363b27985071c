//! Metrical matching for Chandas.
//!
//! This crate provides:
//! - [`ClassToken`] - The class-token alphabet and its alternative table
//! - [`Structure`] - A parsed metrical variant
//! - [`Fitter`] - Incremental, traceable alignment of a scansion against a structure
//! - [`LineGrammar`] - Whole-line verdicts derived from the same alternative table
//! - [`MetreTemplate`] - A family of variants with selection and adjustment rules
//! - [`MetreRegistry`] - The immutable set of known metres

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fitter;
pub mod grammar;
pub mod registry;
pub mod stdlib;
pub mod structure;
pub mod template;
pub mod token;

pub use fitter::{
    FitCursor, FitError, FitOutcome, FitState, FitStep, Fitter, FittingTrace, TraceEntry, fit_step,
};
pub use grammar::{LineGrammar, LineMatch};
pub use registry::{MetreFitting, MetreRegistry};
pub use structure::Structure;
pub use template::{Adjuster, Fitting, MetreTemplate, Selector, Variant, VariantFitness};
pub use token::ClassToken;
