//! Syllable weights, scansion sequences, and error types for Chandas.
//!
//! This crate provides:
//! - [`Weight`] - The weight class of one syllable
//! - [`Mark`] and [`Cell`] - The symbol alphabet class tokens match against
//! - [`Scansion`] - An ordered sequence of scanned syllables with layout widths
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scansion;
pub mod weight;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use scansion::{Cell, ScannedSyllable, Scansion};
pub use weight::{Mark, SEPARATOR, Weight};
