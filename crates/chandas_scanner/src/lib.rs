//! Syllabifier for transliterated Pāli verse.
//!
//! This crate provides:
//! - [`Syllabifier`] - Splits a line into [`Syllable`]s, one grammar step at a time
//! - [`segment_next`] - The single-step syllable grammar
//! - [`scan`] - Convenience conversion from a line to its [`Scansion`]
//!
//! [`Scansion`]: chandas_foundation::Scansion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod span;
pub mod syllabifier;
pub mod syllable;

pub use span::{Cursor, Span};
pub use syllabifier::{ALTERNATIVES, Alternative, Shape, Syllabifier, scan, segment_next, syllabify};
pub use syllable::{Syllable, SyllableKind};
