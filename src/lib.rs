//! Chandas - Syllabification and metre checking for Pāli verse
//!
//! This crate re-exports all layers of the Chandas system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: chandas_runtime    — Normalisation, reports, REPL, CLI
//! Layer 2: chandas_metre      — Class tokens, fitter, grammars, metre templates
//! Layer 1: chandas_scanner    — Syllabifier and weight assignment
//! Layer 0: chandas_foundation — Core types (Weight, Scansion, Error)
//! ```

pub use chandas_foundation as foundation;
pub use chandas_metre as metre;
pub use chandas_runtime as runtime;
pub use chandas_scanner as scanner;
