//! Integration tests for Layer 2: Metre
//!
//! Tests class tokens, structures, the fitter, whole-line grammars, metre
//! templates, and the registry.

mod templates;
mod tokens;
