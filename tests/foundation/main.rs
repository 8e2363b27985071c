//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Weight, Mark, Scansion, and Error.

mod errors;
