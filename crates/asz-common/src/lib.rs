//! Common types and utilities for the asz semantic analyzer.
//!
//! This crate provides foundational types used across all asz crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, codes and message templates)
//! - Centralized limits and thresholds
//! - ECMAScript value conversions (`to_int32`, `to_uint32`, `to_number`, ...)
//! - Source spans
//! - Constant-folded literal values (`PooledValue`)

// Diagnostics - typed problems reported by the semantic passes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, format_message};

// Centralized limits and thresholds
pub mod limits;

// ECMAScript conversion algorithms used by constant coercion
pub mod ecma;

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Constant-pool literal values and their kind tags
pub mod pooled_value;
pub use pooled_value::{PooledValue, ValueKind};

#[cfg(test)]
#[path = "../tests/ecma_tests.rs"]
mod ecma_tests;

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
