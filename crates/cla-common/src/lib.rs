//! Common types and utilities for the cla checker.
//!
//! This crate provides foundational types used across all cla crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, rule code tables)
//! - Position/`LineMap` types for line/column source locations
//! - The immutable checker registration record (`CheckerInfo`)

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes, format_message};

// Position/LineMap types for line/column source locations
pub mod position;
pub use position::{LineMap, Location};

// Checker registration metadata, initialized once and never mutated
pub mod registry;
pub use registry::{CHECKER, CheckerInfo, RuleInfo};
