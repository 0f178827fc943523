//! Checker registration metadata.
//!
//! The host-facing identity of this checker (name, version, declared rules)
//! is process-wide, read-only state. It is modeled as an immutable constant
//! handed to whoever renders `--version` or per-rule listings, never as
//! mutable global state.

use crate::diagnostics::{diagnostic_codes, diagnostic_messages};

/// One declared lint rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuleInfo {
    pub code: &'static str,
    /// Message template, `{0}`-style placeholders.
    pub message: &'static str,
}

/// Identity of the checker as consumed by plugin-listing surfaces.
#[derive(Copy, Clone, Debug)]
pub struct CheckerInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub rules: &'static [RuleInfo],
}

pub const CHECKER: CheckerInfo = CheckerInfo {
    name: "cla",
    version: env!("CARGO_PKG_VERSION"),
    rules: &[RuleInfo {
        code: diagnostic_codes::CLA001,
        message: diagnostic_messages::ATTRIBUTE_NOT_DEFINED_PRIOR_TO_ASSIGNMENT,
    }],
};

/// `"<name> <version>"` tag stamped on every emitted diagnostic.
pub const CHECKER_TAG: &str = concat!("cla ", env!("CARGO_PKG_VERSION"));
