//! Diagnostic records produced by the checker.
//!
//! A diagnostic carries a stable rule code (`CLA001`), the file it was found
//! in, a 1-based line, a 0-based column, and a pre-rendered message. The
//! message always starts with the rule code so the rendered output matches
//! the host-facing shape `"CLA001 attribute 'x' not defined prior to
//! assignment"`.

use serde::Serialize;

use crate::position::Location;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

pub mod diagnostic_codes {
    /// Attribute not defined in the class body, `__init__`, or `__post_init__`
    /// before its first assignment.
    pub const CLA001: &str = "CLA001";
}

pub mod diagnostic_messages {
    /// Template for `CLA001`; `{0}` is the attribute name.
    pub const ATTRIBUTE_NOT_DEFINED_PRIOR_TO_ASSIGNMENT: &str =
        "attribute '{0}' not defined prior to assignment";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    /// Stable rule identifier, e.g. `"CLA001"`.
    pub code: &'static str,
    /// Identifying tag of the emitting checker, `"<name> <version>"`, so the
    /// record can be merged with diagnostics from unrelated checkers.
    pub checker: &'static str,
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column offset.
    pub column: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn warning(
        file: impl Into<String>,
        location: Location,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            checker: crate::registry::CHECKER_TAG,
            file: file.into(),
            line: location.line,
            column: location.column,
            message_text: format!("{code} {}", message.into()),
        }
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
