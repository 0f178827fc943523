//! Attribute definition-order analyzer (rule CLA001).
//!
//! Every instance attribute of a class must receive its first assignment in
//! a top-level location: the class body, `__init__`, or `__post_init__`. An
//! attribute first assigned anywhere else — an ordinary method, a nested
//! closure, a branch buried in business logic — is reported at that
//! assignment site.
//!
//! This crate is organized into several submodules:
//! - `state` - `CheckerState` and per-module dispatch over class definitions
//! - `class_checker` - the collect/detect passes run per class
//! - `scope` - scope stack resolving the instance-reference identifier
//! - `targets` - assignment-target classification
//! - `walk` - compound-statement traversal helpers
//!
//! The analyzer consumes an already-parsed tree; it never reads source text
//! itself and never fails: unrecognized node shapes are skipped, and the only
//! condition it surfaces is a positively identified violation.

mod class_checker;
mod scope;
mod state;
mod targets;
mod walk;

pub use state::CheckerState;

use cla_common::{Diagnostic, LineMap};
use rustpython_ast::Stmt;

/// Check one parsed module and return its diagnostics in traversal order.
pub fn check_module(body: &[Stmt], file: &str, line_map: &LineMap) -> Vec<Diagnostic> {
    let mut checker = CheckerState::new(file, line_map);
    checker.check_module(body);
    checker.diagnostics
}
