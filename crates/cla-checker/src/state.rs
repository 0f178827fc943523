//! Checker state and per-module dispatch.
//!
//! `CheckerState` is the transient state of one module analysis: the file
//! name, the line map for offset resolution, the scope stack, and the
//! accumulated diagnostics. It is a pure function of the parsed module; no
//! state survives across invocations.

use cla_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use cla_common::{Diagnostic, LineMap, format_message};
use rustpython_ast::Stmt;

use crate::scope::ScopeStack;
use crate::walk::each_nested_body;

pub struct CheckerState<'a> {
    file: String,
    line_map: &'a LineMap,
    pub(crate) scopes: ScopeStack,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CheckerState<'a> {
    pub fn new(file: impl Into<String>, line_map: &'a LineMap) -> Self {
        Self {
            file: file.into(),
            line_map,
            scopes: ScopeStack::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Analyze every class definition in the module, in source order.
    ///
    /// Classes nested inside other classes or functions are found too; each
    /// is analyzed independently with its own fresh per-class state. A module
    /// with no class definitions yields no diagnostics.
    pub fn check_module(&mut self, body: &[Stmt]) {
        self.visit_for_class_defs(body);
        tracing::debug!(
            file = self.file.as_str(),
            diagnostics = self.diagnostics.len(),
            "module checked"
        );
    }

    fn visit_for_class_defs(&mut self, body: &[Stmt]) {
        for stmt in body {
            match stmt {
                Stmt::ClassDef(class) => {
                    self.check_class_def(class);
                    self.visit_for_class_defs(&class.body);
                }
                Stmt::FunctionDef(f) => self.visit_for_class_defs(&f.body),
                Stmt::AsyncFunctionDef(f) => self.visit_for_class_defs(&f.body),
                _ => {
                    let mut nested: Vec<&[Stmt]> = Vec::new();
                    each_nested_body(stmt, &mut |b| nested.push(b));
                    for b in nested {
                        self.visit_for_class_defs(b);
                    }
                }
            }
        }
    }

    pub(crate) fn report_undefined_attribute(&mut self, attr: &str, offset: u32) {
        let location = self.line_map.location(offset);
        let message = format_message(
            diagnostic_messages::ATTRIBUTE_NOT_DEFINED_PRIOR_TO_ASSIGNMENT,
            &[attr],
        );
        tracing::debug!(
            file = self.file.as_str(),
            line = location.line,
            column = location.column,
            attr,
            "CLA001"
        );
        self.diagnostics.push(Diagnostic::warning(
            self.file.clone(),
            location,
            diagnostic_codes::CLA001,
            message,
        ));
    }
}
