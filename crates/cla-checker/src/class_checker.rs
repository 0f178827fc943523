//! Class Attribute Checking Module
//!
//! This module contains the two passes run per class definition:
//! - Definition collection: class-body declarations plus every instance
//!   attribute assigned anywhere inside `__init__` / `__post_init__`
//! - Violation detection: the first out-of-order assignment to each
//!   attribute in any other method (CLA001)
//!
//! Both passes share one statement walker that tracks the instance-reference
//! identifier through arbitrarily nested function definitions via the scope
//! stack, and both skip `@classmethod` / `@staticmethod` methods, whose first
//! parameter is not an instance reference.

use rustc_hash::FxHashSet;
use rustpython_ast::{Arguments, Expr, Ranged, Stmt, StmtClassDef};

use crate::state::CheckerState;
use crate::targets::{attribute_targets, class_body_names};
use crate::walk::{each_nested_body, each_scope_stmt};

/// Uniform view of a class-scope method definition, sync or async.
#[derive(Clone, Copy)]
pub(crate) struct MethodDef<'a> {
    pub name: &'a str,
    pub args: &'a Arguments,
    pub body: &'a [Stmt],
    pub decorator_list: &'a [Expr],
}

impl<'a> MethodDef<'a> {
    pub(crate) fn from_stmt(stmt: &'a Stmt) -> Option<Self> {
        match stmt {
            Stmt::FunctionDef(f) => Some(Self {
                name: f.name.as_str(),
                args: &*f.args,
                body: &f.body,
                decorator_list: &f.decorator_list,
            }),
            Stmt::AsyncFunctionDef(f) => Some(Self {
                name: f.name.as_str(),
                args: &*f.args,
                body: &f.body,
                decorator_list: &f.decorator_list,
            }),
            _ => None,
        }
    }

    /// `@classmethod` / `@staticmethod` methods carry no instance reference
    /// and are excluded from both passes. Only plain-name decorators are
    /// recognized.
    pub(crate) fn has_special_decorator(&self) -> bool {
        self.decorator_list.iter().any(|d| match d {
            Expr::Name(name) => matches!(name.id.as_str(), "classmethod" | "staticmethod"),
            _ => false,
        })
    }
}

/// Per-class analysis state, discarded once the class has yielded its
/// diagnostics.
pub(crate) struct ClassContext<'a> {
    /// Attribute names considered defined at a top-level location.
    pub defined: FxHashSet<String>,
    /// The `__post_init__` hook, when the class opts into that convention.
    pub post_init: Option<MethodDef<'a>>,
}

#[derive(Clone, Copy)]
enum Pass {
    /// Record every instance-attribute assignment as a definition.
    Collect,
    /// Report the first assignment to each not-yet-defined attribute.
    Detect,
}

impl CheckerState<'_> {
    /// Run both passes over one class definition.
    pub(crate) fn check_class_def(&mut self, class: &StmtClassDef) {
        let mut ctx = self.collect_definitions(class);
        tracing::trace!(
            class = class.name.as_str(),
            defined = ctx.defined.len(),
            post_init = ctx.post_init.is_some(),
            "checking class definition"
        );
        self.detect_violations(class, &mut ctx);
        debug_assert!(self.scopes.is_empty(), "scope frames leaked across a class");
    }

    /// Definition collection (first pass): class-body names, then every
    /// attribute assigned through the instance reference anywhere inside the
    /// initializer and the post-init hook, nested closures included.
    ///
    /// Class-scope declarations and method definitions wrapped in class-body
    /// conditionals (`if TYPE_CHECKING:` and similar) count the same as
    /// unconditional ones.
    fn collect_definitions<'a>(&mut self, class: &'a StmtClassDef) -> ClassContext<'a> {
        let mut defined = FxHashSet::default();
        // Branch-conditional definitions can yield several initializers; every
        // one of them contributes.
        let mut initializers: Vec<MethodDef<'a>> = Vec::new();
        let mut post_init = None;
        each_scope_stmt(&class.body, &mut |stmt| {
            for name in class_body_names(stmt) {
                defined.insert(name.to_owned());
            }
            let Some(method) = MethodDef::from_stmt(stmt) else {
                return;
            };
            if method.has_special_decorator() {
                return;
            }
            match method.name {
                "__init__" => initializers.push(method),
                "__post_init__" => {
                    initializers.push(method);
                    post_init = Some(method);
                }
                _ => {}
            }
        });

        for method in initializers {
            self.scopes.enter_method(method.args);
            self.scan_body(method.body, &mut defined, Pass::Collect);
            self.scopes.exit();
        }

        ClassContext { defined, post_init }
    }

    /// Violation detection (second pass): every method other than the
    /// initializer and post-init hook, in source order. The first assignment
    /// to an undefined attribute is reported and then treated as defined so
    /// repeats stay silent.
    fn detect_violations(&mut self, class: &StmtClassDef, ctx: &mut ClassContext<'_>) {
        let mut methods: Vec<MethodDef<'_>> = Vec::new();
        each_scope_stmt(&class.body, &mut |stmt| {
            if let Some(method) = MethodDef::from_stmt(stmt) {
                methods.push(method);
            }
        });
        for method in methods {
            if matches!(method.name, "__init__" | "__post_init__") {
                continue;
            }
            if method.has_special_decorator() {
                continue;
            }
            self.scopes.enter_method(method.args);
            self.scan_body(method.body, &mut ctx.defined, Pass::Detect);
            self.scopes.exit();
        }
    }

    /// Walk one statement list depth-first, observing instance-attribute
    /// assignment targets. Nested function definitions push an inheriting
    /// scope frame; nested class definitions are left alone (the dispatch
    /// loop analyzes them independently).
    fn scan_body(&mut self, body: &[Stmt], defined: &mut FxHashSet<String>, pass: Pass) {
        for stmt in body {
            self.observe_assignment(stmt, defined, pass);
            match stmt {
                Stmt::FunctionDef(f) => {
                    self.scopes.enter_function();
                    self.scan_body(&f.body, defined, pass);
                    self.scopes.exit();
                }
                Stmt::AsyncFunctionDef(f) => {
                    self.scopes.enter_function();
                    self.scan_body(&f.body, defined, pass);
                    self.scopes.exit();
                }
                Stmt::ClassDef(_) => {}
                _ => {
                    let mut nested: Vec<&[Stmt]> = Vec::new();
                    each_nested_body(stmt, &mut |b| nested.push(b));
                    for b in nested {
                        self.scan_body(b, defined, pass);
                    }
                }
            }
        }
    }

    /// Classify one statement's assignment targets against the resolved
    /// instance name. With no resolvable instance name the statement is
    /// inert; target shapes that do not match are skipped silently.
    fn observe_assignment(&mut self, stmt: &Stmt, defined: &mut FxHashSet<String>, pass: Pass) {
        let targets = attribute_targets(stmt);
        if targets.is_empty() {
            return;
        }
        let Some(instance) = self.scopes.current_instance_name() else {
            return;
        };
        let instance = instance.to_owned();
        let offset = u32::from(stmt.range().start());
        for target in targets {
            if target.base != instance {
                continue;
            }
            match pass {
                Pass::Collect => {
                    defined.insert(target.attr.to_owned());
                }
                Pass::Detect => {
                    if !defined.contains(target.attr) {
                        self.report_undefined_attribute(target.attr, offset);
                        defined.insert(target.attr.to_owned());
                    }
                }
            }
        }
    }
}
