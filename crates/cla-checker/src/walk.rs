//! Statement tree walking helpers.
//!
//! Compound statements nest further statement lists (branch bodies, loop
//! bodies, handler bodies, match arms). Callers drive their own recursion and
//! keep function/class definitions out of here because those need scope
//! bookkeeping; every statement kind this function does not recognize simply
//! contributes nothing.

use rustpython_ast::Stmt;

/// Invoke `f` on each statement reachable from `body` without crossing a
/// scope boundary, in source order.
///
/// Compound statements (branches, loops, `with`, `try`, `match`) are
/// descended into; function and class definitions are yielded but their
/// bodies are not entered. Class bodies use this so declarations and method
/// definitions wrapped in conditionals (`if TYPE_CHECKING:` and similar)
/// still surface at class scope.
pub(crate) fn each_scope_stmt<'a>(body: &'a [Stmt], f: &mut impl FnMut(&'a Stmt)) {
    for stmt in body {
        f(stmt);
        if matches!(
            stmt,
            Stmt::FunctionDef(_) | Stmt::AsyncFunctionDef(_) | Stmt::ClassDef(_)
        ) {
            continue;
        }
        let mut nested: Vec<&[Stmt]> = Vec::new();
        each_nested_body(stmt, &mut |b| nested.push(b));
        for b in nested {
            each_scope_stmt(b, f);
        }
    }
}

/// Invoke `f` on each statement list nested directly inside `stmt`.
///
/// Function and class bodies are deliberately not yielded; the scope stack
/// discipline around those lives with the caller.
pub(crate) fn each_nested_body<'a>(stmt: &'a Stmt, f: &mut impl FnMut(&'a [Stmt])) {
    match stmt {
        Stmt::If(s) => {
            f(&s.body);
            f(&s.orelse);
        }
        Stmt::While(s) => {
            f(&s.body);
            f(&s.orelse);
        }
        Stmt::For(s) => {
            f(&s.body);
            f(&s.orelse);
        }
        Stmt::AsyncFor(s) => {
            f(&s.body);
            f(&s.orelse);
        }
        Stmt::With(s) => f(&s.body),
        Stmt::AsyncWith(s) => f(&s.body),
        Stmt::Try(s) => {
            f(&s.body);
            for handler in &s.handlers {
                let rustpython_ast::ExceptHandler::ExceptHandler(h) = handler;
                f(&h.body);
            }
            f(&s.orelse);
            f(&s.finalbody);
        }
        Stmt::TryStar(s) => {
            f(&s.body);
            for handler in &s.handlers {
                let rustpython_ast::ExceptHandler::ExceptHandler(h) = handler;
                f(&h.body);
            }
            f(&s.orelse);
            f(&s.finalbody);
        }
        Stmt::Match(s) => {
            for case in &s.cases {
                f(&case.body);
            }
        }
        _ => {}
    }
}
