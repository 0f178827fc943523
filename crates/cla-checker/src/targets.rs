//! Assignment Target Classification
//!
//! An assignment statement may have several simultaneous targets
//! (`a = b.x = 1`) and a right-hand side of any shape, including calls and
//! comprehensions. Each target is classified independently; the right-hand
//! side is never inspected as if it were a target.
//!
//! Only the direct shape `<name>.<attribute>` counts as an instance-attribute
//! target. Tuple/list-unpacked attribute elements (`self.a, self.b = 0, 0`),
//! subscripted targets (`self.a[0] = v`), and deeper attribute chains
//! (`self.a.b = v`) do not match and are skipped silently, as is every
//! target shape the checker does not recognize.

use rustpython_ast::{Expr, Stmt};
use smallvec::SmallVec;

/// An attribute-assignment target candidate: `<base>.<attr>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttrTarget<'a> {
    pub base: &'a str,
    pub attr: &'a str,
}

/// Collect the direct `<name>.<attribute>` targets of an assignment
/// statement. Non-assignment statements yield nothing.
pub(crate) fn attribute_targets(stmt: &Stmt) -> SmallVec<[AttrTarget<'_>; 2]> {
    let mut out = SmallVec::new();
    match stmt {
        Stmt::Assign(assign) => {
            for target in &assign.targets {
                if let Some(candidate) = classify_target(target) {
                    out.push(candidate);
                }
            }
        }
        Stmt::AnnAssign(assign) => {
            if let Some(candidate) = classify_target(&assign.target) {
                out.push(candidate);
            }
        }
        Stmt::AugAssign(assign) => {
            if let Some(candidate) = classify_target(&assign.target) {
                out.push(candidate);
            }
        }
        _ => {}
    }
    out
}

/// Classify a single target expression, rejecting anything that is not
/// exactly `<name>.<attribute>`.
fn classify_target(target: &Expr) -> Option<AttrTarget<'_>> {
    match target {
        Expr::Attribute(attribute) => match attribute.value.as_ref() {
            Expr::Name(base) => Some(AttrTarget {
                base: base.id.as_str(),
                attr: attribute.attr.as_str(),
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Collect the simple-name targets a class-body statement defines: a plain
/// assignment to one or more names, or an annotated declaration with or
/// without a value. Unpacked targets are not simple names and contribute
/// nothing.
pub(crate) fn class_body_names(stmt: &Stmt) -> SmallVec<[&str; 2]> {
    let mut out = SmallVec::new();
    match stmt {
        Stmt::Assign(assign) => {
            for target in &assign.targets {
                if let Expr::Name(name) = target {
                    out.push(name.id.as_str());
                }
            }
        }
        Stmt::AnnAssign(assign) => {
            if let Expr::Name(name) = assign.target.as_ref() {
                out.push(name.id.as_str());
            }
        }
        _ => {}
    }
    out
}
