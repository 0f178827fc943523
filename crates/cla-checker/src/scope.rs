//! Scope Stack Module
//!
//! This module maintains the chain of enclosing function scopes during the
//! depth-first walk of a class body and resolves which identifier refers to
//! "the instance" at any traversal point. It handles:
//! - Method frames, whose instance name comes from the first declared parameter
//! - Nested function frames, which inherit the enclosing frame's instance name
//! - Resolution when no frame supplies a name (module-level / parameterless)
//!
//! The instance name is never hardcoded to `self`: a method that binds its
//! first parameter as `this` or `s` is tracked just the same. Resolution
//! walks the stack from the top down and returns the nearest frame with a
//! present value, so a zero-parameter closure inside a method still sees the
//! method's instance name, and an empty parameter list never panics.

use rustpython_ast::Arguments;
use smallvec::SmallVec;

/// One function/method scope, pushed on entry and popped on exit.
#[derive(Debug, Clone)]
struct ScopeFrame {
    /// The identifier bound to the instance in this frame, if this frame
    /// establishes one. `None` frames defer to the nearest enclosing frame.
    instance_name: Option<String>,
}

/// Strictly nested stack of function scopes for one class analysis.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    frames: SmallVec<[ScopeFrame; 4]>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push a frame for a direct method of the class under analysis.
    ///
    /// The instance name is the method's first declared parameter
    /// (positional-only parameters come first). A zero-parameter method
    /// establishes no name; detection inside it is simply inert.
    pub(crate) fn enter_method(&mut self, args: &Arguments) {
        let instance_name = args
            .posonlyargs
            .first()
            .or_else(|| args.args.first())
            .map(|param| param.def.arg.as_str().to_owned());
        self.frames.push(ScopeFrame { instance_name });
    }

    /// Push a frame for a nested function definition (a closure with no
    /// implicit instance parameter). It inherits the enclosing frame's
    /// instance name on resolution.
    pub(crate) fn enter_function(&mut self) {
        self.frames.push(ScopeFrame {
            instance_name: None,
        });
    }

    pub(crate) fn exit(&mut self) {
        debug_assert!(!self.frames.is_empty(), "scope exit without matching enter");
        self.frames.pop();
    }

    /// Resolve the active instance name: the nearest frame, top-down, with a
    /// present value. `None` when no enclosing frame established one.
    pub(crate) fn current_instance_name(&self) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.instance_name.as_deref())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustpython_parser::{Parse, ast};

    fn args_of(source: &str) -> Arguments {
        let body = ast::Suite::parse(source, "test.py").expect("valid source");
        match body.into_iter().next() {
            Some(ast::Stmt::FunctionDef(f)) => *f.args,
            other => panic!("expected function def, got {other:?}"),
        }
    }

    #[test]
    fn method_frame_uses_first_parameter() {
        let mut scopes = ScopeStack::new();
        scopes.enter_method(&args_of("def m(self, x): pass"));
        assert_eq!(scopes.current_instance_name(), Some("self"));
        scopes.exit();
        assert!(scopes.is_empty());
    }

    #[test]
    fn method_frame_accepts_unconventional_name() {
        let mut scopes = ScopeStack::new();
        scopes.enter_method(&args_of("def m(this, x): pass"));
        assert_eq!(scopes.current_instance_name(), Some("this"));
    }

    #[test]
    fn positional_only_parameter_counts_first() {
        let mut scopes = ScopeStack::new();
        scopes.enter_method(&args_of("def m(self, /, x): pass"));
        assert_eq!(scopes.current_instance_name(), Some("self"));
    }

    #[test]
    fn zero_parameter_method_resolves_to_none() {
        let mut scopes = ScopeStack::new();
        scopes.enter_method(&args_of("def m(): pass"));
        assert_eq!(scopes.current_instance_name(), None);
    }

    #[test]
    fn nested_function_inherits_enclosing_instance_name() {
        let mut scopes = ScopeStack::new();
        scopes.enter_method(&args_of("def m(obj): pass"));
        scopes.enter_function();
        scopes.enter_function();
        assert_eq!(scopes.current_instance_name(), Some("obj"));
        scopes.exit();
        assert_eq!(scopes.current_instance_name(), Some("obj"));
    }

    #[test]
    fn empty_stack_resolves_to_none() {
        let scopes = ScopeStack::new();
        assert_eq!(scopes.current_instance_name(), None);
    }
}
