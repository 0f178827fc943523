//! Robustness of assignment-target classification: multiple simultaneous
//! targets, exotic right-hand sides, and shapes that must be skipped.

use cla_checker::check_module;
use cla_common::{Diagnostic, LineMap};
use rustpython_parser::{Parse, ast};

fn diagnostics(source: &str) -> Vec<Diagnostic> {
    let body = ast::Suite::parse(source, "test.py").expect("valid source");
    let line_map = LineMap::new(source);
    check_module(&body, "test.py", &line_map)
}

#[test]
fn test_call_right_hand_side_is_not_a_target() {
    let source = r"
class Sensor:
    def __init__(self):
        self.value = compute()

    def refresh(self):
        self.value = compute()
";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn test_multi_target_assignment_defines_each_attribute_independently() {
    let source = r"
class Pair:
    def __init__(self):
        self.a = self.b = 0

    def reset(self):
        self.a = 0
        self.b = 0
";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn test_multi_target_assignment_flags_each_attribute_independently() {
    let source = r"
class Pair:
    def reset(self):
        self.a = self.b = 0
";
    let diags = diagnostics(source);
    assert_eq!(diags.len(), 2, "a and b are independent candidates: {diags:?}");
    assert!(diags[0].message_text.contains("'a'"));
    assert!(diags[1].message_text.contains("'b'"));
}

#[test]
fn test_mixed_name_and_attribute_targets() {
    let source = r"
class Pair:
    def reset(self):
        total = self.a = 0
";
    let diags = diagnostics(source);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message_text.contains("'a'"));
}

#[test]
fn test_tuple_unpacked_attribute_targets_are_not_definitions() {
    let source = r"
class Point:
    def __init__(self):
        self.x, self.y = 0, 0

    def move(self):
        self.x = 1
";
    let diags = diagnostics(source);
    assert_eq!(
        diags.len(),
        1,
        "unpacked targets do not define x, so the later write is the first: {diags:?}"
    );
    assert!(diags[0].message_text.contains("'x'"));
}

#[test]
fn test_tuple_unpacked_attribute_targets_are_not_violations_either() {
    let source = r"
class Point:
    def move(self):
        self.x, self.y = 1, 2
";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn test_subscript_and_nested_attribute_targets_are_skipped() {
    let source = r"
class Table:
    def __init__(self):
        self.rows = []

    def update(self):
        self.rows[0] = None
        self.rows.append = None
";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn test_annotated_attribute_assignment_in_method_is_flagged() {
    let source = r"
class Item:
    def label(self):
        self.tag: str = 'x'
";
    let diags = diagnostics(source);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message_text.contains("'tag'"));
}

#[test]
fn test_annotated_attribute_assignment_in_init_defines() {
    let source = r"
class Item:
    def __init__(self):
        self.tag: str = 'x'

    def relabel(self):
        self.tag = 'y'
";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn test_comprehension_right_hand_side_is_handled() {
    let source = r"
class Bag:
    def fill(self, items):
        self.items = [i for i in items if i.ok]
";
    let diags = diagnostics(source);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message_text.contains("'items'"));
}

#[test]
fn test_starred_and_complex_targets_do_not_crash() {
    let source = r"
class Messy:
    def shuffle(self, rest):
        a, *rest = rest
        [x, y] = rest
        (self.u, v) = (1, 2)
";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn test_attribute_write_in_try_finally_and_match() {
    let source = r"
class Flow:
    def run(self, cmd):
        try:
            self.started = True
        finally:
            self.finished = True
        match cmd:
            case 'go':
                self.mode = 'fast'
";
    let diags = diagnostics(source);
    assert_eq!(diags.len(), 3, "got: {diags:?}");
    let attrs: Vec<_> = diags
        .iter()
        .map(|d| d.message_text.split('\'').nth(1).unwrap().to_owned())
        .collect();
    assert_eq!(attrs, vec!["started", "finished", "mode"]);
}
