use alloc::{string::ToString, vec};

use crate::{
    node::NodeBuilder,
    tests::util::{delimited, open_at},
    zipper::{Dir, Focus, State, ZRow, Zipper},
};

/// Whether the (left, right) delimiters of the innermost group are pending.
fn pending(zipper: &Zipper) -> (bool, bool) {
    match &zipper.breadcrumbs.last().unwrap().focus {
        Focus::Delimited { left_delim, right_delim, .. } => (left_delim.pending, right_delim.pending),
        other => panic!("not in a delimited group: {:?}", other),
    }
}

#[test]
fn test_backspace_right_paren() {
    let mut ids = NodeBuilder::new();
    let root = row!(ids, delimited(&mut ids, "2x+5"));
    let zipper = Zipper { row: ZRow::at_edge(root, Dir::Right), breadcrumbs: vec![] };
    assert_eq!(zipper.to_string(), "(2x+5)|");

    let zipper = zipper.backspace();
    assert_eq!(zipper.to_string(), "(2x+5|)");
    assert_eq!(pending(&zipper), (false, true));
    assert_eq!(zipper.row.left.len(), 4);
    assert!(zipper.row.right.is_empty());
}

#[test]
fn test_pending_right_paren_absorbs_following() {
    let mut ids = NodeBuilder::new();
    let root = row!(ids, delimited(&mut ids, "a"), "b");
    let zipper = open_at(root, &[], 1).backspace();
    assert_eq!(zipper.to_string(), "(a|b)");

    let zipper = zipper.move_right().move_right();
    assert_eq!(zipper.to_string(), "(ab)|");

    // Deleting a pending delimiter unwraps the group
    let zipper = zipper.backspace();
    assert_eq!(zipper.to_string(), "ab|");
    assert_eq!(zipper.depth(), 0);
}

#[test]
fn test_backspace_left_paren() {
    let mut ids = NodeBuilder::new();
    let root = row!(ids, "x", delimited(&mut ids, "a"));
    let zipper = open_at(root, &[(1, 0)], 0);
    assert_eq!(zipper.to_string(), "x(|a)");

    let zipper = zipper.backspace();
    assert_eq!(zipper.to_string(), "(x|a)");
    assert_eq!(pending(&zipper), (true, false));

    let zipper = zipper.move_left().backspace();
    assert_eq!(zipper.to_string(), "|xa");
}

#[test]
fn test_open_and_close_paren() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "a", "b").parens('(', &mut ids);
    assert_eq!(zipper.to_string(), "a(|b)");
    assert_eq!(pending(&zipper), (false, true));

    let zipper = zipper.insert_char('c', &mut ids);
    assert_eq!(zipper.to_string(), "a(c|b)");

    // Closing moves everything after the cursor back out of the group
    let zipper = zipper.parens(')', &mut ids);
    assert_eq!(zipper.to_string(), "a(c)|b");
    assert_eq!(zipper.depth(), 0);
}

#[test]
fn test_close_then_open_paren() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "ab", "c").parens(')', &mut ids);
    assert_eq!(zipper.to_string(), "(ab)|c");

    let zipper = zipper.move_left().move_left();
    assert_eq!(zipper.to_string(), "(a|b)c");
    assert_eq!(pending(&zipper), (true, false));

    let zipper = zipper.parens('(', &mut ids);
    assert_eq!(zipper.to_string(), "a(|b)c");
    assert_eq!(pending(&zipper), (false, false));
}

#[test]
fn test_wrap_selection() {
    let mut ids = NodeBuilder::new();
    let state = State::new(zipper!(ids, "", "abc")).start_selecting();
    let state = state.move_right().move_right();

    let zipper = state.zipper.parens('[', &mut ids);
    assert_eq!(zipper.to_string(), "[ab]|c");
    assert!(!zipper.has_selection());
}

#[test]
fn test_parens_ignores_other_chars() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "a", "b");
    assert_eq!(zipper.clone().parens('x', &mut ids), zipper);
}
