//! Text rendering of a zipper: the whole tree, with `|` at the cursor and `{...}` around each
//! row's selected nodes.

use alloc::vec::Vec;
use core::fmt;

use crate::node::{Atom, Node, Row, Style};

use super::{Dir, ZSelection, Zipper};

fn marker(value: char) -> Node {
    Node::Atom(Atom { id: 0, value, pending: false, style: Style::default() })
}

/// Lays out `left`, the selection, and `right`, with `middle` placed at the selection's moving
/// end (or between `left` and `right` without a selection).
fn lay_out(left: Vec<Node>, selection: Option<ZSelection>, middle: Vec<Node>, right: Vec<Node>, span_middle: bool) -> Vec<Node> {
    let mut children = left;
    match selection {
        None => children.extend(middle),
        Some(ZSelection { dir, nodes }) => {
            children.push(marker('{'));
            match (dir, span_middle) {
                (Dir::Right, true) => { children.extend(middle); children.extend(nodes); children.push(marker('}')); }
                (Dir::Left, true) => { children.extend(nodes); children.extend(middle); children.push(marker('}')); }
                (Dir::Right, false) => { children.extend(nodes); children.push(marker('}')); children.extend(middle); }
                (Dir::Left, false) => {
                    // The cursor marker goes before the opening brace
                    children.pop();
                    children.extend(middle);
                    children.push(marker('{'));
                    children.extend(nodes);
                    children.push(marker('}'));
                }
            }
        }
    }
    children.extend(right);
    children
}

impl fmt::Display for Zipper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let zipper = self.clone();

        let children = lay_out(zipper.row.left, zipper.row.selection, alloc::vec![marker('|')], zipper.row.right, false);
        let mut row = Row { id: zipper.row.id, children, style: zipper.row.style };

        for crumb in zipper.breadcrumbs.into_iter().rev() {
            let node = crumb.focus.into_node(row);
            let parent = crumb.row;
            let children = lay_out(parent.left, parent.selection, alloc::vec![node], parent.right, true);
            row = Row { id: parent.id, children, style: parent.style };
        }

        write!(f, "{}", row)
    }
}
