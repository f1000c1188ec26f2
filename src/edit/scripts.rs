//! Creating nodes which the cursor then moves into: sub/superscripts, roots and fractions.

use alloc::vec::Vec;

use crate::{node::{Node, NodeBuilder, Root, Style, SubSup}, zipper::{Dir, Focus, ZRow, Zipper}};

/// Which child of a sub/superscript to edit.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Script {
    Sub,
    Sup,
}

impl Zipper {
    /// Moves into a subscript or superscript at the cursor.
    ///
    /// If there's already a sub/superscript node just after or just before the cursor, that node is
    /// entered rather than creating another one next to it, adding the requested child if it was
    /// missing. Anything selected is moved into the child being entered.
    pub fn subsup(self, script: Script, ids: &mut NodeBuilder) -> Zipper {
        let (mut zipper, selection) = self.take_selection();
        let selected = selection.unwrap_or_default();

        // Prefer the node after the cursor, entering it at the start of the child
        let (existing, edge) = if matches!(zipper.row.right.first(), Some(Node::SubSup(_))) {
            (Some(zipper.row.right.remove(0)), Dir::Left)
        } else if matches!(zipper.row.left.last(), Some(Node::SubSup(_))) {
            (zipper.row.left.pop(), Dir::Right)
        } else {
            (None, Dir::Right)
        };

        let (id, style, sub, sup) = match existing {
            Some(Node::SubSup(SubSup { id, sub, sup, style })) => (id, style, sub, sup),
            _ => (ids.next_id(), Style::default(), None, None),
        };

        let (focus, child) = match script {
            Script::Sub => (Focus::Sub { id, style, sup }, sub.unwrap_or_else(|| ids.empty_row())),
            Script::Sup => (Focus::Sup { id, style, sub }, sup.unwrap_or_else(|| ids.empty_row())),
        };

        let mut child = ZRow::at_edge(child, edge);
        child.left.extend(selected);
        zipper.enter_new(focus, child)
    }

    /// Creates a root at the cursor. Anything selected becomes the radicand.
    ///
    /// With `with_index`, the cursor moves into the root's index. Asking for an index straight
    /// after a root which doesn't have one adds an index to that root instead.
    pub fn root(self, with_index: bool, ids: &mut NodeBuilder) -> Zipper {
        let had_selection = self.has_selection();
        let (mut zipper, selection) = self.take_selection();
        let selected = selection.unwrap_or_default();

        if with_index && !had_selection {
            if let Some(Node::Root(Root { index: None, .. })) = zipper.row.left.last() {
                if let Some(Node::Root(Root { id, radicand, style, .. })) = zipper.row.left.pop() {
                    let index = ZRow::new(ids.empty_row(), 0);
                    return zipper.enter_new(Focus::Index { id, style, radicand }, index);
                }
            }
        }

        let id = ids.next_id();
        if with_index {
            let radicand = ids.row(selected);
            let index = ZRow::new(ids.empty_row(), 0);
            zipper.enter_new(Focus::Index { id, style: Style::default(), radicand }, index)
        } else {
            let radicand = ZRow::at_edge(ids.row(selected), Dir::Right);
            zipper.enter_new(Focus::Radicand { id, style: Style::default(), index: None }, radicand)
        }
    }

    /// Creates a fraction at the cursor.
    ///
    /// Anything selected becomes the numerator. Without a selection, the numerator is the run of
    /// nodes just before the cursor, back to the nearest operator. Either way, the cursor moves into
    /// the denominator, or into the numerator if that was left empty.
    pub fn frac(self, ids: &mut NodeBuilder) -> Zipper {
        let (mut zipper, selection) = self.take_selection();

        let numerator: Vec<Node> = match selection {
            Some(nodes) => nodes,
            None => {
                let start = zipper.row.left.iter().rposition(Node::is_operator).map_or(0, |i| i + 1);
                zipper.row.left.split_off(start)
            }
        };

        let id = ids.next_id();
        if numerator.is_empty() {
            let denominator = ids.empty_row();
            let numerator = ZRow::new(ids.empty_row(), 0);
            zipper.enter_new(Focus::Numerator { id, style: Style::default(), denominator }, numerator)
        } else {
            let numerator = ids.row(numerator);
            let denominator = ZRow::new(ids.empty_row(), 0);
            zipper.enter_new(Focus::Denominator { id, style: Style::default(), numerator }, denominator)
        }
    }
}
