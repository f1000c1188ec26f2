use alloc::vec::Vec;

use tracing::debug;

use crate::{node::{Delimited, Node, SubSup}, zipper::{Breadcrumb, BreadcrumbRow, Focus, ZRow, Zipper}};

impl Zipper {
    /// Deletes the selection, or the item behind the cursor.
    ///
    /// Composite nodes are never deleted in one go:
    ///   - Backspacing into a composite node moves into it instead, so that the next backspace acts
    ///     on its content.
    ///   - Backspacing at the start of a child unwraps the node, splicing the content of all of its
    ///     children into the surrounding row. A sub/superscript with both children only loses the
    ///     one the cursor is in.
    ///   - Delimiters are removed one at a time; see [Zipper::backspace_delimiter].
    ///
    /// At the start of a table cell, the cursor moves left rather than unwrapping the table.
    pub fn backspace(self) -> Zipper {
        if self.has_selection() {
            let (zipper, _) = self.take_selection();
            return zipper;
        }

        let Zipper { mut row, breadcrumbs } = self;
        match row.left.pop() {
            Some(Node::Atom(_)) => Zipper { row, breadcrumbs },

            Some(Node::Delimited(d)) => Zipper { row, breadcrumbs }.backspace_delimiter(d),

            Some(other) => {
                row.left.push(other);
                Zipper { row, breadcrumbs }.move_left()
            }

            None => Zipper { row, breadcrumbs }.backspace_at_start(),
        }
    }

    /// Deletes the right delimiter of a [Delimited] node which was just behind the cursor.
    ///
    /// A committed right delimiter becomes pending, and the cursor goes back inside the node. With
    /// nothing left to close it, the group now runs to the end of its row, so the node absorbs
    /// everything after it. If either delimiter was already pending, the node is unwrapped.
    fn backspace_delimiter(self, mut delimited: Delimited) -> Zipper {
        let Zipper { mut row, mut breadcrumbs } = self;

        if delimited.left_delim.pending || delimited.right_delim.pending {
            debug!(id = delimited.id, "unwrapping delimited group");
            row.left.extend(delimited.inner.children);
            return Zipper { row, breadcrumbs };
        }

        delimited.right_delim.pending = true;
        let Delimited { id, inner, left_delim, right_delim, style } = delimited;
        let ZRow { id: row_id, style: row_style, left, selection: _, right } = row;

        breadcrumbs.push(Breadcrumb {
            row: BreadcrumbRow { id: row_id, style: row_style, left, selection: None, right: Vec::new() },
            focus: Focus::Delimited { id, style, left_delim, right_delim },
        });
        Zipper {
            row: ZRow { id: inner.id, style: inner.style, left: inner.children, selection: None, right },
            breadcrumbs,
        }
    }

    fn backspace_at_start(self) -> Zipper {
        let Zipper { row, mut breadcrumbs } = self;
        let Breadcrumb { row: parent, focus } = match breadcrumbs.pop() {
            Some(crumb) => crumb,
            None => return Zipper { row, breadcrumbs },
        };

        // The cursor is at the start of its row, so everything in it is to the right
        let current = row.right;

        let unwrapped = match focus {
            Focus::Delimited { id, style, mut left_delim, right_delim } => {
                if left_delim.pending || right_delim.pending {
                    debug!(id, "unwrapping delimited group");
                    unwrap_into(parent, Vec::new(), current, Vec::new())
                } else {
                    // The group now starts at the start of its row
                    left_delim.pending = true;
                    let BreadcrumbRow { id: parent_id, style: parent_style, left, selection: _, right } = parent;
                    breadcrumbs.push(Breadcrumb {
                        row: BreadcrumbRow { id: parent_id, style: parent_style, left: Vec::new(), selection: None, right },
                        focus: Focus::Delimited { id, style, left_delim, right_delim },
                    });
                    return Zipper {
                        row: ZRow { id: row.id, style: row.style, left, selection: None, right: current },
                        breadcrumbs,
                    };
                }
            }

            focus @ Focus::Cell(_) => {
                let row = ZRow { left: Vec::new(), right: current, ..row };
                breadcrumbs.push(Breadcrumb { row: parent, focus });
                return Zipper { row, breadcrumbs }.move_left();
            }

            // Demote to a single superscript, which stays after the old subscript's content
            Focus::Sub { id, style, sup: Some(sup) } => {
                let remaining = Node::SubSup(SubSup { id, sub: None, sup: Some(sup), style });
                let mut after = current;
                after.push(remaining);
                unwrap_into(parent, Vec::new(), after, Vec::new())
            }

            // Demote to a single subscript
            Focus::Sup { id, style, sub: Some(sub) } => {
                let remaining = Node::SubSup(SubSup { id, sub: Some(sub), sup: None, style });
                unwrap_into(parent, alloc::vec![remaining], current, Vec::new())
            }

            Focus::Sub { sup: None, .. } | Focus::Sup { sub: None, .. } =>
                unwrap_into(parent, Vec::new(), current, Vec::new()),

            Focus::Numerator { denominator, .. } =>
                unwrap_into(parent, Vec::new(), current, denominator.children),
            Focus::Denominator { numerator, .. } =>
                unwrap_into(parent, numerator.children, current, Vec::new()),

            Focus::Index { radicand, .. } =>
                unwrap_into(parent, Vec::new(), current, radicand.children),
            Focus::Radicand { index, .. } =>
                unwrap_into(parent, index.map(|r| r.children).unwrap_or_default(), current, Vec::new()),

            Focus::Lower { upper, .. } =>
                unwrap_into(parent, Vec::new(), current, upper.map(|r| r.children).unwrap_or_default()),
            Focus::Upper { lower, .. } =>
                unwrap_into(parent, lower.children, current, Vec::new()),
        };

        Zipper { row: unwrapped, breadcrumbs }
    }
}

/// Replaces the focused node in `parent` with `before`, then `current`, then `after`, putting the
/// cursor at the start of `current`.
fn unwrap_into(parent: BreadcrumbRow, before: Vec<Node>, current: Vec<Node>, after: Vec<Node>) -> ZRow {
    let BreadcrumbRow { id, style, mut left, selection: _, right } = parent;
    left.extend(before);

    let mut new_right = current;
    new_right.extend(after);
    new_right.extend(right);

    ZRow { id, style, left, selection: None, right: new_right }
}
