use alloc::vec::Vec;

use tracing::debug;

use crate::{node::{Delimited, Node, NodeBuilder, Row, Style}, zipper::{Breadcrumb, BreadcrumbRow, Focus, ZRow, Zipper}};

/// Pairs of delimiters which can be typed.
pub const DELIMITER_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Looks up the pair a delimiter belongs to, and whether it is the opening one.
pub fn delimiter_pair(c: char) -> Option<(char, char, bool)> {
    DELIMITER_PAIRS.iter().find_map(|&(open, close)| {
        if c == open {
            Some((open, close, true))
        } else if c == close {
            Some((open, close, false))
        } else {
            None
        }
    })
}

impl Zipper {
    /// Types a delimiter.
    ///
    /// With a selection, the selection is wrapped in a complete pair. Otherwise:
    ///   - An opening delimiter commits a pending opening delimiter of the group the cursor is in,
    ///     or else starts a new group. A new group has a pending closing delimiter, so it contains
    ///     everything from the cursor to the end of the row.
    ///   - A closing delimiter does the same in reverse, committing the pending closing delimiter of
    ///     the enclosing group or wrapping everything before the cursor in a new group.
    ///
    /// Characters which aren't delimiters are ignored.
    pub fn parens(self, c: char, ids: &mut NodeBuilder) -> Zipper {
        let (open, close, opening) = match delimiter_pair(c) {
            Some(pair) => pair,
            None => return self,
        };

        if self.has_selection() {
            let (zipper, selection) = self.take_selection();
            let inner = selection.unwrap_or_default();
            let node = ids.delimited(inner, open, close);
            return zipper.insert_node(node);
        }

        if opening {
            self.open_delimiter(open, close, ids)
        } else {
            self.close_delimiter(open, close, ids)
        }
    }

    fn open_delimiter(self, open: char, close: char, ids: &mut NodeBuilder) -> Zipper {
        let Zipper { row, mut breadcrumbs } = self;

        // Commit a pending opening delimiter. Everything before the cursor leaves the group.
        if let Some(Breadcrumb { row: parent, focus: Focus::Delimited { left_delim, right_delim, .. } }) = breadcrumbs.last_mut() {
            if left_delim.pending && right_delim.value == close {
                left_delim.pending = false;
                left_delim.value = open;
                let ZRow { id, style, left, selection, right } = row;
                parent.left.extend(left);
                return Zipper { row: ZRow { id, style, left: Vec::new(), selection, right }, breadcrumbs };
            }
        }

        // Start a new group
        let ZRow { id, style, left, selection: _, right } = row;
        let inner = ids.empty_row();
        let delimited_id = ids.next_id();
        let left_delim = ids.atom(open);
        let mut right_delim = ids.atom(close);
        right_delim.pending = true;

        breadcrumbs.push(Breadcrumb {
            row: BreadcrumbRow { id, style, left, selection: None, right: Vec::new() },
            focus: Focus::Delimited { id: delimited_id, style: Style::default(), left_delim, right_delim },
        });
        Zipper {
            row: ZRow { id: inner.id, style: inner.style, left: Vec::new(), selection: None, right },
            breadcrumbs,
        }
    }

    fn close_delimiter(self, open: char, close: char, ids: &mut NodeBuilder) -> Zipper {
        let Zipper { row, mut breadcrumbs } = self;

        // Commit a pending closing delimiter. Everything after the cursor leaves the group.
        match breadcrumbs.pop() {
            Some(Breadcrumb { row: parent, focus: Focus::Delimited { id, style, left_delim, mut right_delim } })
                if right_delim.pending && left_delim.value == open =>
            {
                debug!(id, "committing closing delimiter");
                right_delim.pending = false;
                right_delim.value = close;

                let ZRow { id: row_id, style: row_style, left, selection: _, right } = row;
                let node = Node::Delimited(Delimited {
                    id,
                    inner: Row { id: row_id, children: left, style: row_style },
                    left_delim,
                    right_delim,
                    style,
                });

                let BreadcrumbRow { id: parent_id, style: parent_style, left: mut parent_left, selection: _, right: parent_right } = parent;
                parent_left.push(node);
                let mut after = right;
                after.extend(parent_right);
                return Zipper {
                    row: ZRow { id: parent_id, style: parent_style, left: parent_left, selection: None, right: after },
                    breadcrumbs,
                };
            }
            other => breadcrumbs.extend(other),
        }

        // Wrap everything before the cursor in a new group with a pending opening delimiter
        let ZRow { id, style, left, selection: _, right } = row;
        let delimited_id = ids.next_id();
        let mut left_delim = ids.atom(open);
        left_delim.pending = true;
        let right_delim = ids.atom(close);
        let node = Node::Delimited(Delimited {
            id: delimited_id,
            inner: ids.row(left),
            left_delim,
            right_delim,
            style: Style::default(),
        });

        Zipper { row: ZRow { id, style, left: alloc::vec![node], selection: None, right }, breadcrumbs }
    }
}
