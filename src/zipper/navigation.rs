//! Horizontal cursor movement.

use super::{Breadcrumb, BreadcrumbRow, Dir, Focus, Step, ZRow, Zipper};

impl Zipper {
    /// Moves the cursor one step left. At the very start of the document, the zipper is returned
    /// unchanged.
    pub fn move_left(self) -> Zipper {
        self.move_horizontally(Dir::Left)
    }

    /// Moves the cursor one step right. At the very end of the document, the zipper is returned
    /// unchanged.
    pub fn move_right(self) -> Zipper {
        self.move_horizontally(Dir::Right)
    }

    /// Moves the cursor one step in the given direction.
    ///
    /// Atoms are stepped over, and composite nodes are entered at the child nearest to the cursor.
    /// Leaving the edge of a child either moves on to the node's next child, or out of the node
    /// altogether.
    ///
    /// If anything is selected, the selection is dropped and the cursor placed at its edge in the
    /// direction of travel instead.
    pub fn move_horizontally(self, toward: Dir) -> Zipper {
        if self.has_selection() {
            return self.collapse_selection(toward);
        }

        let Zipper { mut row, mut breadcrumbs } = self;

        let next = match toward {
            Dir::Left => row.left.pop(),
            Dir::Right if row.right.is_empty() => None,
            Dir::Right => Some(row.right.remove(0)),
        };

        match next {
            // Something to move past or into
            Some(node) => match Focus::enter(node, toward.opposite()) {
                Ok((focus, child)) => {
                    breadcrumbs.push(row.into_breadcrumb(focus));
                    row = ZRow::at_edge(child, toward.opposite());
                }
                Err(atom) => match toward {
                    Dir::Left => row.right.insert(0, atom),
                    Dir::Right => row.left.push(atom),
                },
            },

            // At the edge of a row - leave it, if there's anywhere to go
            None => match breadcrumbs.pop() {
                Some(Breadcrumb { row: parent, focus }) => match focus.step(row.into_row(), toward) {
                    Step::Rotate(focus, child) => {
                        breadcrumbs.push(Breadcrumb { row: parent, focus });
                        row = ZRow::at_edge(child, toward.opposite());
                    }
                    Step::Exit(node) => row = parent.place(node, toward.opposite()),
                },
                None => (),
            },
        }

        Zipper { row, breadcrumbs }
    }

    /// Leaves the innermost composite node, putting the cursor just after it. With no breadcrumbs
    /// the zipper is returned unchanged.
    pub fn exit(self) -> Zipper {
        let Zipper { row, mut breadcrumbs } = self;
        match breadcrumbs.pop() {
            Some(Breadcrumb { row: parent, focus }) => {
                let node = focus.into_node(row.into_row());
                Zipper { row: parent.place(node, Dir::Left), breadcrumbs }
            }
            None => Zipper { row, breadcrumbs },
        }
    }

    /// Pushes a new breadcrumb for a freshly built focus, making `child` the cursor's row with the
    /// cursor at `offset`. The current row becomes the breadcrumb's row, split at the cursor.
    pub(crate) fn enter_new(self, focus: Focus, child: ZRow) -> Zipper {
        let Zipper { row, mut breadcrumbs } = self;
        let ZRow { id, style, left, selection: _, right } = row;
        breadcrumbs.push(Breadcrumb {
            row: BreadcrumbRow { id, style, left, selection: None, right },
            focus,
        });
        Zipper { row: child, breadcrumbs }
    }
}
