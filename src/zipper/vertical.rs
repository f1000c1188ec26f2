//! Vertical cursor movement through fractions and tables.

use super::{Breadcrumb, Dir, ZRow, Zipper};

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum MoveVerticalDirection {
    Up,
    Down,
}

impl Zipper {
    /// Moves the cursor into the child above or below the one it's currently in.
    ///
    /// Say you're in a root at the top of a fraction, and you press down - you'd expect to end up
    /// in the fraction's denominator. So this looks through every ancestor, from the inside out,
    /// for the first one which has a child in the right direction. If there isn't one, the zipper
    /// is returned unchanged.
    pub fn move_vertically(self, direction: MoveVerticalDirection) -> Zipper {
        let zipper = self.collapse_selection(Dir::Right);
        let level = match zipper.breadcrumbs.iter().rposition(|c| c.focus.can_move_vertically(direction)) {
            Some(level) => level,
            None => return zipper,
        };

        let Zipper { row, mut breadcrumbs } = zipper;

        // The horizontal position of the cursor within the child being left. If the cursor is
        // nested further down, that's the position of the node it's inside.
        let position = match breadcrumbs.get(level + 1) {
            Some(inner) => inner.row.focus_index(),
            None => row.offset(),
        };

        let mut inner = breadcrumbs.split_off(level);
        let Breadcrumb { row: parent, focus } = inner.remove(0);
        let child = inner.into_iter().rev().fold(row.into_row(), |child, crumb| crumb.into_row(child));

        let (focus, target) = focus.move_vertically(child, direction);
        breadcrumbs.push(Breadcrumb { row: parent, focus });

        Zipper { row: ZRow::new(target, position), breadcrumbs }
    }

    pub fn move_up(self) -> Zipper {
        self.move_vertically(MoveVerticalDirection::Up)
    }

    pub fn move_down(self) -> Zipper {
        self.move_vertically(MoveVerticalDirection::Down)
    }
}
