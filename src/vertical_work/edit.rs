//! Typing, deleting and moving horizontally within vertical work.

use alloc::vec::Vec;

use tracing::debug;

use crate::{
    node::{is_operator_glyph, Node, NodeBuilder},
    zipper::{Dir, Zipper},
};

use super::{is_operand_cell, is_operator_cell, GridCursor, VerticalWork};

impl VerticalWork {
    /// Types a glyph into the cursor's cell, keeping operators in columns of their own.
    ///
    /// An operator typed into an empty cell fills it, and the cursor moves on to the next cell. One
    /// typed into the middle of a term splits it, with the operator and the rest of the term each
    /// getting a new column. An operand typed into an operator column goes into the next column
    /// instead, making one if needed.
    ///
    /// Below the first two rows, a cursor in a column which is empty all the way down is first
    /// moved to the nearest column which isn't. With no such column, nothing is typed.
    pub fn insert_char(mut self, c: char, ids: &mut NodeBuilder) -> VerticalWork {
        if self.blocked() {
            self = self.settle_in_row();
            if self.blocked() {
                return self;
            }
        }

        let GridCursor { col, row, offset } = self.cursor;

        if is_operator_glyph(c) {
            let glyph = ids.glyph(c);

            if self.current_cell().is_empty() {
                self.current_cell_mut().children.push(glyph);
                if col + 1 == self.col_count() {
                    let end = self.col_count();
                    self.insert_column(end, ids);
                }
                self.cursor = GridCursor { col: col + 1, row, offset: 0 };
            } else {
                let rest = self.current_cell_mut().children.split_off(offset);
                self.insert_column(col + 1, ids);
                self.insert_column(col + 2, ids);
                self.cell_mut(col + 1, row).children.push(glyph);
                self.cell_mut(col + 2, row).children = rest;
                self.cursor = GridCursor { col: col + 2, row, offset: 0 };
                debug!(table = self.table_id, col, "split cell around operator");
            }

            return self.adjust_columns(ids).settle(ids);
        }

        if self.is_operator_column(col) && (self.current_cell().is_empty() || is_operator_cell(self.current_cell())) {
            if !self.current_cell().is_empty() && offset == 0 {
                // Before an operator - the new term goes in a column of its own before it
                self.insert_column(col, ids);
                self.cursor = GridCursor { col, row, offset: 0 };
            } else if col + 1 < self.col_count() && self.cell(col + 1, row).is_empty() {
                self.cursor = GridCursor { col: col + 1, row, offset: 0 };
            } else {
                self.insert_column(col + 1, ids);
                self.cursor = GridCursor { col: col + 1, row, offset: 0 };
            }
        }

        let glyph = ids.glyph(c);
        let offset = self.cursor.offset;
        self.current_cell_mut().children.insert(offset, glyph);
        self.cursor.offset += 1;
        self.adjust_columns(ids)
    }

    /// Deletes backwards within vertical work. Gives back `None` if the item behind the cursor is
    /// a composite node, which is left to ordinary backspacing.
    ///
    /// At the start of a cell, the cursor moves to the end of the previous cell, removing the
    /// column it leaves if that column is entirely empty. Deleting a lone operator merges the terms
    /// either side of it when nothing else is in their columns; deleting a lone term right before
    /// an operator column likewise merges the operator into the term after it.
    ///
    /// Below the first two rows, moving back to the previous cell passes over columns which are
    /// empty all the way down, and does nothing if every column before the cursor is like that.
    pub fn backspace(mut self, ids: &mut NodeBuilder) -> Option<VerticalWork> {
        let GridCursor { col, row, offset } = self.cursor;

        if offset == 0 {
            let target = if row >= 2 {
                (0..col).rev().find(|&c| !self.is_empty_column(c))
            } else {
                col.checked_sub(1)
            };
            let target = match target {
                Some(target) => target,
                None => return Some(self),
            };

            if self.is_empty_column(col) {
                self.columns.remove(col);
                debug!(table = self.table_id, col, "removed empty column");
            }
            let end = self.cell(target, row).len();
            self.cursor = GridCursor { col: target, row, offset: end };
            return Some(self.adjust_columns(ids));
        }

        match &self.current_cell().children[offset - 1] {
            Node::Atom(_) => (),
            _ => return None,
        }

        let lone = self.current_cell().len() == 1;
        if lone && is_operator_cell(self.current_cell()) {
            if col > 0 && self.can_merge(col - 1, col + 1) {
                let after = core::mem::take(&mut self.cell_mut(col + 1, row).children);
                let end = self.cell(col - 1, row).len();
                self.cell_mut(col - 1, row).children.extend(after);
                self.columns.drain(col..col + 2);
                self.cursor = GridCursor { col: col - 1, row, offset: end };
                debug!(table = self.table_id, col, "merged terms around deleted operator");
                return Some(self.adjust_columns(ids));
            }
        } else if lone && col + 2 < self.col_count() && is_operator_cell(self.cell(col + 1, row))
            && self.can_merge(col, col + 2)
        {
            let mut merged: Vec<Node> = core::mem::take(&mut self.cell_mut(col + 1, row).children);
            merged.extend(core::mem::take(&mut self.cell_mut(col + 2, row).children));
            self.cell_mut(col, row).children = merged;
            self.columns.drain(col + 1..col + 3);
            self.cursor = GridCursor { col, row, offset: 0 };
            debug!(table = self.table_id, col, "merged operator into following term");
            return Some(self.adjust_columns(ids));
        }

        self.current_cell_mut().children.remove(offset - 1);
        self.cursor.offset -= 1;
        Some(self.adjust_columns(ids))
    }

    /// True if the columns from `first` to `last` inclusive are all in the table, are empty
    /// outside of the cursor's row, and the cursor's row holds a term in each of `first` and
    /// `last`. The cursor's own cell is left out of the term check.
    fn can_merge(&self, first: usize, last: usize) -> bool {
        let row = self.cursor.row;
        if first >= self.col_count() || last >= self.col_count() || first >= last {
            return false;
        }

        let others_empty = (first..=last).all(|c| {
            (0..self.row_count).filter(|&r| r != row).all(|r| self.cell(c, r).is_empty())
        });
        let terms = [first, last].iter()
            .filter(|&&c| c != self.cursor.col)
            .all(|&c| is_operand_cell(self.cell(c, row)));

        others_empty && terms
    }

    /// True if moving horizontally into this cell should carry on past it.
    fn skipped(&self, col: usize, row: usize) -> bool {
        row >= 2 && self.is_empty_column(col)
    }

    /// True if the cursor is in a cell which can't be edited.
    fn blocked(&self) -> bool {
        self.skipped(self.cursor.col, self.cursor.row)
    }

    /// Moves the cursor out of a cell which can't be edited, repairing the columns again if it
    /// moved.
    fn settle(self, ids: &mut NodeBuilder) -> VerticalWork {
        if self.blocked() {
            self.settle_in_row().adjust_columns(ids)
        } else {
            self
        }
    }
}

impl Zipper {
    /// If the cursor has ended up directly inside a vertical work cell, repairs the table's
    /// columns around it and moves it out of a cell which can't be edited.
    pub(crate) fn settle_vertical_work(self, ids: &mut NodeBuilder) -> Zipper {
        match VerticalWork::from_zipper(self) {
            Ok(work) => work.adjust_columns(ids).settle(ids).into_zipper(),
            Err(zipper) => zipper,
        }
    }

    /// Types a glyph. Within vertical work this goes through [VerticalWork::insert_char];
    /// anywhere else, it inserts a plain atom.
    pub fn vertical_work_insert_char(self, c: char, ids: &mut NodeBuilder) -> Zipper {
        match VerticalWork::from_zipper(self) {
            Ok(work) => work.insert_char(c, ids).into_zipper(),
            Err(zipper) => {
                let glyph = ids.glyph(c);
                zipper.insert_node(glyph).settle_vertical_work(ids)
            }
        }
    }

    /// Deletes backwards, going through [VerticalWork::backspace] within vertical work.
    pub fn vertical_work_backspace(self, ids: &mut NodeBuilder) -> Zipper {
        match VerticalWork::from_zipper(self) {
            Ok(work) => {
                let fallback = work.clone();
                match work.backspace(ids) {
                    Some(work) => work.into_zipper(),
                    None => fallback.into_zipper().backspace(),
                }
            }
            Err(zipper) => zipper.backspace().settle_vertical_work(ids),
        }
    }

    /// Moves horizontally. Moves which land within a vertical work table repair its columns
    /// afterwards, and skip over columns which can't be edited.
    pub fn vertical_work_move_horizontally(self, toward: Dir, ids: &mut NodeBuilder) -> Zipper {
        let mut zipper = self.move_horizontally(toward);

        // Every pass moves the cursor, and it can only pass through so many cells
        loop {
            let work = match VerticalWork::from_zipper(zipper) {
                Ok(work) => work,
                Err(zipper) => return zipper,
            };

            let GridCursor { col, row, .. } = work.cursor;
            if !work.skipped(col, row) {
                return work.adjust_columns(ids).into_zipper();
            }

            let here = work.clone().into_zipper();
            let next = here.clone().move_horizontally(toward);
            if next == here {
                return work.adjust_columns(ids).settle(ids).into_zipper();
            }
            zipper = next;
        }
    }
}
