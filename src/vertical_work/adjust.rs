//! Repairing the placeholder columns of vertical work.

use tracing::debug;

use crate::node::NodeBuilder;

use super::{is_operand_cell, is_operator_cell, VerticalWork};

/// One change made by [VerticalWork::adjust_columns].
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ColumnRepair {
    /// The cursor's row starts with a non-empty cell, so add an empty column before it.
    PadStart,

    /// The cursor's row ends with a non-empty cell, so add an empty column after it.
    PadEnd,

    /// The operator column at this index has an operand neither directly before it nor an empty
    /// column to type one into, so add an empty column before it.
    GapBefore(usize),

    /// This column and the next are both entirely empty; one of them goes, keeping the cursor's.
    MergeEmpty(usize),

    /// This entirely empty column sits between two non-empty cells in the cursor's row, and
    /// serves no purpose.
    RemoveRedundant(usize),
}

impl VerticalWork {
    /// Repairs the grid's placeholder columns, one change at a time until no more are needed.
    ///
    /// The rules, in the order they're checked:
    ///   - The cursor's row always has an empty cell at each end to type into.
    ///   - Each operator column either has an operand right before it in every row it has an
    ///     operator in, or an entirely empty column before it.
    ///   - Two entirely empty columns in a row are merged into one.
    ///   - An entirely empty column between two non-empty cells of the cursor's row is removed,
    ///     unless it's the cursor's column or it's keeping an operator column clear of a
    ///     non-operand.
    pub fn adjust_columns(mut self, ids: &mut NodeBuilder) -> VerticalWork {
        let limit = self.col_count() * 4 + 8;
        for _ in 0..limit {
            match self.next_repair() {
                Some(repair) => {
                    debug!(table = self.table_id, ?repair, "repairing vertical work columns");
                    self.apply_repair(repair, ids);
                }
                None => break,
            }
        }
        self
    }

    /// Finds the first repair needed, if any.
    pub fn next_repair(&self) -> Option<ColumnRepair> {
        let row = self.cursor.row;
        let cols = self.col_count();

        if !self.cell(0, row).is_empty() {
            return Some(ColumnRepair::PadStart);
        }
        if !self.cell(cols - 1, row).is_empty() {
            return Some(ColumnRepair::PadEnd);
        }

        if let Some(i) = (0..cols).find(|&i| self.is_operator_column(i) && !self.has_gap_before(i)) {
            return Some(ColumnRepair::GapBefore(i));
        }

        if let Some(i) = (0..cols.saturating_sub(1)).find(|&i| self.is_empty_column(i) && self.is_empty_column(i + 1)) {
            return Some(ColumnRepair::MergeEmpty(i));
        }

        (1..cols.saturating_sub(1)).find(|&i| self.is_redundant(i)).map(ColumnRepair::RemoveRedundant)
    }

    fn apply_repair(&mut self, repair: ColumnRepair, ids: &mut NodeBuilder) {
        match repair {
            ColumnRepair::PadStart => self.insert_column(0, ids),
            ColumnRepair::PadEnd => {
                let end = self.col_count();
                self.insert_column(end, ids);
            }
            ColumnRepair::GapBefore(i) => {
                // A cursor in an empty cell of the operator column stays put, so it ends up in the
                // new column, straight after whatever precedes it
                let stays = self.cursor.col == i && self.current_cell().is_empty();
                self.insert_column(i, ids);
                if stays {
                    self.cursor.col = i;
                }
            }
            ColumnRepair::MergeEmpty(i) => {
                if self.cursor.col == i + 1 {
                    self.remove_column(i);
                } else {
                    self.remove_column(i + 1);
                }
            }
            ColumnRepair::RemoveRedundant(i) => self.remove_column(i),
        }
    }

    /// True if every operator in column `col` has an operand directly to its left, or if the
    /// column before is entirely empty. The first column never has anything before it.
    fn has_gap_before(&self, col: usize) -> bool {
        col > 0 && (self.is_empty_column(col - 1) || self.operators_supported(col, col - 1))
    }

    /// True if, in every row where `op_col` holds an operator, `left_col` holds an operand.
    fn operators_supported(&self, op_col: usize, left_col: usize) -> bool {
        (0..self.row_count).all(|row| {
            !is_operator_cell(self.cell(op_col, row)) || is_operand_cell(self.cell(left_col, row))
        })
    }

    fn is_redundant(&self, col: usize) -> bool {
        let row = self.cursor.row;
        col != self.cursor.col
            && self.is_empty_column(col)
            && !self.cell(col - 1, row).is_empty()
            && !self.cell(col + 1, row).is_empty()
            && !(self.is_operator_column(col + 1) && !self.operators_supported(col + 1, col - 1))
    }
}
