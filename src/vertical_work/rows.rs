//! Starting and finishing vertical work, and moving between its rows.

use alloc::{vec, vec::Vec};

use tracing::debug;

use crate::{
    node::{Border, Node, NodeBuilder, Row, RowStyle, TableSubtype, ADDITIVE_OPERATORS, RELATIONAL_OPERATORS},
    zipper::{BreadcrumbRow, MoveVerticalDirection, ZRow, Zipper},
};

use super::{GridCursor, VerticalWork};

/// The most rows a vertical work table grows to.
pub const MAX_VERTICAL_WORK_ROWS: usize = 3;

/// Splits an equation into the cells of the first row of vertical work.
///
/// Additive operators get a cell of their own, preceded by an empty placeholder cell; a sign with
/// no term before it is unary, and stays part of the term after it. Relational operators get a cell
/// of their own, with a placeholder on each side. The row is padded so that it starts and ends with
/// an empty cell.
pub fn split_into_cells(children: Vec<Node>) -> Vec<Vec<Node>> {
    let mut cells: Vec<Vec<Node>> = vec![];
    let mut current = vec![];

    for node in children {
        match node.glyph() {
            Some(c) if ADDITIVE_OPERATORS.contains(&c) && !current.is_empty() => {
                cells.push(core::mem::take(&mut current));
                cells.push(vec![]);
                cells.push(vec![node]);
            }
            Some(c) if RELATIONAL_OPERATORS.contains(&c) => {
                if !current.is_empty() {
                    cells.push(core::mem::take(&mut current));
                }
                cells.push(vec![]);
                cells.push(vec![node]);
                cells.push(vec![]);
            }
            _ => current.push(node),
        }
    }
    if !current.is_empty() {
        cells.push(current);
    }

    if cells.first().map_or(true, |c| !c.is_empty()) {
        cells.insert(0, vec![]);
    }
    if cells.last().map_or(false, |c| !c.is_empty()) {
        cells.push(vec![]);
    }
    cells
}

impl Zipper {
    /// Turns the root row into vertical work, with the cursor at the start of the empty second row.
    /// Only applies at the root row with nothing selected, and only once: if the root row already
    /// holds vertical work, the zipper is returned as-is.
    pub fn start_vertical_work(self, ids: &mut NodeBuilder) -> Zipper {
        if !self.breadcrumbs.is_empty() || self.has_selection() || self.row.holds_vertical_work() {
            return self;
        }

        let ZRow { id, style, left, selection: _, right } = self.row;
        let mut children = left;
        children.extend(right);

        let cells = split_into_cells(children);
        let col_count = cells.len();
        let first_row: Vec<Row> = cells.into_iter().map(|c| ids.row(c)).collect();
        let second_row: Vec<Row> = (0..col_count).map(|_| ids.empty_row()).collect();

        let table_id = ids.next_id();
        debug!(table = table_id, columns = col_count, "starting vertical work");

        VerticalWork {
            columns: first_row.into_iter().zip(second_row).map(|(a, b)| vec![a, b]).collect(),
            row_count: 2,
            cursor: GridCursor { col: 0, row: 1, offset: 0 },
            row_styles: vec![RowStyle::default(); 2],
            table_id,
            table_style: Default::default(),
            parent: BreadcrumbRow { id, style, left: vec![], selection: None, right: vec![] },
            ancestors: vec![],
        }.adjust_columns(ids).into_zipper()
    }
}

impl ZRow {
    fn holds_vertical_work(&self) -> bool {
        self.left.iter().chain(&self.right)
            .any(|node| matches!(node, Node::Table(table) if table.subtype == TableSubtype::Algebra))
    }
}

impl VerticalWork {
    /// Moves the cursor down a row. From the second row of a two-row table, this adds a third row,
    /// separated from the others by a border. Past that, nothing happens.
    pub fn move_down(mut self, ids: &mut NodeBuilder) -> VerticalWork {
        let GridCursor { col, row, .. } = self.cursor;

        if row + 1 < self.row_count {
            self.move_cursor_to(col, row + 1);
            return self.settle_in_row();
        }

        if self.row_count >= MAX_VERTICAL_WORK_ROWS {
            return self;
        }

        for column in self.columns.iter_mut() {
            column.push(ids.empty_row());
        }
        self.row_count += 1;
        self.row_styles.push(RowStyle { border: Some(Border::Top) });
        debug!(table = self.table_id, rows = self.row_count, "added vertical work row");

        self.move_cursor_to(col, row + 1);
        self.settle_in_row()
    }

    /// Moves the cursor up a row. Leaving an empty last row removes it; leaving the empty second
    /// row of a two-row table finishes vertical work altogether, which is why the result is a
    /// zipper.
    pub fn move_up(mut self, ids: &mut NodeBuilder) -> Zipper {
        let GridCursor { col, row, .. } = self.cursor;
        if row == 0 {
            return self.into_zipper();
        }

        if row == 1 && self.row_count == 2 && self.is_empty_row(1) {
            return self.collapse();
        }

        if row + 1 == self.row_count && row >= 2 && self.is_empty_row(row) {
            for column in self.columns.iter_mut() {
                column.pop();
            }
            self.row_styles.pop();
            self.row_count -= 1;
            debug!(table = self.table_id, rows = self.row_count, "removed vertical work row");
        }

        self.move_cursor_to(col, row - 1);
        self.adjust_columns(ids).into_zipper()
    }

    /// Flattens the table back into its first row, dropping every other row. Placeholder cells
    /// vanish, since they have no content.
    pub fn collapse(self) -> Zipper {
        let VerticalWork { columns, cursor, parent, ancestors, table_id, .. } = self;
        debug!(table = table_id, "finishing vertical work");

        let mut offset = 0;
        let mut children = vec![];
        for (i, column) in columns.into_iter().enumerate() {
            if let Some(first) = column.into_iter().next() {
                if i < cursor.col {
                    offset += first.len();
                }
                children.extend(first.children);
            }
        }

        let BreadcrumbRow { id, style, mut left, selection: _, right } = parent;
        let mut after = children.split_off(offset);
        left.extend(children);
        after.extend(right);
        Zipper { row: ZRow { id, style, left, selection: None, right: after }, breadcrumbs: ancestors }
    }

    /// Below the first two rows, columns which are empty all the way down can't be edited. If the
    /// cursor has landed in one, move it to the nearest column which can be, preferring the right.
    pub(super) fn settle_in_row(mut self) -> VerticalWork {
        if self.cursor.row < 2 || !self.is_empty_column(self.cursor.col) {
            return self;
        }

        let col = self.cursor.col;
        let target = (col + 1..self.col_count()).find(|&c| !self.is_empty_column(c))
            .or_else(|| (0..col).rev().find(|&c| !self.is_empty_column(c)));
        if let Some(target) = target {
            let row = self.cursor.row;
            self.move_cursor_to(target, row);
            self.cursor.offset = 0;
        }
        self
    }
}

impl Zipper {
    /// True if the cursor is directly inside a cell of vertical work.
    pub fn in_vertical_work(&self) -> bool {
        VerticalWork::from_zipper(self.clone()).is_ok()
    }

    /// Up or down within vertical work. Anywhere else, this is an ordinary vertical move, except
    /// that moving down at the root row starts vertical work.
    pub fn vertical_work_move_vertically(self, direction: MoveVerticalDirection, ids: &mut NodeBuilder) -> Zipper {
        match VerticalWork::from_zipper(self) {
            Ok(work) => match direction {
                MoveVerticalDirection::Up => work.move_up(ids),
                MoveVerticalDirection::Down => work.move_down(ids).adjust_columns(ids).into_zipper(),
            },
            Err(zipper) if direction == MoveVerticalDirection::Down && zipper.breadcrumbs.is_empty() =>
                zipper.start_vertical_work(ids),
            Err(zipper) => zipper.move_vertically(direction).settle_vertical_work(ids),
        }
    }
}
