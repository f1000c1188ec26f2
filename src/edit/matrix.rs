//! Matrix tables: inserting them, and adding or removing rows and columns.
//!
//! Row and column operations act on the innermost matrix enclosing the cursor. Vertical-work
//! tables manage their own shape, so they are never touched here.

use alloc::vec::Vec;
use core::mem;

use tracing::debug;

use crate::{node::{NodeBuilder, Row, RowStyle, TableSubtype}, zipper::{Dir, Focus, ZRow, ZTable, Zipper}};

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum RowSide {
    Above,
    Below,
}

/// A torn-open table's cells in row-major order, with a hole where the cursor's cell was taken out.
struct Grid {
    cells: Vec<Option<Row>>,
    row_styles: Vec<RowStyle>,
    row_count: usize,
    col_count: usize,
}

impl Grid {
    fn open(table: &mut ZTable) -> Grid {
        let mut cells: Vec<Option<Row>> = table.left.drain(..).map(Some).collect();
        cells.push(None);
        cells.extend(table.right.drain(..).map(Some));
        Grid {
            cells,
            row_styles: mem::take(&mut table.row_styles),
            row_count: table.row_count,
            col_count: table.col_count,
        }
    }

    /// Puts the cells back into `table`, splitting them around the hole.
    fn close(self, table: &mut ZTable) {
        let hole = self.cells.iter().position(Option::is_none).unwrap_or(self.cells.len());
        for (i, cell) in self.cells.into_iter().enumerate() {
            match cell {
                Some(cell) if i < hole => table.left.push(cell),
                Some(cell) => table.right.push(cell),
                None => (),
            }
        }
        table.row_styles = self.row_styles;
        table.row_count = self.row_count;
        table.col_count = self.col_count;
    }

    fn insert_row(&mut self, at: usize, ids: &mut NodeBuilder) {
        let start = at * self.col_count;
        let new_cells: Vec<_> = (0..self.col_count).map(|_| Some(ids.empty_row())).collect();
        self.cells.splice(start..start, new_cells);
        self.row_styles.insert(at, RowStyle::default());
        self.row_count += 1;
    }

    fn insert_column(&mut self, at: usize, ids: &mut NodeBuilder) {
        // Back to front, so that earlier indices stay valid
        for row in (0..self.row_count).rev() {
            self.cells.insert(row * self.col_count + at, Some(ids.empty_row()));
        }
        self.col_count += 1;
    }

    fn remove_row(&mut self, at: usize) {
        let start = at * self.col_count;
        self.cells.drain(start..start + self.col_count);
        self.row_styles.remove(at);
        self.row_count -= 1;
    }

    fn remove_column(&mut self, at: usize) {
        for row in (0..self.row_count).rev() {
            self.cells.remove(row * self.col_count + at);
        }
        self.col_count -= 1;
    }
}

impl Zipper {
    /// Inserts an empty matrix and moves into its first cell. Anything selected is moved into that
    /// cell.
    pub fn insert_matrix(self, row_count: usize, col_count: usize, ids: &mut NodeBuilder) -> Zipper {
        if row_count == 0 || col_count == 0 {
            return self;
        }

        let (zipper, selection) = self.take_selection();
        let mut table = ids.empty_table(TableSubtype::Matrix, row_count, col_count);
        if let Some(nodes) = selection {
            table.cells[0].children = nodes;
        }

        let (table, first) = ZTable::split(table, 0);
        zipper.enter_new(Focus::Cell(table), ZRow::at_edge(first, Dir::Right))
    }

    fn innermost_matrix(&self) -> Option<usize> {
        self.breadcrumbs.iter().rposition(|c| matches!(&c.focus, Focus::Cell(t) if t.subtype == TableSubtype::Matrix))
    }

    /// Adds an empty row above or below the cursor's row.
    pub fn add_row(self, side: RowSide, ids: &mut NodeBuilder) -> Zipper {
        let mut zipper = self.collapse_selection(Dir::Right);
        let level = match zipper.innermost_matrix() {
            Some(level) => level,
            None => return zipper,
        };

        if let Focus::Cell(table) = &mut zipper.breadcrumbs[level].focus {
            let (row, _) = table.cell_position();
            let mut grid = Grid::open(table);
            grid.insert_row(match side { RowSide::Above => row, RowSide::Below => row + 1 }, ids);
            grid.close(table);
            debug!(id = table.id, rows = table.row_count, "added matrix row");
        }
        zipper
    }

    /// Adds an empty column to the left or right of the cursor's column.
    pub fn add_column(self, side: Dir, ids: &mut NodeBuilder) -> Zipper {
        let mut zipper = self.collapse_selection(Dir::Right);
        let level = match zipper.innermost_matrix() {
            Some(level) => level,
            None => return zipper,
        };

        if let Focus::Cell(table) = &mut zipper.breadcrumbs[level].focus {
            let (_, col) = table.cell_position();
            let mut grid = Grid::open(table);
            grid.insert_column(match side { Dir::Left => col, Dir::Right => col + 1 }, ids);
            grid.close(table);
            debug!(id = table.id, cols = table.col_count, "added matrix column");
        }
        zipper
    }

    /// Deletes the cursor's row, moving the cursor to the start of the cell in the same column of
    /// the next row (or the previous row, if this was the last). A matrix's only row is never
    /// deleted.
    pub fn delete_row(self) -> Zipper {
        self.delete_line(true)
    }

    /// Deletes the cursor's column, like [Zipper::delete_row].
    pub fn delete_column(self) -> Zipper {
        self.delete_line(false)
    }

    fn delete_line(self, is_row: bool) -> Zipper {
        let mut zipper = self.collapse_selection(Dir::Right);
        let level = match zipper.innermost_matrix() {
            Some(level) => level,
            None => return zipper,
        };

        let cell = match &mut zipper.breadcrumbs[level].focus {
            Focus::Cell(table) if (is_row && table.row_count > 1) || (!is_row && table.col_count > 1) => {
                let (row, col) = table.cell_position();
                let mut grid = Grid::open(table);
                let (row, col) = if is_row {
                    grid.remove_row(row);
                    (row.min(grid.row_count - 1), col)
                } else {
                    grid.remove_column(col);
                    (row, col.min(grid.col_count - 1))
                };

                let cell = grid.cells[row * grid.col_count + col].take();
                grid.close(table);
                debug!(id = table.id, rows = table.row_count, cols = table.col_count, "deleted matrix line");
                cell
            }
            _ => return zipper,
        };

        match cell {
            Some(cell) => {
                // Anything the cursor was nested inside went with the deleted cell
                zipper.breadcrumbs.truncate(level + 1);
                zipper.row = ZRow::new(cell, 0);
                zipper
            }
            None => zipper,
        }
    }
}

