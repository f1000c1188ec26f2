//! Vertical work: step-by-step algebra laid out as an aligned table.
//!
//! Pressing down at the root row splits an equation into a table of type
//! [Algebra](TableSubtype::Algebra), with one column per operand or operator, and a second empty
//! row below it to work in. Each row of the table is one step of the working. Operators are kept in
//! their own columns (*operator columns*), so that the terms of each step line up under the terms
//! of the previous one.
//!
//! While the cursor is directly inside one of the table's cells, editing goes through
//! [VerticalWork], which views the table as a grid of columns. After every change, the grid's
//! empty placeholder columns are repaired (see [VerticalWork::adjust_columns]) so that there is
//! always somewhere to type, without leaving behind columns which serve no purpose.

use alloc::vec::Vec;

use crate::{
    node::{is_operator_glyph, Node, NodeBuilder, NodeId, Row, RowStyle, Style, Table, TableSubtype},
    zipper::{Breadcrumb, BreadcrumbRow, Focus, ZRow, ZTable, Zipper},
};

mod rows;
pub use rows::*;

mod adjust;
pub use adjust::*;

mod edit;

/// The position of the cursor within a vertical work grid.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct GridCursor {
    pub col: usize,
    pub row: usize,
    /// The number of nodes before the cursor within its cell.
    pub offset: usize,
}

/// A vertical work table, opened up as a grid of columns around the cursor.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct VerticalWork {
    /// The table's cells, indexed by `columns[col][row]`.
    pub columns: Vec<Vec<Row>>,
    pub row_count: usize,
    pub cursor: GridCursor,
    pub row_styles: Vec<RowStyle>,

    table_id: NodeId,
    table_style: Style,

    /// The row the table sits in, and every breadcrumb outside of that.
    parent: BreadcrumbRow,
    ancestors: Vec<Breadcrumb>,
}

/// Reshapes a table's row-major cells into columns.
pub fn cells_to_columns(cells: Vec<Row>, col_count: usize) -> Vec<Vec<Row>> {
    let row_count = if col_count == 0 { 0 } else { cells.len() / col_count };
    let mut columns: Vec<Vec<Row>> = (0..col_count).map(|_| Vec::with_capacity(row_count)).collect();
    for (i, cell) in cells.into_iter().enumerate() {
        columns[i % col_count].push(cell);
    }
    columns
}

/// Reshapes columns back into row-major cells.
pub fn columns_to_cells(columns: Vec<Vec<Row>>) -> Vec<Row> {
    let row_count = columns.first().map_or(0, Vec::len);
    let mut cells = Vec::with_capacity(row_count * columns.len());
    let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    for _ in 0..row_count {
        for column in columns.iter_mut() {
            cells.extend(column.next());
        }
    }
    cells
}

/// True if a cell holds nothing but a single operator.
pub fn is_operator_cell(cell: &Row) -> bool {
    match cell.children.as_slice() {
        [Node::Atom(a)] => is_operator_glyph(a.value),
        _ => false,
    }
}

/// True if a cell holds a term - anything other than nothing or a lone operator.
pub fn is_operand_cell(cell: &Row) -> bool {
    !cell.is_empty() && !is_operator_cell(cell)
}

impl VerticalWork {
    /// Opens a zipper as vertical work, if its cursor is directly inside a cell of a vertical work
    /// table and nothing is selected. Otherwise, the zipper is given back.
    pub fn from_zipper(zipper: Zipper) -> Result<VerticalWork, Zipper> {
        let is_vertical_work = !zipper.has_selection() && matches!(
            zipper.breadcrumbs.last(),
            Some(Breadcrumb { focus: Focus::Cell(ZTable { subtype: TableSubtype::Algebra, .. }), .. })
        );
        if !is_vertical_work {
            return Err(zipper);
        }

        let Zipper { row, mut breadcrumbs } = zipper;
        match breadcrumbs.pop() {
            Some(Breadcrumb { row: parent, focus: Focus::Cell(table) }) => {
                let (cursor_row, cursor_col) = table.cell_position();
                let offset = row.offset();
                let table = table.into_table(row.into_row());
                Ok(VerticalWork {
                    columns: cells_to_columns(table.cells, table.col_count),
                    row_count: table.row_count,
                    cursor: GridCursor { col: cursor_col, row: cursor_row, offset },
                    row_styles: table.row_styles,
                    table_id: table.id,
                    table_style: table.style,
                    parent,
                    ancestors: breadcrumbs,
                })
            }
            other => {
                breadcrumbs.extend(other);
                Err(Zipper { row, breadcrumbs })
            }
        }
    }

    /// Closes the grid back up into a zipper, with the cursor in the same place.
    pub fn into_zipper(self) -> Zipper {
        let VerticalWork { columns, row_count, cursor, row_styles, table_id, table_style, parent, mut ancestors } = self;
        let col_count = columns.len();
        let table = Table {
            id: table_id,
            subtype: TableSubtype::Algebra,
            row_count,
            col_count,
            cells: columns_to_cells(columns),
            row_styles,
            style: table_style,
        };

        let (table, cell) = ZTable::split(table, cursor.row * col_count + cursor.col);
        ancestors.push(Breadcrumb { row: parent, focus: Focus::Cell(table) });
        Zipper { row: ZRow::new(cell, cursor.offset), breadcrumbs: ancestors }
    }

    pub fn table_id(&self) -> NodeId {
        self.table_id
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    pub fn cell(&self, col: usize, row: usize) -> &Row {
        &self.columns[col][row]
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> &mut Row {
        &mut self.columns[col][row]
    }

    pub fn current_cell(&self) -> &Row {
        self.cell(self.cursor.col, self.cursor.row)
    }

    fn current_cell_mut(&mut self) -> &mut Row {
        let GridCursor { col, row, .. } = self.cursor;
        self.cell_mut(col, row)
    }

    /// True if every cell in the column is empty.
    pub fn is_empty_column(&self, col: usize) -> bool {
        self.columns[col].iter().all(Row::is_empty)
    }

    /// True if the column holds at least one operator, and nothing else.
    pub fn is_operator_column(&self, col: usize) -> bool {
        let column = &self.columns[col];
        column.iter().any(is_operator_cell) && column.iter().all(|c| c.is_empty() || is_operator_cell(c))
    }

    /// True if every row of the table is empty.
    fn is_empty_row(&self, row: usize) -> bool {
        self.columns.iter().all(|c| c[row].is_empty())
    }

    /// Inserts an empty column before `at`. If the cursor's column moves along, so does the cursor.
    fn insert_column(&mut self, at: usize, ids: &mut NodeBuilder) {
        let column = (0..self.row_count).map(|_| ids.empty_row()).collect();
        self.columns.insert(at, column);
        if self.cursor.col >= at {
            self.cursor.col += 1;
        }
    }

    /// Removes a column which the cursor is not in.
    fn remove_column(&mut self, at: usize) {
        self.columns.remove(at);
        if self.cursor.col > at {
            self.cursor.col -= 1;
        }
    }

    /// Moves the cursor to another cell, keeping its offset where possible.
    fn move_cursor_to(&mut self, col: usize, row: usize) {
        let offset = self.cursor.offset.min(self.cell(col, row).len());
        self.cursor = GridCursor { col, row, offset };
    }
}
