//! Composite nodes torn open at one child.

use alloc::{boxed::Box, vec::Vec};

use crate::{error::EditorError, node::{Atom, Delimited, Frac, Limits, Node, NodeId, Root, Row, RowStyle, Style, SubSup, Table, TableSubtype}};

use super::{Dir, MoveVerticalDirection};

/// A table with the cell containing the cursor removed. `left` holds the cells before it in
/// row-major order, and `right` the cells after it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ZTable {
    pub id: NodeId,
    pub style: Style,
    pub subtype: TableSubtype,
    pub row_count: usize,
    pub col_count: usize,
    pub left: Vec<Row>,
    pub right: Vec<Row>,
    pub row_styles: Vec<RowStyle>,
}

impl ZTable {
    /// The row-major index of the cursor's cell.
    pub fn cell_index(&self) -> usize {
        self.left.len()
    }

    /// The (row, column) of the cursor's cell.
    pub fn cell_position(&self) -> (usize, usize) {
        (self.cell_index() / self.col_count, self.cell_index() % self.col_count)
    }

    /// The index of the cell directly above or below the cursor's cell, if there is one.
    pub fn vertical_neighbour(&self, direction: MoveVerticalDirection) -> Option<usize> {
        let (row, _) = self.cell_position();
        match direction {
            MoveVerticalDirection::Up if row > 0 => Some(self.cell_index() - self.col_count),
            MoveVerticalDirection::Down if row + 1 < self.row_count => Some(self.cell_index() + self.col_count),
            _ => None,
        }
    }

    /// Moves the torn-open cell to `index`, returning the content of the newly focused cell.
    pub fn refocus(self, current: Row, index: usize) -> (ZTable, Row) {
        let ZTable { id, style, subtype, row_count, col_count, left, right, row_styles } = self;
        let mut cells = left;
        cells.push(current);
        cells.extend(right);
        Self::split(Table { id, subtype, row_count, col_count, cells, row_styles, style }, index)
    }

    /// Tears a table open at the cell with the given index.
    pub fn split(table: Table, index: usize) -> (ZTable, Row) {
        let Table { id, subtype, row_count, col_count, mut cells, row_styles, style } = table;
        let mut right = cells.split_off(index);
        let current = right.remove(0);
        (ZTable { id, style, subtype, row_count, col_count, left: cells, right, row_styles }, current)
    }

    pub fn into_table(self, current: Row) -> Table {
        let ZTable { id, style, subtype, row_count, col_count, mut left, right, row_styles } = self;
        left.push(current);
        left.extend(right);
        Table { id, subtype, row_count, col_count, cells: left, row_styles, style }
    }
}

/// A composite node with the child containing the cursor taken out. Each variant names the child
/// which was taken, and keeps every other part of the node verbatim.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Focus {
    Numerator { id: NodeId, style: Style, denominator: Row },
    Denominator { id: NodeId, style: Style, numerator: Row },
    Sub { id: NodeId, style: Style, sup: Option<Row> },
    Sup { id: NodeId, style: Style, sub: Option<Row> },
    Index { id: NodeId, style: Style, radicand: Row },
    Radicand { id: NodeId, style: Style, index: Option<Row> },
    Lower { id: NodeId, style: Style, inner: Box<Node>, upper: Option<Row> },
    Upper { id: NodeId, style: Style, inner: Box<Node>, lower: Row },
    Delimited { id: NodeId, style: Style, left_delim: Atom, right_delim: Atom },
    Cell(ZTable),
}

/// What happens when the cursor leaves the edge of a focused child.
pub enum Step {
    /// The cursor moves into another child of the same node.
    Rotate(Focus, Row),

    /// The cursor leaves the node entirely.
    Exit(Node),
}

impl Focus {
    pub fn id(&self) -> NodeId {
        match self {
            Focus::Numerator { id, .. } | Focus::Denominator { id, .. }
            | Focus::Sub { id, .. } | Focus::Sup { id, .. }
            | Focus::Index { id, .. } | Focus::Radicand { id, .. }
            | Focus::Lower { id, .. } | Focus::Upper { id, .. }
            | Focus::Delimited { id, .. } => *id,
            Focus::Cell(t) => t.id,
        }
    }

    /// The index of the focused child: 0 for a numerator, subscript, index, lower bound or
    /// delimited row, 1 for their siblings, and the row-major cell index for tables.
    pub fn dir(&self) -> usize {
        match self {
            Focus::Numerator { .. } | Focus::Sub { .. } | Focus::Index { .. }
            | Focus::Lower { .. } | Focus::Delimited { .. } => 0,
            Focus::Denominator { .. } | Focus::Sup { .. } | Focus::Radicand { .. }
            | Focus::Upper { .. } => 1,
            Focus::Cell(t) => t.cell_index(),
        }
    }

    /// Puts `child` back into the focused slot, reconstructing the original node.
    pub fn into_node(self, child: Row) -> Node {
        match self {
            Focus::Numerator { id, style, denominator } =>
                Node::Frac(Frac { id, numerator: child, denominator, style }),
            Focus::Denominator { id, style, numerator } =>
                Node::Frac(Frac { id, numerator, denominator: child, style }),
            Focus::Sub { id, style, sup } =>
                Node::SubSup(SubSup { id, sub: Some(child), sup, style }),
            Focus::Sup { id, style, sub } =>
                Node::SubSup(SubSup { id, sub, sup: Some(child), style }),
            Focus::Index { id, style, radicand } =>
                Node::Root(Root { id, index: Some(child), radicand, style }),
            Focus::Radicand { id, style, index } =>
                Node::Root(Root { id, index, radicand: child, style }),
            Focus::Lower { id, style, inner, upper } =>
                Node::Limits(Limits { id, inner, lower: child, upper, style }),
            Focus::Upper { id, style, inner, lower } =>
                Node::Limits(Limits { id, inner, lower, upper: Some(child), style }),
            Focus::Delimited { id, style, left_delim, right_delim } =>
                Node::Delimited(Delimited { id, inner: child, left_delim, right_delim, style }),
            Focus::Cell(t) => Node::Table(t.into_table(child)),
        }
    }

    /// Tears open a composite node approached from the `side` side, picking the child nearest to
    /// that side. Atoms cannot be entered, and are given back as an error.
    ///
    /// # Panics
    ///
    /// Panics if the node has no children to enter, which is never the case for a validated tree.
    pub fn enter(node: Node, side: Dir) -> Result<(Focus, Row), Node> {
        Ok(match (node, side) {
            (node @ Node::Atom(_), _) => return Err(node),

            (Node::Frac(Frac { id, numerator, denominator, style }), Dir::Left) =>
                (Focus::Numerator { id, style, denominator }, numerator),
            (Node::Frac(Frac { id, numerator, denominator, style }), Dir::Right) =>
                (Focus::Denominator { id, style, numerator }, denominator),

            (Node::SubSup(SubSup { id, sub: Some(sub), sup, style }), Dir::Left) =>
                (Focus::Sub { id, style, sup }, sub),
            (Node::SubSup(SubSup { id, sub, sup: Some(sup), style }), _) =>
                (Focus::Sup { id, style, sub }, sup),
            (Node::SubSup(SubSup { id, sub: Some(sub), sup: None, style }), Dir::Right) =>
                (Focus::Sub { id, style, sup: None }, sub),
            (Node::SubSup(SubSup { id, sub: None, sup: None, .. }), _) =>
                panic!("sub/superscript {} has neither child", id),

            (Node::Root(Root { id, index: Some(index), radicand, style }), Dir::Left) =>
                (Focus::Index { id, style, radicand }, index),
            (Node::Root(Root { id, index, radicand, style }), _) =>
                (Focus::Radicand { id, style, index }, radicand),

            (Node::Limits(Limits { id, inner, lower, upper: Some(upper), style }), Dir::Right) =>
                (Focus::Upper { id, style, inner, lower }, upper),
            (Node::Limits(Limits { id, inner, lower, upper, style }), _) =>
                (Focus::Lower { id, style, inner, upper }, lower),

            (Node::Delimited(Delimited { id, inner, left_delim, right_delim, style }), _) =>
                (Focus::Delimited { id, style, left_delim, right_delim }, inner),

            (Node::Table(table), side) => {
                if table.cells.is_empty() {
                    panic!("table {} has no cells", table.id);
                }
                let index = match side {
                    Dir::Left => 0,
                    Dir::Right => table.cells.len() - 1,
                };
                let (table, cell) = ZTable::split(table, index);
                (Focus::Cell(table), cell)
            }
        })
    }

    /// Tears open a composite node at the child with the given [dir](Focus::dir).
    pub fn enter_slot(node: Node, slot: usize) -> Result<(Focus, Row), EditorError> {
        let out_of_range = |id, len| EditorError::PathOutOfRange { id, index: slot, len };

        Ok(match (node, slot) {
            (Node::Atom(a), _) => return Err(EditorError::IntoAtom { id: a.id }),

            (Node::Frac(Frac { id, numerator, denominator, style }), 0) =>
                (Focus::Numerator { id, style, denominator }, numerator),
            (Node::Frac(Frac { id, numerator, denominator, style }), 1) =>
                (Focus::Denominator { id, style, numerator }, denominator),

            (Node::SubSup(SubSup { id, sub: Some(sub), sup, style }), 0) =>
                (Focus::Sub { id, style, sup }, sub),
            (Node::SubSup(SubSup { id, sub, sup: Some(sup), style }), 1) =>
                (Focus::Sup { id, style, sub }, sup),

            (Node::Root(Root { id, index: Some(index), radicand, style }), 0) =>
                (Focus::Index { id, style, radicand }, index),
            (Node::Root(Root { id, index, radicand, style }), 1) =>
                (Focus::Radicand { id, style, index }, radicand),

            (Node::Limits(Limits { id, inner, lower, upper, style }), 0) =>
                (Focus::Lower { id, style, inner, upper }, lower),
            (Node::Limits(Limits { id, inner, lower, upper: Some(upper), style }), 1) =>
                (Focus::Upper { id, style, inner, lower }, upper),

            (Node::Delimited(Delimited { id, inner, left_delim, right_delim, style }), 0) =>
                (Focus::Delimited { id, style, left_delim, right_delim }, inner),

            (Node::Table(table), index) if index < table.cells.len() => {
                let (table, cell) = ZTable::split(table, index);
                (Focus::Cell(table), cell)
            }
            (Node::Table(table), _) => return Err(out_of_range(table.id, table.cells.len())),

            (node, _) => return Err(out_of_range(node.id(), node.child_rows().len())),
        })
    }

    /// Decides where the cursor goes after leaving the `toward` edge of the focused child, whose
    /// content is now `current`.
    pub fn step(self, current: Row, toward: Dir) -> Step {
        match (self, toward) {
            (Focus::Numerator { id, style, denominator }, Dir::Right) =>
                Step::Rotate(Focus::Denominator { id, style, numerator: current }, denominator),
            (Focus::Denominator { id, style, numerator }, Dir::Left) =>
                Step::Rotate(Focus::Numerator { id, style, denominator: current }, numerator),

            (Focus::Sub { id, style, sup: Some(sup) }, Dir::Right) =>
                Step::Rotate(Focus::Sup { id, style, sub: Some(current) }, sup),
            (Focus::Sup { id, style, sub: Some(sub) }, Dir::Left) =>
                Step::Rotate(Focus::Sub { id, style, sup: Some(current) }, sub),

            (Focus::Index { id, style, radicand }, Dir::Right) =>
                Step::Rotate(Focus::Radicand { id, style, index: Some(current) }, radicand),
            (Focus::Radicand { id, style, index: Some(index) }, Dir::Left) =>
                Step::Rotate(Focus::Index { id, style, radicand: current }, index),

            (Focus::Lower { id, style, inner, upper: Some(upper) }, Dir::Right) =>
                Step::Rotate(Focus::Upper { id, style, inner, lower: current }, upper),
            (Focus::Upper { id, style, inner, lower }, Dir::Left) =>
                Step::Rotate(Focus::Lower { id, style, inner, upper: Some(current) }, lower),

            (Focus::Cell(table), Dir::Right) if !table.right.is_empty() => {
                let index = table.cell_index() + 1;
                let (table, next) = table.refocus(current, index);
                Step::Rotate(Focus::Cell(table), next)
            }
            (Focus::Cell(table), Dir::Left) if !table.left.is_empty() => {
                let index = table.cell_index() - 1;
                let (table, next) = table.refocus(current, index);
                Step::Rotate(Focus::Cell(table), next)
            }

            (focus, _) => Step::Exit(focus.into_node(current)),
        }
    }

    /// True if the focused node has another child above or below the focused one.
    pub fn can_move_vertically(&self, direction: MoveVerticalDirection) -> bool {
        match (self, direction) {
            (Focus::Numerator { .. }, MoveVerticalDirection::Down) => true,
            (Focus::Denominator { .. }, MoveVerticalDirection::Up) => true,
            (Focus::Cell(t), direction) => t.vertical_neighbour(direction).is_some(),
            _ => false,
        }
    }

    /// Swaps the focus to the child above or below the focused one, if there is one. If not, the
    /// focus and child are returned unchanged.
    pub fn move_vertically(self, current: Row, direction: MoveVerticalDirection) -> (Focus, Row) {
        match (self, direction) {
            (Focus::Numerator { id, style, denominator }, MoveVerticalDirection::Down) =>
                (Focus::Denominator { id, style, numerator: current }, denominator),
            (Focus::Denominator { id, style, numerator }, MoveVerticalDirection::Up) =>
                (Focus::Numerator { id, style, denominator: current }, numerator),
            (Focus::Cell(t), direction) => match t.vertical_neighbour(direction) {
                Some(index) => {
                    let (t, cell) = t.refocus(current, index);
                    (Focus::Cell(t), cell)
                }
                None => (Focus::Cell(t), current),
            },
            (focus, _) => (focus, current),
        }
    }
}
