use alloc::{string::{String, ToString}, vec::Vec};

use crate::{
    node::{Node, NodeBuilder, Row, TableSubtype},
    vertical_work::{GridCursor, VerticalWork},
    zipper::{CursorPath, PathStep, Zipper},
};

/// One glyph per character of a string.
macro_rules! glyphs {
    ($ids:ident, $text:expr) => { $ids.glyphs($text) };
}

/// A row built from a mix of strings (one glyph per character) and nodes.
macro_rules! row {
    ($ids:ident $(, $part:expr)* $(,)?) => { {
        let mut children: alloc::vec::Vec<crate::node::Node> = alloc::vec::Vec::new();
        $( crate::tests::util::Part::from($part).push_into(&mut $ids, &mut children); )*
        $ids.row(children)
    } };
}

/// A root-level zipper over plain glyphs, with the cursor between the two strings.
macro_rules! zipper {
    ($ids:ident, $left:expr, $right:expr $(,)?) => { {
        let mut children = $ids.glyphs($left);
        let offset = children.len();
        children.extend($ids.glyphs($right));
        crate::zipper::Zipper {
            row: crate::zipper::ZRow::new($ids.row(children), offset),
            breadcrumbs: alloc::vec![],
        }
    } };
}

pub enum Part {
    Text(&'static str),
    Node(Node),
}

impl From<&'static str> for Part {
    fn from(text: &'static str) -> Self {
        Part::Text(text)
    }
}

impl From<Node> for Part {
    fn from(node: Node) -> Self {
        Part::Node(node)
    }
}

impl Part {
    pub fn push_into(self, ids: &mut NodeBuilder, children: &mut Vec<Node>) {
        match self {
            Part::Text(text) => children.extend(ids.glyphs(text)),
            Part::Node(node) => children.push(node),
        }
    }
}

pub fn frac(ids: &mut NodeBuilder, numerator: &str, denominator: &str) -> Node {
    let numerator = ids.glyphs(numerator);
    let denominator = ids.glyphs(denominator);
    ids.frac(numerator, denominator)
}

pub fn delimited(ids: &mut NodeBuilder, inner: &str) -> Node {
    let inner = ids.glyphs(inner);
    ids.delimited(inner, '(', ')')
}

/// A table with one string of glyphs per cell.
pub fn table(ids: &mut NodeBuilder, subtype: TableSubtype, rows: &[&[&str]]) -> Node {
    let mut cells = Vec::new();
    for row in rows {
        let mut cell_row = Vec::new();
        for cell in row.iter() {
            cell_row.push(ids.glyphs(cell));
        }
        cells.push(cell_row);
    }
    ids.table(subtype, cells).unwrap()
}

/// Opens `row` at a path given as `(index, slot)` pairs.
pub fn open_at(row: Row, steps: &[(usize, usize)], offset: usize) -> Zipper {
    let path = CursorPath {
        steps: steps.iter().map(|&(index, slot)| PathStep { index, slot }).collect(),
        offset,
    };
    Zipper::from_path(row, &path).unwrap()
}

/// A root row holding only a vertical work table, with the cursor in the cell at `(col, row)`.
pub fn vertical_work(ids: &mut NodeBuilder, rows: &[&[&str]], cursor: GridCursor) -> Zipper {
    let col_count = rows[0].len();
    let table = table(ids, TableSubtype::Algebra, rows);
    let root = ids.row(alloc::vec![table]);
    open_at(root, &[(0, cursor.row * col_count + cursor.col)], cursor.offset)
}

/// Each row of the vertical work around the cursor, with cells separated by `|` and empty cells
/// drawn as a space.
pub fn grid_rows(zipper: &Zipper) -> Vec<String> {
    let work = VerticalWork::from_zipper(zipper.clone()).unwrap();
    (0..work.row_count)
        .map(|r| {
            (0..work.col_count())
                .map(|c| match work.cell(c, r) {
                    cell if cell.is_empty() => String::from(" "),
                    cell => cell.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}

pub fn grid_cursor(zipper: &Zipper) -> GridCursor {
    VerticalWork::from_zipper(zipper.clone()).unwrap().cursor
}

pub fn repeat(zipper: Zipper, times: usize, f: impl Fn(Zipper) -> Zipper) -> Zipper {
    (0..times).fold(zipper, |z, _| f(z))
}
