//! Construction of new nodes, each with a fresh ID.

use alloc::{boxed::Box, vec, vec::Vec};

use crate::error::EditorError;

use super::{Atom, Delimited, Frac, Limits, Node, NodeId, Root, Row, RowStyle, Style, SubSup, Table, TableSubtype};

/// Allocates node IDs and builds nodes with them.
///
/// IDs only need to be unique within one document, so every document (or test) owns its own
/// builder rather than sharing a global counter. IDs are handed out in increasing order, which
/// makes it possible to supply a deterministic sequence with [NodeBuilder::starting_at].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NodeBuilder {
    next: NodeId,
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: NodeId) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn row(&mut self, children: Vec<Node>) -> Row {
        Row { id: self.next_id(), children, style: Style::default() }
    }

    pub fn empty_row(&mut self) -> Row {
        self.row(vec![])
    }

    pub fn atom(&mut self, value: char) -> Atom {
        Atom { id: self.next_id(), value, pending: false, style: Style::default() }
    }

    pub fn glyph(&mut self, value: char) -> Node {
        Node::Atom(self.atom(value))
    }

    pub fn pending_glyph(&mut self, value: char) -> Node {
        let mut atom = self.atom(value);
        atom.pending = true;
        Node::Atom(atom)
    }

    /// Builds one glyph per character of `text`.
    pub fn glyphs(&mut self, text: &str) -> Vec<Node> {
        text.chars().map(|c| self.glyph(c)).collect()
    }

    pub fn frac(&mut self, numerator: Vec<Node>, denominator: Vec<Node>) -> Node {
        let id = self.next_id();
        Node::Frac(Frac {
            id,
            numerator: self.row(numerator),
            denominator: self.row(denominator),
            style: Style::default(),
        })
    }

    /// Builds a sub/superscript. Passing `None` for both is a defect, which is reported when the
    /// tree is [validated](Node::validate).
    pub fn subsup(&mut self, sub: Option<Vec<Node>>, sup: Option<Vec<Node>>) -> Node {
        let id = self.next_id();
        Node::SubSup(SubSup {
            id,
            sub: sub.map(|c| self.row(c)),
            sup: sup.map(|c| self.row(c)),
            style: Style::default(),
        })
    }

    pub fn root(&mut self, index: Option<Vec<Node>>, radicand: Vec<Node>) -> Node {
        let id = self.next_id();
        Node::Root(Root {
            id,
            index: index.map(|c| self.row(c)),
            radicand: self.row(radicand),
            style: Style::default(),
        })
    }

    pub fn limits(&mut self, inner: Node, lower: Vec<Node>, upper: Option<Vec<Node>>) -> Node {
        let id = self.next_id();
        Node::Limits(Limits {
            id,
            inner: Box::new(inner),
            lower: self.row(lower),
            upper: upper.map(|c| self.row(c)),
            style: Style::default(),
        })
    }

    pub fn delimited(&mut self, inner: Vec<Node>, left: char, right: char) -> Node {
        let id = self.next_id();
        Node::Delimited(Delimited {
            id,
            inner: self.row(inner),
            left_delim: self.atom(left),
            right_delim: self.atom(right),
            style: Style::default(),
        })
    }

    /// Builds a table from a list of rows, each of which is a list of cell contents.
    pub fn table(&mut self, subtype: TableSubtype, rows: Vec<Vec<Vec<Node>>>) -> Result<Node, EditorError> {
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).ok_or(EditorError::EmptyTable)?;
        if col_count == 0 {
            return Err(EditorError::EmptyTable);
        }

        let mut cells = Vec::with_capacity(row_count * col_count);
        for row in rows {
            if row.len() != col_count {
                return Err(EditorError::RaggedTable { expected: col_count, found: row.len() });
            }
            cells.extend(row.into_iter().map(|c| self.row(c)));
        }

        Ok(Node::Table(Table {
            id: self.next_id(),
            subtype,
            row_count,
            col_count,
            cells,
            row_styles: vec![RowStyle::default(); row_count],
            style: Style::default(),
        }))
    }

    /// Builds a table of the given size where every cell is empty.
    pub fn empty_table(&mut self, subtype: TableSubtype, row_count: usize, col_count: usize) -> Table {
        let cells = (0..row_count * col_count).map(|_| self.empty_row()).collect();
        Table {
            id: self.next_id(),
            subtype,
            row_count,
            col_count,
            cells,
            row_styles: vec![RowStyle::default(); row_count],
            style: Style::default(),
        }
    }
}
