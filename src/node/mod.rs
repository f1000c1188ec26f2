//! The notation tree which the cursor moves around in.
//!
//! A document is a [Row] of [Node]s. Atoms are single glyphs; every other node is a composite
//! which holds one or more child rows (a fraction's numerator and denominator, a root's index and
//! radicand, and so on). Rows never nest directly inside rows - the only way to get another row is
//! through a composite node, and the types make it impossible to do otherwise.
//!
//! Nodes carry no behaviour beyond their shape. Cursor movement and editing live in
//! [zipper](crate::zipper) and [edit](crate::edit).

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::error::EditorError;

mod builder;
pub use builder::*;

mod display;

/// A process-unique node identifier, allocated by a [NodeBuilder].
pub type NodeId = u64;

/// Styling which can be applied to any node or row.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Style {
    /// A host-defined colour name.
    pub color: Option<String>,

    /// The cancellation group this node belongs to, if it has been cancelled. Every node cancelled
    /// by the same action shares one group ID.
    pub cancel: Option<NodeId>,
}

/// An ordered sequence of nodes.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Row {
    pub id: NodeId,
    pub children: Vec<Node>,
    pub style: Style,
}

impl Row {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Checks the structural invariants of every node inside this row.
    pub fn validate(&self) -> Result<(), EditorError> {
        self.children.iter().try_for_each(Node::validate)
    }
}

/// A single glyph.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Atom {
    pub id: NodeId,
    pub value: char,

    /// Only meaningful for delimiters: a pending delimiter has been typed without its partner (or
    /// had its partner deleted), and is drawn as a placeholder until it is committed.
    pub pending: bool,

    pub style: Style,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Frac {
    pub id: NodeId,
    pub numerator: Row,
    pub denominator: Row,
    pub style: Style,
}

/// A subscript, a superscript, or both. The base is whatever precedes this node in its row.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SubSup {
    pub id: NodeId,
    pub sub: Option<Row>,
    pub sup: Option<Row>,
    pub style: Style,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Root {
    pub id: NodeId,
    pub index: Option<Row>,
    pub radicand: Row,
    pub style: Style,
}

/// A large operator, such as a summation, with bounds above and below.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Limits {
    pub id: NodeId,
    pub inner: Box<Node>,
    pub lower: Row,
    pub upper: Option<Row>,
    pub style: Style,
}

/// A row wrapped in a pair of delimiters, such as parentheses.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Delimited {
    pub id: NodeId,
    pub inner: Row,
    pub left_delim: Atom,
    pub right_delim: Atom,
    pub style: Style,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum TableSubtype {
    /// A plain grid of cells.
    Matrix,

    /// Rows of an equation aligned into columns, used for vertical work.
    Algebra,
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Border {
    Top,
    Bottom,
}

/// Per-row rendering annotations of a table. These do not affect editing.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RowStyle {
    pub border: Option<Border>,
}

/// A grid of rows. Cells are stored in row-major order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Table {
    pub id: NodeId,
    pub subtype: TableSubtype,
    pub row_count: usize,
    pub col_count: usize,
    pub cells: Vec<Row>,
    pub row_styles: Vec<RowStyle>,
    pub style: Style,
}

/// A node in the tree. See the [module-level documentation](crate::node) for more information.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Node {
    Atom(Atom),
    Frac(Frac),
    SubSup(SubSup),
    Root(Root),
    Limits(Limits),
    Delimited(Delimited),
    Table(Table),
}

/// Glyphs which act as binary operators for the purpose of aligning vertical work.
pub const ADDITIVE_OPERATORS: &[char] = &['+', '-', '−'];

/// Relational operators; these split an equation into sides.
pub const RELATIONAL_OPERATORS: &[char] = &['=', '<', '>', '≤', '≥', '≠'];

pub fn is_operator_glyph(c: char) -> bool {
    ADDITIVE_OPERATORS.contains(&c) || RELATIONAL_OPERATORS.contains(&c)
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Atom(n) => n.id,
            Node::Frac(n) => n.id,
            Node::SubSup(n) => n.id,
            Node::Root(n) => n.id,
            Node::Limits(n) => n.id,
            Node::Delimited(n) => n.id,
            Node::Table(n) => n.id,
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Node::Atom(n) => &n.style,
            Node::Frac(n) => &n.style,
            Node::SubSup(n) => &n.style,
            Node::Root(n) => &n.style,
            Node::Limits(n) => &n.style,
            Node::Delimited(n) => &n.style,
            Node::Table(n) => &n.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Node::Atom(n) => &mut n.style,
            Node::Frac(n) => &mut n.style,
            Node::SubSup(n) => &mut n.style,
            Node::Root(n) => &mut n.style,
            Node::Limits(n) => &mut n.style,
            Node::Delimited(n) => &mut n.style,
            Node::Table(n) => &mut n.style,
        }
    }

    /// The glyph of this node, if it is an atom.
    pub fn glyph(&self) -> Option<char> {
        match self {
            Node::Atom(a) => Some(a.value),
            _ => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Atom(_))
    }

    /// True for atoms which are binary or relational operators.
    pub fn is_operator(&self) -> bool {
        self.glyph().map_or(false, is_operator_glyph)
    }

    /// The child rows of this node in navigation order. Absent optional children are skipped.
    pub fn child_rows(&self) -> Vec<&Row> {
        match self {
            Node::Atom(_) => Vec::new(),
            Node::Frac(f) => alloc::vec![&f.numerator, &f.denominator],
            Node::SubSup(s) => s.sub.iter().chain(s.sup.iter()).collect(),
            Node::Root(r) => r.index.iter().chain(core::iter::once(&r.radicand)).collect(),
            Node::Limits(l) => core::iter::once(&l.lower).chain(l.upper.iter()).collect(),
            Node::Delimited(d) => alloc::vec![&d.inner],
            Node::Table(t) => t.cells.iter().collect(),
        }
    }

    /// Checks that this node, and everything inside it, is well-formed.
    pub fn validate(&self) -> Result<(), EditorError> {
        match self {
            Node::Atom(_) => return Ok(()),
            Node::SubSup(SubSup { id, sub: None, sup: None, .. }) =>
                return Err(EditorError::EmptyComposite { id: *id }),
            Node::Table(t) => {
                if t.cells.is_empty() {
                    return Err(EditorError::EmptyComposite { id: t.id });
                }
                if t.cells.len() != t.row_count * t.col_count {
                    return Err(EditorError::RaggedTable {
                        expected: t.row_count * t.col_count,
                        found: t.cells.len(),
                    });
                }
            }
            _ => (),
        }

        self.child_rows().into_iter().try_for_each(Row::validate)
    }
}

impl Table {
    pub fn cell(&self, row: usize, col: usize) -> &Row {
        &self.cells[row * self.col_count + col]
    }
}
