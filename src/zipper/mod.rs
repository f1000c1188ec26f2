//! A cursor-centred view of the node tree.
//!
//! Rather than addressing the cursor with a path from the root, a [Zipper] tears the tree open
//! along the path to the cursor. The row containing the cursor is split into the nodes on either
//! side of it ([ZRow]), and each ancestor becomes a [Breadcrumb]: the ancestor's own row, split
//! around the composite node which was entered, plus that node with the entered child removed
//! (a [Focus]). Breadcrumbs are ordered outermost-first, so the closest ancestor is the last one.
//!
//! Putting the pieces back together ([Zipper::into_row]) always gives back a valid tree; every
//! navigation and editing operation preserves this.

use alloc::{vec, vec::Vec};

use crate::node::{Node, NodeId, Row, Style};

mod focus;
pub use focus::*;

mod navigation;

mod vertical;
pub use vertical::*;

mod selection;
pub use selection::*;

mod path;
pub use path::*;

mod display;

/// A horizontal direction.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Selected nodes within a row. `dir` records which side of the selection's anchor the moving end
/// of the selection is on.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ZSelection {
    pub dir: Dir,
    pub nodes: Vec<Node>,
}

impl ZSelection {
    pub fn empty(dir: Dir) -> Self {
        Self { dir, nodes: vec![] }
    }

    /// Adds a node at the moving end.
    pub(crate) fn grow(&mut self, node: Node) {
        match self.dir {
            Dir::Left => self.nodes.insert(0, node),
            Dir::Right => self.nodes.push(node),
        }
    }

    /// Removes the node at the moving end, if there is one.
    pub(crate) fn shrink(&mut self) -> Option<Node> {
        match self.dir {
            Dir::Left if !self.nodes.is_empty() => Some(self.nodes.remove(0)),
            Dir::Left => None,
            Dir::Right => self.nodes.pop(),
        }
    }
}

/// The row containing the cursor.
///
/// The row's content, in order, is `left`, then the selection's nodes (if any), then `right`. The
/// cursor sits at the moving end of the selection, or between `left` and `right` if there is none.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ZRow {
    pub id: NodeId,
    pub style: Style,
    pub left: Vec<Node>,
    pub selection: Option<ZSelection>,
    pub right: Vec<Node>,
}

impl ZRow {
    /// Opens a row with the cursor before the child at `offset`. Offsets past the end of the row
    /// put the cursor at the end.
    pub fn new(row: Row, offset: usize) -> Self {
        let Row { id, mut children, style } = row;
        let right = children.split_off(offset.min(children.len()));
        Self { id, style, left: children, selection: None, right }
    }

    /// Opens a row with the cursor at the given edge.
    pub fn at_edge(row: Row, edge: Dir) -> Self {
        match edge {
            Dir::Left => Self::new(row, 0),
            Dir::Right => {
                let len = row.len();
                Self::new(row, len)
            }
        }
    }

    /// The number of nodes before the cursor.
    pub fn offset(&self) -> usize {
        match &self.selection {
            Some(ZSelection { dir: Dir::Right, nodes }) => self.left.len() + nodes.len(),
            _ => self.left.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
            && self.selection.as_ref().map_or(true, |s| s.nodes.is_empty())
    }

    /// Drops the selection, leaving its nodes on the `toward` side of the cursor.
    pub fn collapse(mut self, toward: Dir) -> Self {
        if let Some(sel) = self.selection.take() {
            match toward {
                Dir::Left => { self.right.splice(0..0, sel.nodes); },
                Dir::Right => self.left.extend(sel.nodes),
            }
        }
        self
    }

    pub fn into_row(self) -> Row {
        let ZRow { id, style, mut left, selection, right } = self;
        if let Some(sel) = selection {
            left.extend(sel.nodes);
        }
        left.extend(right);
        Row { id, children: left, style }
    }

    /// Turns this row into an ancestor row around a node being entered. The selection must
    /// already have been dealt with; it is kept as-is.
    pub(crate) fn into_breadcrumb(self, focus: Focus) -> Breadcrumb {
        let ZRow { id, style, left, selection, right } = self;
        Breadcrumb { row: BreadcrumbRow { id, style, left, selection, right }, focus }
    }
}

/// An ancestor of the cursor's row, split around the node which the cursor is inside.
///
/// With a selection, the content reads `left`, selection, focused node, `right` for a leftwards
/// selection, or `left`, focused node, selection, `right` for a rightwards one. The focused node
/// itself counts as selected whenever its row holds a selection, even an empty one.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BreadcrumbRow {
    pub id: NodeId,
    pub style: Style,
    pub left: Vec<Node>,
    pub selection: Option<ZSelection>,
    pub right: Vec<Node>,
}

impl BreadcrumbRow {
    /// The index of the focused node within the reassembled row.
    pub fn focus_index(&self) -> usize {
        match &self.selection {
            Some(ZSelection { dir: Dir::Left, nodes }) => self.left.len() + nodes.len(),
            _ => self.left.len(),
        }
    }

    /// Reassembles the row with `node` in place of the focus.
    pub fn into_row(self, node: Node) -> Row {
        let BreadcrumbRow { id, style, mut left, selection, right } = self;
        match selection {
            Some(ZSelection { dir: Dir::Left, nodes }) => {
                left.extend(nodes);
                left.push(node);
            }
            Some(ZSelection { dir: Dir::Right, nodes }) => {
                left.push(node);
                left.extend(nodes);
            }
            None => left.push(node),
        }
        left.extend(right);
        Row { id, children: left, style }
    }

    /// Makes this the cursor's row again, with `node` placed on the `side` side of the cursor.
    /// Any selection is flattened into the row.
    pub fn place(self, node: Node, side: Dir) -> ZRow {
        let offset = self.focus_index() + match side {
            Dir::Left => 1,
            Dir::Right => 0,
        };
        ZRow::new(self.into_row(node), offset)
    }
}

/// One torn-open ancestor of the cursor.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Breadcrumb {
    pub row: BreadcrumbRow,
    pub focus: Focus,
}

impl Breadcrumb {
    /// Rebuilds the ancestor row, given the content of the focused child.
    pub fn into_row(self, child: Row) -> Row {
        self.row.into_row(self.focus.into_node(child))
    }
}

/// The cursor's row plus its ancestry. See the [module-level documentation](crate::zipper).
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Zipper {
    pub row: ZRow,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Zipper {
    /// Creates a zipper with the cursor at the start of a root row.
    pub fn new(row: Row) -> Self {
        Self { row: ZRow::new(row, 0), breadcrumbs: vec![] }
    }

    /// Reassembles the whole tree, discarding the cursor.
    pub fn into_row(self) -> Row {
        let Zipper { row, breadcrumbs } = self;
        breadcrumbs.into_iter().rev().fold(row.into_row(), |child, crumb| crumb.into_row(child))
    }

    pub fn to_row(&self) -> Row {
        self.clone().into_row()
    }

    pub fn depth(&self) -> usize {
        self.breadcrumbs.len()
    }

    /// True if any row, including ancestors, holds a selection.
    pub fn has_selection(&self) -> bool {
        self.row.selection.is_some() || self.breadcrumbs.iter().any(|c| c.row.selection.is_some())
    }
}
