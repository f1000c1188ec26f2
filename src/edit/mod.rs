//! Editing operations, expressed as transformations of a [Zipper].
//!
//! Like navigation, every operation here takes the zipper by value and returns the new one. An
//! operation with nothing to do gives back its input unchanged. Operations which create nodes take
//! a [NodeBuilder] to allocate their IDs.

use crate::{node::{Node, NodeBuilder}, zipper::{fold_selection, Zipper}};

mod backspace;

mod delimiters;
pub use delimiters::*;

mod scripts;
pub use scripts::*;

mod style;

mod matrix;
pub use matrix::*;

/// Glyphs which insert a [Limits](crate::node::Limits) node rather than a plain atom.
pub const LIMIT_GLYPHS: &[char] = &['Σ', '∏', 'Π', '∫'];

pub fn is_limit_glyph(c: char) -> bool {
    LIMIT_GLYPHS.contains(&c)
}

impl Zipper {
    /// Inserts a node at the cursor, leaving the cursor after it.
    ///
    /// If anything is selected, the selection is folded into one row and kept; the new node goes
    /// just before it.
    pub fn insert_node(self, node: Node) -> Zipper {
        let mut zipper = fold_selection(self);
        zipper.row.left.push(node);
        zipper
    }

    /// Types a character. Limit glyphs (see [LIMIT_GLYPHS]) insert a summation-style node with
    /// empty bounds; anything else inserts a plain atom.
    pub fn insert_char(self, c: char, ids: &mut NodeBuilder) -> Zipper {
        if is_limit_glyph(c) {
            self.insert_limits(c, ids)
        } else {
            let glyph = ids.glyph(c);
            self.insert_node(glyph)
        }
    }

    /// Inserts a [Limits](crate::node::Limits) node around the given glyph, with an empty lower
    /// and upper bound.
    pub fn insert_limits(self, c: char, ids: &mut NodeBuilder) -> Zipper {
        let inner = ids.glyph(c);
        let node = ids.limits(inner, alloc::vec![], Some(alloc::vec![]));

        // Anything selected moves to after the new node, and stops being selected
        let (mut zipper, selection) = self.take_selection();
        zipper.row.left.push(node);
        if let Some(nodes) = selection {
            zipper.row.right.splice(0..0, nodes);
        }
        zipper
    }
}
