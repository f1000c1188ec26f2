use alloc::string::String;

use crate::{node::{Node, NodeBuilder, Style}, zipper::Zipper};

impl Zipper {
    /// Applies a function to the style of every selected node. The selection is folded down into
    /// one row, but otherwise kept. Without a selection, nothing happens.
    fn restyle(self, f: impl FnMut(&mut Style)) -> Zipper {
        if !self.has_selection() {
            return self;
        }

        let mut zipper = crate::zipper::fold_selection(self);
        if let Some(selection) = &mut zipper.row.selection {
            selection.nodes.iter_mut().map(Node::style_mut).for_each(f);
        }
        zipper
    }

    /// Colours the selected nodes.
    pub fn color(self, color: &str) -> Zipper {
        self.restyle(|s| s.color = Some(String::from(color)))
    }

    /// Marks the selected nodes as cancelled, all in the same new cancellation group.
    pub fn cancel(self, ids: &mut NodeBuilder) -> Zipper {
        if !self.has_selection() {
            return self;
        }

        let group = ids.next_id();
        self.restyle(|s| s.cancel = Some(group))
    }

    pub fn uncancel(self) -> Zipper {
        self.restyle(|s| s.cancel = None)
    }
}
