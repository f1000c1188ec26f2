//! Flat cursor addresses, for re-anchoring a cursor onto a tree.

use alloc::vec::Vec;

use crate::{error::EditorError, node::Row};

use super::{Focus, ZRow, Zipper};

/// One level of a [CursorPath]: the index of a composite node within its row, and which of its
/// children (as numbered by [Focus::dir]) the cursor is inside.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct PathStep {
    pub index: usize,
    pub slot: usize,
}

/// The position of a cursor as a list of steps from the root row, followed by the cursor's offset
/// within the innermost row. Selections are not represented.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct CursorPath {
    pub steps: Vec<PathStep>,
    pub offset: usize,
}

impl Zipper {
    /// The path to this zipper's cursor. If something is selected, this is the path to the
    /// selection's moving end within the cursor's row.
    pub fn path(&self) -> CursorPath {
        CursorPath {
            steps: self.breadcrumbs.iter()
                .map(|c| PathStep { index: c.row.focus_index(), slot: c.focus.dir() })
                .collect(),
            offset: self.row.offset(),
        }
    }

    /// Opens `row` with the cursor at `path`.
    pub fn from_path(row: Row, path: &CursorPath) -> Result<Zipper, EditorError> {
        let mut breadcrumbs = Vec::with_capacity(path.steps.len());
        let mut current = row;

        for step in &path.steps {
            if step.index >= current.len() {
                return Err(EditorError::PathOutOfRange { id: current.id, index: step.index, len: current.len() });
            }

            let mut zrow = ZRow::new(current, step.index);
            let node = zrow.right.remove(0);
            let (focus, child) = Focus::enter_slot(node, step.slot)?;
            breadcrumbs.push(zrow.into_breadcrumb(focus));
            current = child;
        }

        if path.offset > current.len() {
            return Err(EditorError::PathOutOfRange { id: current.id, index: path.offset, len: current.len() });
        }

        Ok(Zipper { row: ZRow::new(current, path.offset), breadcrumbs })
    }
}
