//! Selection, which may span several levels of the tree.
//!
//! A selection starts in the cursor's row. When it runs out of nodes in that row, it continues
//! outwards: the innermost breadcrumb gets a selection of its own, and the node the cursor is
//! inside becomes selected as a whole. This can carry on through any number of ancestors, so the
//! selected rows are always the cursor's row plus some unbroken run of the innermost breadcrumbs.
//! The outermost selected row is the *boundary*, and is where the selection grows or shrinks.
//!
//! Growing always takes whole nodes. A composite node which the selection's anchor isn't inside is
//! never entered, only selected as a unit.

use alloc::vec::Vec;

use tracing::debug;

use crate::node::Node;

use super::{Breadcrumb, BreadcrumbRow, Dir, ZRow, ZSelection, Zipper};

/// Editor state for callers which support selection.
///
/// `zipper` carries the selection itself, folded into a single row (see [fold_selection]), so that
/// once a selection has taken in a whole node, the cursor sits outside it. `start_zipper` is the
/// cursor at the point the selection was started from, and `end_zipper` is the cursor at the
/// selection's moving end; both have no selection. When nothing is selected, all three are the
/// same.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct State {
    pub zipper: Zipper,
    pub start_zipper: Zipper,
    pub end_zipper: Zipper,
    pub selecting: bool,

    /// The selection as it is grown, still spread over every level it spans.
    unfolded: Zipper,
}

impl State {
    pub fn new(zipper: Zipper) -> Self {
        Self {
            start_zipper: selection_start(&zipper),
            end_zipper: selection_end(&zipper),
            unfolded: zipper.clone(),
            zipper: fold_selection(zipper),
            selecting: false,
        }
    }

    /// Replaces the zipper with the result of an edit, recomputing the selection's ends.
    pub fn map_zipper(self, f: impl FnOnce(Zipper) -> Zipper) -> Self {
        let selecting = self.selecting;
        Self { selecting, ..Self::new(f(self.zipper)) }
    }

    pub fn start_selecting(self) -> Self {
        Self { selecting: true, ..self }
    }

    pub fn stop_selecting(self) -> Self {
        Self { selecting: false, ..self }
    }

    pub fn move_left(self) -> Self {
        self.move_horizontally(Dir::Left)
    }

    pub fn move_right(self) -> Self {
        self.move_horizontally(Dir::Right)
    }

    /// Moves the cursor, extending the selection if `selecting` is set.
    pub fn move_horizontally(self, toward: Dir) -> Self {
        if !self.selecting {
            return self.map_zipper(|z| z.move_horizontally(toward));
        }

        let State { unfolded, start_zipper, .. } = self;
        let start_zipper = if unfolded.has_selection() { start_zipper } else { unfolded.clone() };
        let unfolded = extend(unfolded, toward, &start_zipper);

        if unfolded.has_selection() {
            State {
                zipper: fold_selection(unfolded.clone()),
                end_zipper: selection_end(&unfolded),
                start_zipper,
                selecting: true,
                unfolded,
            }
        } else {
            State {
                zipper: unfolded.clone(),
                start_zipper: unfolded.clone(),
                end_zipper: unfolded.clone(),
                selecting: true,
                unfolded,
            }
        }
    }
}

/// Moves the selection's moving end one step, growing or shrinking the selection.
pub fn extend(zipper: Zipper, toward: Dir, start: &Zipper) -> Zipper {
    match zipper.breadcrumbs.iter().position(|c| c.row.selection.is_some()) {
        Some(boundary) => extend_breadcrumb(zipper, boundary, toward, start),
        None => extend_row(zipper, toward),
    }
}

/// Takes the node next to a selection on the `toward` side.
fn take_next(left: &mut Vec<Node>, right: &mut Vec<Node>, toward: Dir) -> Option<Node> {
    match toward {
        Dir::Left => left.pop(),
        Dir::Right if right.is_empty() => None,
        Dir::Right => Some(right.remove(0)),
    }
}

/// Returns a node removed from a selection while moving `toward`, to the row it came from.
fn give_back(left: &mut Vec<Node>, right: &mut Vec<Node>, node: Node, toward: Dir) {
    match toward {
        Dir::Left => right.insert(0, node),
        Dir::Right => left.push(node),
    }
}

fn extend_row(mut zipper: Zipper, toward: Dir) -> Zipper {
    let row = &mut zipper.row;
    match row.selection.take() {
        // Start a new selection
        None => match take_next(&mut row.left, &mut row.right, toward) {
            Some(node) => {
                row.selection = Some(ZSelection { dir: toward, nodes: alloc::vec![node] });
                zipper
            }
            None => open_outwards(zipper, None, toward),
        },

        // Grow
        Some(mut sel) if sel.dir == toward => match take_next(&mut row.left, &mut row.right, toward) {
            Some(node) => {
                sel.grow(node);
                row.selection = Some(sel);
                zipper
            }
            None => open_outwards(zipper, Some(sel), toward),
        },

        // Shrink, and stop selecting if that leaves nothing
        Some(mut sel) => {
            if let Some(node) = sel.shrink() {
                give_back(&mut row.left, &mut row.right, node, toward);
            }
            if !sel.nodes.is_empty() {
                row.selection = Some(sel);
            }
            zipper
        }
    }
}

/// The cursor's row has run out of nodes to select, so select the node it's inside instead. At the
/// root row there's nowhere to go, and the row's selection is put back as it was.
fn open_outwards(mut zipper: Zipper, current: Option<ZSelection>, toward: Dir) -> Zipper {
    match zipper.breadcrumbs.last_mut() {
        Some(crumb) => {
            crumb.row.selection = Some(ZSelection::empty(toward));
            zipper.row.selection = Some(current.unwrap_or_else(|| ZSelection::empty(toward)));
        }
        None => zipper.row.selection = current,
    }
    zipper
}

fn extend_breadcrumb(mut zipper: Zipper, boundary: usize, toward: Dir, start: &Zipper) -> Zipper {
    let crumb_row = &mut zipper.breadcrumbs[boundary].row;
    let mut sel = match crumb_row.selection.take() {
        Some(sel) => sel,
        None => return zipper,
    };

    if sel.dir == toward {
        match take_next(&mut crumb_row.left, &mut crumb_row.right, toward) {
            Some(node) => {
                sel.grow(node);
                crumb_row.selection = Some(sel);
            }
            None => {
                crumb_row.selection = Some(sel);
                if boundary > 0 {
                    zipper.breadcrumbs[boundary - 1].row.selection = Some(ZSelection::empty(toward));
                }
            }
        }
        return zipper;
    }

    if let Some(node) = sel.shrink() {
        give_back(&mut crumb_row.left, &mut crumb_row.right, node, toward);
        crumb_row.selection = Some(sel);
        return zipper;
    }

    // Nothing left selected at this level besides the focused node, so move the boundary back
    // inwards. This is only allowed into a node the anchor is actually inside.
    if !anchored_at(start, &zipper.breadcrumbs[boundary]) {
        debug!(boundary, "selection boundary does not match the anchor; not collapsing");
        zipper.breadcrumbs[boundary].row.selection = Some(sel);
        return zipper;
    }

    if boundary + 1 == zipper.breadcrumbs.len()
        && zipper.row.selection.as_ref().map_or(false, |s| s.nodes.is_empty())
    {
        zipper.row.selection = None;
    }
    zipper
}

/// Checks that the anchor's zipper has a breadcrumb focused on the same node, at the same place
/// in the same row, as `crumb` (whose own selection has been emptied).
fn anchored_at(start: &Zipper, crumb: &Breadcrumb) -> bool {
    start.breadcrumbs.iter().any(|s| {
        s.focus.id() == crumb.focus.id()
            && s.row.id == crumb.row.id
            && s.row.left.len() == crumb.row.left.len()
            && s.row.right.len() == crumb.row.right.len()
    })
}

/// Folds a selection spanning breadcrumbs back down into a single row: the boundary row, with
/// every node the selection covers (including the node the cursor is inside) in its selection.
/// Selections confined to the cursor's row are returned unchanged.
pub fn fold_selection(zipper: Zipper) -> Zipper {
    let boundary = match zipper.breadcrumbs.iter().position(|c| c.row.selection.is_some()) {
        Some(boundary) => boundary,
        None => return zipper,
    };

    let Zipper { row, mut breadcrumbs } = zipper;
    let mut inner = breadcrumbs.split_off(boundary);
    let Breadcrumb { row: crumb_row, focus } = inner.remove(0);

    let child = inner.into_iter().rev().fold(row.into_row(), |child, crumb| crumb.into_row(child));
    let node = focus.into_node(child);

    let BreadcrumbRow { id, style, left, selection, right } = crumb_row;
    let mut selection = selection.unwrap_or_else(|| ZSelection::empty(Dir::Right));
    match selection.dir {
        Dir::Left => selection.nodes.push(node),
        Dir::Right => selection.nodes.insert(0, node),
    }

    Zipper { row: ZRow { id, style, left, selection: Some(selection), right }, breadcrumbs }
}

/// The cursor at the selection's moving end, with nothing selected.
pub fn selection_end(zipper: &Zipper) -> Zipper {
    if !zipper.has_selection() {
        return zipper.clone();
    }

    let Zipper { row, breadcrumbs } = fold_selection(zipper.clone());
    let toward = row.selection.as_ref().map_or(Dir::Right, |s| s.dir);
    Zipper { row: row.collapse(toward), breadcrumbs }
}

/// The cursor at the selection's anchor, with nothing selected.
pub fn selection_start(zipper: &Zipper) -> Zipper {
    fn flatten(left: &mut Vec<Node>, right: &mut Vec<Node>, selection: Option<ZSelection>) {
        match selection {
            Some(ZSelection { dir: Dir::Left, nodes }) => left.extend(nodes),
            Some(ZSelection { dir: Dir::Right, nodes }) => { right.splice(0..0, nodes); },
            None => (),
        }
    }

    let mut zipper = zipper.clone();
    let selection = zipper.row.selection.take();
    flatten(&mut zipper.row.left, &mut zipper.row.right, selection);
    for crumb in &mut zipper.breadcrumbs {
        let selection = crumb.row.selection.take();
        flatten(&mut crumb.row.left, &mut crumb.row.right, selection);
    }
    zipper
}

impl Zipper {
    /// Drops the selection, putting the cursor at its edge on the `toward` side. Without a
    /// selection, the zipper is returned unchanged.
    pub fn collapse_selection(self, toward: Dir) -> Zipper {
        if !self.has_selection() {
            return self;
        }

        let Zipper { row, breadcrumbs } = fold_selection(self);
        Zipper { row: row.collapse(toward), breadcrumbs }
    }

    /// Folds the selection into the cursor's row and removes it, returning the selected nodes.
    /// The cursor is left where the selection was.
    pub fn take_selection(self) -> (Zipper, Option<Vec<Node>>) {
        let mut zipper = fold_selection(self);
        let nodes = zipper.row.selection.take().map(|s| s.nodes);
        (zipper, nodes)
    }
}
