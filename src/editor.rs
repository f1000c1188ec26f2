//! A document being edited: the tree, the cursor, and everything needed to apply [Action]s to it.

use alloc::{string::String, vec::Vec};

use tracing::trace;

use crate::{
    action::Action,
    edit::{delimiter_pair, Script, LIMIT_GLYPHS},
    error::EditorError,
    node::{Node, NodeBuilder, NodeId, Row},
    zipper::{Dir, MoveVerticalDirection, State, Zipper},
};

/// Settings for an [Editor].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct EditorConfig {
    /// Glyphs which insert a summation-style node with bounds rather than a plain atom.
    pub limit_glyphs: Vec<char>,

    /// The size of the matrix inserted by [Action::InsertMatrix], as (rows, columns).
    pub matrix_size: (usize, usize),

    /// The colour applied by an [Action::Color] which doesn't name one.
    pub default_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            limit_glyphs: LIMIT_GLYPHS.to_vec(),
            matrix_size: (2, 2),
            default_color: String::from("red"),
        }
    }
}

/// An expression being edited.
///
/// The editor owns the ID allocator for its tree, so every node created while editing gets an ID
/// which is unique within the document.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Editor {
    pub state: State,
    ids: NodeBuilder,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Creates an editor with an empty document.
    pub fn new() -> Self {
        let mut ids = NodeBuilder::new();
        let root = ids.empty_row();
        Self { state: State::new(Zipper::new(root)), ids, config: EditorConfig::default() }
    }

    /// Creates an editor for an existing tree, with the cursor at the start. New node IDs carry on
    /// from the largest one already in the tree.
    pub fn from_row(root: Row) -> Result<Self, EditorError> {
        root.validate()?;
        let ids = NodeBuilder::starting_at(max_id(&root) + 1);
        Ok(Self { state: State::new(Zipper::new(root)), ids, config: EditorConfig::default() })
    }

    pub fn with_config(self, config: EditorConfig) -> Self {
        Self { config, ..self }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn zipper(&self) -> &Zipper {
        &self.state.zipper
    }

    /// The whole tree, without the cursor.
    pub fn root(&self) -> Row {
        self.state.zipper.to_row()
    }

    /// Parses and applies a key. Keys with no action are ignored, and `false` is returned.
    pub fn apply_key(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Applies one action.
    pub fn apply(&mut self, action: Action) {
        trace!(?action, "applying action");

        let state = self.state.clone();
        let ids = &mut self.ids;
        let config = &self.config;

        self.state = match action {
            Action::ArrowLeft => Self::move_horizontally(state, Dir::Left, ids),
            Action::ArrowRight => Self::move_horizontally(state, Dir::Right, ids),
            Action::ArrowUp => state.map_zipper(|z| z.vertical_work_move_vertically(MoveVerticalDirection::Up, ids)),
            Action::ArrowDown => state.map_zipper(|z| z.vertical_work_move_vertically(MoveVerticalDirection::Down, ids)),

            Action::Backspace => state.map_zipper(|z| z.vertical_work_backspace(ids)),
            Action::Subscript => state.map_zipper(|z| z.subsup(Script::Sub, ids)),
            Action::Superscript => state.map_zipper(|z| z.subsup(Script::Sup, ids)),
            Action::Parens(c) => state.map_zipper(|z| z.parens(c, ids)),
            Action::Fraction => state.map_zipper(|z| z.frac(ids)),
            Action::Root => state.map_zipper(|z| z.root(false, ids)),

            Action::InsertChar(c) if config.limit_glyphs.contains(&c) =>
                state.map_zipper(|z| z.insert_limits(c, ids)),
            Action::InsertChar(c) if delimiter_pair(c).is_some() =>
                state.map_zipper(|z| z.parens(c, ids)),
            Action::InsertChar(c) => state.map_zipper(|z| z.vertical_work_insert_char(c, ids)),

            Action::StartSelecting => state.start_selecting(),
            Action::StopSelecting => state.stop_selecting(),

            Action::Color(color) => {
                let color = if color.is_empty() { config.default_color.clone() } else { color };
                state.map_zipper(|z| z.color(&color))
            }
            Action::Cancel => state.map_zipper(|z| z.cancel(ids)),
            Action::Uncancel => state.map_zipper(|z| z.uncancel()),

            Action::InsertMatrix => {
                let (rows, cols) = config.matrix_size;
                state.map_zipper(|z| z.insert_matrix(rows, cols, ids))
            }
            Action::AddRow(side) => state.map_zipper(|z| z.add_row(side, ids)),
            Action::AddColumn(side) => state.map_zipper(|z| z.add_column(side, ids)),
            Action::DeleteRow => state.map_zipper(|z| z.delete_row()),
            Action::DeleteColumn => state.map_zipper(|z| z.delete_column()),
        };
    }

    /// Moves left or right. While selecting, or with something selected, this goes through the
    /// selection engine; otherwise, vertical work gets a chance to repair its columns.
    fn move_horizontally(state: State, toward: Dir, ids: &mut NodeBuilder) -> State {
        if state.selecting || state.zipper.has_selection() {
            state.move_horizontally(toward)
        } else {
            state.map_zipper(|z| z.vertical_work_move_horizontally(toward, ids))
        }
    }
}

/// The largest node ID anywhere in a row, including the row's own.
fn max_id(row: &Row) -> NodeId {
    row.children.iter().map(max_node_id).fold(row.id, NodeId::max)
}

fn max_node_id(node: &Node) -> NodeId {
    let own = match node {
        Node::Limits(l) => node.id().max(max_node_id(&l.inner)),
        Node::Delimited(d) => node.id().max(d.left_delim.id).max(d.right_delim.id),
        _ => node.id(),
    };
    node.child_rows().into_iter().map(max_id).fold(own, NodeId::max)
}
