//! The actions a host can ask the editor to perform.

use alloc::string::String;

use crate::{edit::{delimiter_pair, RowSide}, zipper::Dir};

/// One editing action. Hosts translate their own input events into these, or use
/// [Action::from_key] for web-style key names.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Action {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Backspace,
    Subscript,
    Superscript,
    Parens(char),
    Fraction,
    Root,
    InsertChar(char),
    StartSelecting,
    StopSelecting,
    Color(String),
    Cancel,
    Uncancel,
    InsertMatrix,
    AddRow(RowSide),
    AddColumn(Dir),
    DeleteRow,
    DeleteColumn,
}

impl Action {
    /// Parses a key name, such as `"ArrowLeft"` or `"x"`. Returns `None` for keys which have no
    /// action.
    pub fn from_key(key: &str) -> Option<Action> {
        Some(match key {
            "ArrowLeft" => Action::ArrowLeft,
            "ArrowRight" => Action::ArrowRight,
            "ArrowUp" => Action::ArrowUp,
            "ArrowDown" => Action::ArrowDown,
            "Backspace" => Action::Backspace,
            "Shift" => Action::StartSelecting,
            "_" => Action::Subscript,
            "^" => Action::Superscript,
            "/" => Action::Fraction,
            "√" => Action::Root,

            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    // Some other named key, like "Enter" or "Tab"
                    return None;
                }

                if c.is_control() || c.is_whitespace() {
                    return None;
                }

                if delimiter_pair(c).is_some() {
                    Action::Parens(c)
                } else {
                    Action::InsertChar(c)
                }
            }
        })
    }
}
