#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod node;
pub mod zipper;
pub mod edit;
pub mod vertical_work;
pub mod action;
pub mod editor;

#[cfg(test)]
mod tests;

pub use crate::{
    action::Action,
    editor::{Editor, EditorConfig},
    error::EditorError,
    node::{Node, NodeBuilder, NodeId, Row},
    vertical_work::VerticalWork,
    zipper::{Dir, State, Zipper},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
