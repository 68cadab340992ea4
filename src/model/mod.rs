//! Document model: metadata, blocks, and text styling.

mod block;
mod document;

pub use block::{Block, TextBlock};
pub use document::{Document, Metadata};
