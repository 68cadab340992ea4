//! Block-level types.

use serde::{Deserialize, Serialize};

/// One unit of rendered content: a styled line of text or a vertical gap.
///
/// Adjacent tagging is required here: internal tagging cannot represent the
/// `Spacing` variant's bare float payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    /// A line of text with a fixed style
    Text(TextBlock),

    /// A vertical spacing gap, in millimeters
    Spacing(f32),
}

impl Block {
    /// Get the text block, if this is one.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(text) => Some(text),
            Block::Spacing(_) => None,
        }
    }

    /// Check if this block is a spacing gap.
    pub fn is_spacing(&self) -> bool {
        matches!(self, Block::Spacing(_))
    }
}

/// A styled line of text.
///
/// Font size is in points; line height is the cell height in millimeters.
/// The split mirrors the layout convention the document was authored in,
/// where type is measured in points but the page grid in millimeters.
/// Values are fixed at composition time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The text content
    pub content: String,

    /// Whether the line is rendered in the bold face
    pub emphasis: bool,

    /// Font size in points
    pub size: f32,

    /// Line height in millimeters
    pub line_height: f32,
}

impl TextBlock {
    /// Create a normal-weight text block.
    pub fn new(content: impl Into<String>, size: f32, line_height: f32) -> Self {
        Self {
            content: content.into(),
            emphasis: false,
            size,
            line_height,
        }
    }

    /// Create an emphasized (bold) text block.
    pub fn emphasized(content: impl Into<String>, size: f32, line_height: f32) -> Self {
        Self {
            content: content.into(),
            emphasis: true,
            size,
            line_height,
        }
    }
}
