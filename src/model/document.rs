//! Document-level types.

use super::{Block, TextBlock};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A composed document: metadata plus an ordered, append-only block list.
///
/// Blocks are appended in composition order and never reordered; the
/// serialized output preserves this order exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, producer, creation date)
    pub metadata: Metadata,

    /// Blocks in composition order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Append a text block.
    pub fn push_text(&mut self, block: TextBlock) {
        self.blocks.push(Block::Text(block));
    }

    /// Append a vertical spacing gap (millimeters).
    pub fn push_spacing(&mut self, gap: f32) {
        self.blocks.push(Block::Spacing(gap));
    }

    /// Get the number of blocks, spacing included.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the text blocks, skipping spacing gaps.
    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter_map(Block::as_text)
    }

    /// Get plain text content of the document, one line per text block.
    pub fn plain_text(&self) -> String {
        self.text_blocks()
            .map(|block| block.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata, written into the PDF Info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Producer application
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_text_blocks_skip_spacing() {
        let mut doc = Document::new();
        doc.push_text(TextBlock::new("first", 11.0, 6.0));
        doc.push_spacing(2.0);
        doc.push_text(TextBlock::new("second", 11.0, 6.0));

        assert_eq!(doc.block_count(), 3);
        let lines: Vec<_> = doc.text_blocks().map(|b| b.content.as_str()).collect();
        assert_eq!(lines, vec!["first", "second"]);
        assert_eq!(doc.plain_text(), "first\nsecond");
    }
}
