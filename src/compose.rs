//! Composition of the guide content into a [`Document`].
//!
//! The builder walks the three string tables in order (title, metadata,
//! body) and appends one block per line. Empty lines become spacing gaps;
//! body lines carrying a numbered-section prefix become bold headings.

use chrono::Utc;
use log::debug;

use crate::content;
use crate::model::{Document, TextBlock};

// Font sizes in points.
const TITLE_SIZE: f32 = 16.0;
const METADATA_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;

// Line heights and gaps in millimeters.
const TITLE_LINE_HEIGHT: f32 = 10.0;
const METADATA_LINE_HEIGHT: f32 = 8.0;
const HEADING_LINE_HEIGHT: f32 = 8.0;
const BODY_LINE_HEIGHT: f32 = 6.0;
const SECTION_GAP: f32 = 4.0;
const BODY_GAP: f32 = 2.0;
const HEADING_GAP: f32 = 1.0;

/// Incremental builder for the handover document.
///
/// Rendering is strictly sequential: title, then metadata, then body.
/// [`compose`] drives the full sequence; the individual steps are exposed
/// for tests that assert on intermediate block layouts.
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Create a builder with empty content and populated metadata.
    pub fn new() -> Self {
        let mut doc = Document::new();
        doc.metadata.title = Some(content::TITLE.to_string());
        doc.metadata.producer = Some(format!("handover-pdf {}", env!("CARGO_PKG_VERSION")));
        doc.metadata.created = Some(Utc::now());
        Self { doc }
    }

    /// Emit the bold title block followed by a section gap.
    pub fn render_title(&mut self) {
        self.doc.push_text(TextBlock::emphasized(
            content::TITLE,
            TITLE_SIZE,
            TITLE_LINE_HEIGHT,
        ));
        self.doc.push_spacing(SECTION_GAP);
    }

    /// Emit the metadata lines; empty entries become section gaps.
    pub fn render_metadata(&mut self) {
        for line in content::METADATA_LINES {
            if line.is_empty() {
                self.doc.push_spacing(SECTION_GAP);
            } else {
                self.doc
                    .push_text(TextBlock::new(line, METADATA_SIZE, METADATA_LINE_HEIGHT));
            }
        }
    }

    /// Emit the body lines.
    ///
    /// Empty entries become gaps; numbered headings are emphasized and
    /// followed by a minor gap; everything else is a plain paragraph.
    pub fn render_body(&mut self) {
        for line in content::BODY_LINES {
            if line.is_empty() {
                self.doc.push_spacing(BODY_GAP);
            } else if content::is_heading(line) {
                self.doc
                    .push_text(TextBlock::emphasized(*line, BODY_SIZE, HEADING_LINE_HEIGHT));
                self.doc.push_spacing(HEADING_GAP);
            } else {
                self.doc
                    .push_text(TextBlock::new(*line, BODY_SIZE, BODY_LINE_HEIGHT));
            }
        }
    }

    /// Finish composition and return the document.
    pub fn finish(self) -> Document {
        debug!("composed document with {} blocks", self.doc.block_count());
        self.doc
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the complete handover document from the static content tables.
pub fn compose() -> Document {
    let mut builder = DocumentBuilder::new();
    builder.render_title();
    builder.render_metadata();
    builder.render_body();
    builder.finish()
}
