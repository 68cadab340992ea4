//! PDF serialization of a composed [`Document`] via `lopdf`.
//!
//! Pages are A4 with the geometry from [`layout`]; text is set in the
//! built-in Type1 Helvetica faces, so no font embedding is needed. Each
//! wrapped line becomes its own BT/ET text object at an absolute position,
//! and a new page is started whenever a line would cross the bottom margin.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as PdfDocument, Object, Stream};

use crate::error::Result;
use crate::model::{Block, Document, TextBlock};
use crate::render::layout::{self, BOTTOM_MARGIN, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Serialize the document to PDF bytes.
pub fn to_pdf(document: &Document) -> Result<Vec<u8>> {
    let mut composer = PageComposer::new();

    for block in &document.blocks {
        match block {
            Block::Text(text) => composer.text_block(text),
            Block::Spacing(gap) => composer.spacing(*gap),
        }
    }

    let pages = composer.finish();
    log::debug!("laid out {} page(s)", pages.len());
    assemble(document, pages)
}

/// Accumulates content-stream operations page by page, tracking the
/// vertical cursor from the top of the current page.
struct PageComposer {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
}

impl PageComposer {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: MARGIN,
        }
    }

    fn text_block(&mut self, block: &TextBlock) {
        let line_height = block.line_height * layout::MM;
        for line in layout::wrap(&block.content, block.size, block.emphasis, CONTENT_WIDTH) {
            if self.y + line_height > PAGE_HEIGHT - BOTTOM_MARGIN {
                self.break_page();
            }
            self.line(&line, block.size, block.emphasis, line_height);
            self.y += line_height;
        }
    }

    fn spacing(&mut self, gap: f32) {
        self.y += gap * layout::MM;
    }

    fn line(&mut self, text: &str, size: f32, bold: bool, line_height: f32) {
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        // Baseline vertically centered within the line box.
        let baseline = PAGE_HEIGHT - (self.y + 0.5 * line_height + 0.35 * size);

        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.into(), Object::Real(size)]));
        self.ops.push(Operation::new(
            "Td",
            vec![Object::Real(MARGIN), Object::Real(baseline)],
        ));
        self.ops
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.ops));
        self.y = MARGIN;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        // The final page is emitted even if the document ends in spacing.
        self.pages.push(self.ops);
        self.pages
    }
}

/// Build the PDF object graph and serialize it.
fn assemble(document: &Document, pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
    let mut pdf = PdfDocument::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let regular_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let stream = Stream::new(dictionary! {}, content.encode()?);
        let content_id = pdf.add_object(stream);
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let info_id = pdf.add_object(info_dictionary(document));
    pdf.trailer.set("Info", info_id);

    pdf.compress();

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

fn info_dictionary(document: &Document) -> lopdf::Dictionary {
    let mut info = lopdf::Dictionary::new();
    if let Some(ref title) = document.metadata.title {
        info.set("Title", Object::string_literal(title.as_str()));
    }
    if let Some(ref producer) = document.metadata.producer {
        info.set("Producer", Object::string_literal(producer.as_str()));
    }
    if let Some(created) = document.metadata.created {
        let stamp = created.format("D:%Y%m%d%H%M%SZ").to_string();
        info.set("CreationDate", Object::string_literal(stamp));
    }
    info
}
