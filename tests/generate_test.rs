//! Integration tests for end-to-end PDF generation.

use handover_pdf::{compose, content, generate_to};
use lopdf::Document as PdfDocument;

#[test]
fn test_generate_writes_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("guide.pdf");

    let written = generate_to(&target).unwrap();
    assert_eq!(written, target);

    let bytes = std::fs::read(&target).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_generate_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let sibling = dir.path().join("existing.txt");
    std::fs::write(&sibling, "untouched").unwrap();

    let target = dir.path().join("docs").join("nested").join("guide.pdf");
    assert!(!target.parent().unwrap().exists());

    generate_to(&target).unwrap();
    assert!(target.exists());

    // Unrelated sibling files are left alone.
    assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "untouched");
}

#[test]
fn test_generate_twice_overwrites_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("guide.pdf");

    generate_to(&target).unwrap();
    let first = std::fs::read(&target).unwrap();

    generate_to(&target).unwrap();
    let second = std::fs::read(&target).unwrap();

    // Byte content may differ in the creation timestamp, but both runs
    // produce a loadable PDF with the same page structure.
    let first_doc = PdfDocument::load_mem(&first).unwrap();
    let second_doc = PdfDocument::load_mem(&second).unwrap();
    assert_eq!(first_doc.get_pages().len(), second_doc.get_pages().len());
}

#[test]
fn test_generated_pdf_has_title_in_info() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("guide.pdf");
    generate_to(&target).unwrap();

    let pdf = PdfDocument::load(&target).unwrap();
    let info_ref = pdf.trailer.get(b"Info").unwrap();
    let info = pdf
        .get_dictionary(info_ref.as_reference().unwrap())
        .unwrap();
    let title = info.get(b"Title").unwrap().as_str().unwrap();
    assert_eq!(std::str::from_utf8(title).unwrap(), content::TITLE);
}

#[test]
fn test_composed_structure_matches_source_tables() {
    let doc = compose();

    // Every non-empty source line appears exactly once, in declared order.
    let mut expected: Vec<&str> = vec![content::TITLE];
    expected.extend(content::METADATA_LINES.iter().filter(|l| !l.is_empty()));
    expected.extend(content::BODY_LINES.iter().filter(|l| !l.is_empty()));

    let rendered: Vec<&str> = doc.text_blocks().map(|b| b.content.as_str()).collect();
    assert_eq!(rendered, expected);

    // Emphasis holds exactly for the title and numbered headings.
    for block in doc.text_blocks() {
        let expect_bold =
            block.content == content::TITLE || content::is_heading(&block.content);
        assert_eq!(block.emphasis, expect_bold, "line: {}", block.content);
    }
}
