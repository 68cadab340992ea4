//! Page geometry and text measurement.
//!
//! The page is A4 with 10 mm side margins and a 15 mm bottom margin for the
//! automatic page break. Text is measured with the standard AFM advance
//! widths for Helvetica and Helvetica-Bold (thousandths of an em), which is
//! exact for the built-in Type1 fonts the renderer uses.

/// Points per millimeter.
pub const MM: f32 = 72.0 / 25.4;

/// A4 page width in points.
pub const PAGE_WIDTH: f32 = 210.0 * MM;

/// A4 page height in points.
pub const PAGE_HEIGHT: f32 = 297.0 * MM;

/// Left/right/top margin in points.
pub const MARGIN: f32 = 10.0 * MM;

/// Bottom margin triggering the automatic page break, in points.
pub const BOTTOM_MARGIN: f32 = 15.0 * MM;

/// Usable line width in points.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

// AFM advance widths for the printable ASCII range (0x20..0x7F),
// in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn advance(c: char, bold: bool) -> u16 {
    let table = if bold {
        &HELVETICA_BOLD_WIDTHS
    } else {
        &HELVETICA_WIDTHS
    };
    let code = c as usize;
    if (0x20..0x7F).contains(&code) {
        table[code - 0x20]
    } else {
        // Content is ASCII; fall back to the average lowercase width.
        556
    }
}

/// Measure the width of a text run at the given size, in points.
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|c| advance(c, bold) as u32).sum();
    units as f32 * size / 1000.0
}

/// Greedy word-wrap of a line to the given width, in points.
///
/// Words wider than the full line are hard-split so progress is always
/// made; with the document's margins this only matters for pathological
/// input, not the shipped content.
pub fn wrap(text: &str, size: f32, bold: bool, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, size, bold) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, size, bold) <= max_width {
            current = word.to_string();
        } else {
            let mut piece = String::new();
            for c in word.chars() {
                piece.push(c);
                if text_width(&piece, size, bold) > max_width {
                    piece.pop();
                    // A single glyph can exceed a tiny width; never emit
                    // the resulting empty line.
                    if !piece.is_empty() {
                        lines.push(std::mem::take(&mut piece));
                    }
                    piece.push(c);
                }
            }
            current = piece;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_size() {
        let narrow = text_width("handover", 11.0, false);
        let wide = text_width("handover", 22.0, false);
        assert!((wide - 2.0 * narrow).abs() < 0.001);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        assert!(text_width("Overview", 11.0, true) > text_width("Overview", 11.0, false));
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        let lines = wrap("1. Overview", 11.0, true, CONTENT_WIDTH);
        assert_eq!(lines, vec!["1. Overview"]);
    }

    #[test]
    fn test_wrap_preserves_words_in_order() {
        let text = "This document provides a complete technical handover of the AI Service \
                    for dental clinics, covering the voice agent, analytics system, and the \
                    AWS deployment strategy for the production environment.";
        let lines = wrap(text, 11.0, false, CONTENT_WIDTH);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 11.0, false) <= CONTENT_WIDTH);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_empty_yields_single_empty_line() {
        let lines = wrap("", 11.0, false, CONTENT_WIDTH);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wrap_width_below_single_glyph() {
        // Every glyph of "word" is wider than 1 pt at 11 pt; the split must
        // still make progress, one glyph per line, without blank lines.
        let lines = wrap("word", 11.0, false, 1.0);
        assert!(lines.iter().all(|l| !l.is_empty()));
        assert_eq!(lines.concat(), "word");
    }

    #[test]
    fn test_wrap_hard_splits_oversized_word() {
        let word = "x".repeat(400);
        let lines = wrap(&word, 11.0, false, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 11.0, false) <= 100.0);
        }
        assert_eq!(lines.concat(), word);
    }
}
