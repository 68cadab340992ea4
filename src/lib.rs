//! # handover-pdf
//!
//! Generates the AI Service handover & AWS deployment guide as a PDF.
//!
//! The guide content is fixed: three ordered string tables (title, metadata,
//! body) are composed into a block document and serialized with `lopdf`.
//! Body lines carrying a numbered-section prefix ("1." through "16.") are
//! set in bold; empty lines become vertical gaps.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> handover_pdf::Result<()> {
//!     let path = handover_pdf::generate()?;
//!     println!("PDF generated at {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod compose;
pub mod content;
pub mod error;
pub mod model;
pub mod render;

pub use compose::{compose, DocumentBuilder};
pub use error::{Error, Result};
pub use model::{Block, Document, Metadata, TextBlock};
pub use render::{to_json, to_pdf, JsonFormat};

use std::fs;
use std::path::{Path, PathBuf};

/// Generate the guide at the fixed output path
/// (`docs/AI-service-handover.pdf`), creating the directory if needed.
///
/// Any existing file at the path is overwritten. Returns the output path.
pub fn generate() -> Result<PathBuf> {
    generate_to(content::OUTPUT_PATH)
}

/// Generate the guide at the given path.
///
/// The parent directory is created if absent; an existing file is
/// overwritten. Returns the output path.
///
/// # Example
///
/// ```no_run
/// let path = handover_pdf::generate_to("out/guide.pdf").unwrap();
/// assert!(path.exists());
/// ```
pub fn generate_to<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let document = compose();
    let bytes = render::to_pdf(&document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());

    Ok(path.to_path_buf())
}
