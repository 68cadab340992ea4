//! Error types for the handover-pdf library.

use std::io;
use thiserror::Error;

/// Result type alias for handover-pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating the document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when creating the output directory or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error assembling or serializing the PDF object graph.
    #[error("PDF write error: {0}")]
    PdfWrite(String),

    /// Error during non-PDF rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfWrite(err.to_string()),
        }
    }
}
