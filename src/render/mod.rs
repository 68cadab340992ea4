//! Rendering module for serializing a composed document.

mod json;
pub mod layout;
mod pdf;

pub use json::{to_json, JsonFormat};
pub use pdf::to_pdf;
