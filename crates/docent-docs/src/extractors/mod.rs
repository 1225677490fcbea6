//! Format-specific text extractors.
//!
//! Each extractor is a stateless capability: given a path, produce the
//! document's text or a descriptive [`ExtractError`].

mod docx;
mod pdf;
mod text;

use std::path::Path;

use crate::ExtractError;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

/// Turns a file of one format into plain text.
pub trait Extractor: Send + Sync {
    /// Short format name used in error messages (e.g. `"PDF"`).
    fn format(&self) -> &'static str;

    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}
