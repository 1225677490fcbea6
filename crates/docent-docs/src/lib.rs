//! Document text extraction for Docent.
//!
//! A [`DocumentLoader`] maps a file-name suffix to an [`Extractor`] and
//! turns the file at a path into plain text. Three formats are registered
//! by default:
//! - `.pdf` via `pdf-extract`
//! - `.docx` by reading `word/document.xml` out of the ZIP container
//! - `.txt` read as UTF-8
//!
//! Suffix matching is case-sensitive: `report.PDF` is unsupported.

pub mod error;
pub mod extractors;
pub mod loader;

pub use error::{ExtractError, LoadError};
pub use extractors::{DocxExtractor, Extractor, PdfExtractor, PlainTextExtractor};
pub use loader::DocumentLoader;
