//! Document loading errors.
//!
//! The `Display` output of [`LoadError`] is exactly what the console shows
//! the user.

use std::path::PathBuf;

/// A fault raised by a single format extractor.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(String),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("missing document part: {0}")]
    MissingPart(&'static str),
}

/// Why a document could not be turned into text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File does not exist. Please check the path and try again.")]
    NotFound(PathBuf),

    #[error("Unsupported file type. Please upload a PDF, DOCX, or TXT file.")]
    Unsupported(PathBuf),

    #[error("Error reading {format} file: {source}")]
    Extraction {
        format: &'static str,
        #[source]
        source: ExtractError,
    },
}
