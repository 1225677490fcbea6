use std::panic;
use std::path::Path;

use tracing::debug;

use super::Extractor;
use crate::ExtractError;

/// Extracts the text layer of every page via `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn format(&self) -> &'static str {
        "PDF"
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed inputs instead of returning an error.
        match panic::catch_unwind(|| pdf_extract::extract_text(path)) {
            Ok(Ok(text)) => {
                debug!(chars = text.len(), "extracted PDF text");
                Ok(text)
            }
            Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
            Err(_) => Err(ExtractError::Pdf("malformed PDF document".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        let err = PdfExtractor.extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
