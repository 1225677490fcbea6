use std::path::Path;

use super::Extractor;
use crate::ExtractError;

/// Reads the file as UTF-8 text. Invalid UTF-8 is an extraction error.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn format(&self) -> &'static str {
        "TXT"
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
