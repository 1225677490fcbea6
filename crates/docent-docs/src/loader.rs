//! Suffix-keyed dispatch from a path to the matching extractor.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::extractors::{DocxExtractor, Extractor, PdfExtractor, PlainTextExtractor};
use crate::LoadError;

/// Loads documents by dispatching on the file-name suffix.
///
/// The loader never caches: every call re-reads the file.
pub struct DocumentLoader {
    /// Registered extractors keyed by suffix without the dot (e.g. `"pdf"`).
    extractors: HashMap<String, Box<dyn Extractor>>,
}

impl DocumentLoader {
    /// A loader with no formats registered.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register (or replace) the extractor for a suffix such as `"md"`.
    pub fn register(&mut self, suffix: impl Into<String>, extractor: Box<dyn Extractor>) {
        self.extractors.insert(suffix.into(), extractor);
    }

    pub fn with_extractor(mut self, suffix: impl Into<String>, extractor: Box<dyn Extractor>) -> Self {
        self.register(suffix, extractor);
        self
    }

    /// Extract the text of the document at `path`, trimmed of surrounding
    /// whitespace.
    ///
    /// Unsupported suffixes are rejected without touching the filesystem.
    /// The caller is expected to have checked that the path exists.
    pub fn load(&self, path: &Path) -> Result<String, LoadError> {
        let extractor = self
            .extractor_for(path)
            .ok_or_else(|| LoadError::Unsupported(path.to_path_buf()))?;

        debug!(path = %path.display(), format = extractor.format(), "extracting document");

        let text = extractor
            .extract(path)
            .map_err(|source| LoadError::Extraction {
                format: extractor.format(),
                source,
            })?;

        let text = text.trim().to_string();
        info!(path = %path.display(), chars = text.chars().count(), "document loaded");
        Ok(text)
    }

    fn extractor_for(&self, path: &Path) -> Option<&dyn Extractor> {
        let file_name = path.file_name()?.to_str()?;
        let (_, suffix) = file_name.rsplit_once('.')?;
        self.extractors.get(suffix).map(|e| &**e)
    }
}

impl Default for DocumentLoader {
    /// PDF, DOCX, and plain-text extractors.
    fn default() -> Self {
        Self::empty()
            .with_extractor("pdf", Box::new(PdfExtractor))
            .with_extractor("docx", Box::new(DocxExtractor))
            .with_extractor("txt", Box::new(PlainTextExtractor))
    }
}
