// PDF text extraction backend, built on the pdf-extract crate.

use std::path::Path;

use tracing::debug;

use super::traits::{ExtractionError, TextExtractor};

/// Production extractor for PDF documents.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        debug!(document = %path.display(), "Extracting PDF text");
        pdf_extract::extract_text(path).map_err(|e| ExtractionError {
            document: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
