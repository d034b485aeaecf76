// Text extractor trait — swap-ready abstraction.
//
// Like the rest of the pipeline, the aggregator never names a concrete
// converter: it sees this trait. Tests use an in-memory mock; production
// uses the PDF backend.

use std::path::Path;

use thiserror::Error;

/// One document could not be converted to text.
///
/// Recoverable at per-document granularity: under the default failure policy
/// the pipeline skips the document and keeps going. It is never silently
/// turned into empty text — an unreadable document must not look like a
/// document with zero matches.
#[derive(Debug, Error)]
#[error("failed to extract text from {document}: {message}")]
pub struct ExtractionError {
    pub document: String,
    pub message: String,
}

/// Trait for converting one source document into its plain-text content.
pub trait TextExtractor {
    /// Return the full linear text of the document at `path`.
    ///
    /// Layout is not preserved — only the character sequence matters to the
    /// term counter.
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
