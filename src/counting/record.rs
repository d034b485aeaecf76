// Result row types for the frequency matrix.

use serde::{Deserialize, Serialize};

/// One result row: a (document, category, term) triple with a positive count.
///
/// Zero-count combinations are never materialized — the matrix is sparse by
/// construction. Field order here is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub document: String,
    pub category: String,
    pub term: String,
    pub count: u64,
}

/// A document dropped from the run because its text could not be extracted.
#[derive(Debug, Clone)]
pub struct SkippedDocument {
    pub document: String,
    pub reason: String,
}

/// Everything a pipeline run produced: the result rows plus the documents
/// that had to be skipped along the way.
#[derive(Debug, Default)]
pub struct MatrixOutcome {
    /// Rows in document order, then taxonomy order.
    pub records: Vec<CountRecord>,
    /// Documents abandoned under the skip policy, with the extraction failure.
    pub skipped: Vec<SkippedDocument>,
}

impl MatrixOutcome {
    /// True when no document matched any term — a condition callers must
    /// surface distinctly instead of writing an empty result file.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct documents that contributed at least one row.
    pub fn documents_with_matches(&self) -> usize {
        let mut docs: Vec<&str> = self.records.iter().map(|r| r.document.as_str()).collect();
        docs.dedup();
        docs.len()
    }
}
