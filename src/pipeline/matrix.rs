// Matrix aggregation pipeline: documents × taxonomy terms -> count records.
//
// For each document, in order: extract its text, then count every taxonomy
// entry against it, keeping only positive counts. Text lives exactly as long
// as one document's counting — nothing is cached between documents, which is
// also why the loop would be trivially parallelizable if it ever needed to be.

use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::counting::counter::TermCounter;
use crate::counting::record::{CountRecord, MatrixOutcome, SkippedDocument};
use crate::extract::traits::TextExtractor;
use crate::taxonomy::normalize::TaxonomyEntry;

/// What to do when a document's text cannot be extracted.
///
/// An explicit policy rather than an implicit behavior, so runs over flaky
/// document sets are predictable and the choice shows up in `--help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure, record the document as skipped, continue (default).
    Skip,
    /// Fail the whole run on the first bad document.
    Abort,
}

/// Run the counting loop over every document.
///
/// Output rows follow document order, then taxonomy order — deterministic
/// given deterministic inputs. Each (document, category, term) triple is
/// visited exactly once, and only triples with count >= 1 produce a row.
pub fn aggregate(
    documents: &[PathBuf],
    entries: &[TaxonomyEntry],
    extractor: &dyn TextExtractor,
    policy: FailurePolicy,
) -> Result<MatrixOutcome> {
    // Compile every matcher up front: each one is reused across all documents,
    // and a malformed term should fail the run before any extraction happens.
    let mut counters = Vec::with_capacity(entries.len());
    for entry in entries {
        counters.push(TermCounter::new(&entry.term)?);
    }

    let mut outcome = MatrixOutcome::default();

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Documents [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for path in documents {
        let document = document_name(path);

        let text = match extractor.extract(path) {
            Ok(text) => text,
            Err(e) => match policy {
                FailurePolicy::Skip => {
                    warn!(
                        document = %document,
                        error = %e,
                        "Extraction failed, skipping document"
                    );
                    outcome.skipped.push(SkippedDocument {
                        document,
                        reason: e.message,
                    });
                    pb.inc(1);
                    continue;
                }
                FailurePolicy::Abort => {
                    pb.abandon();
                    return Err(e.into());
                }
            },
        };

        let before = outcome.records.len();
        for (entry, counter) in entries.iter().zip(&counters) {
            let count = counter.count(&text);
            if count > 0 {
                outcome.records.push(CountRecord {
                    document: document.clone(),
                    category: entry.category.clone(),
                    term: entry.term.clone(),
                    count: count as u64,
                });
            }
        }

        info!(
            document = %document,
            matched_terms = outcome.records.len() - before,
            "Document counted"
        );
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(outcome)
}

/// Result rows identify documents by file name, not full path.
fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
