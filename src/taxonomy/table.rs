// Generic tabular form of a taxonomy: ordered columns of candidate terms.

use thiserror::Error;

/// One taxonomy column: the header names the category, the cells hold
/// candidate terms. Cells are the string forms of the present (non-missing)
/// values — untrimmed, possibly duplicated; normalization cleans them up.
#[derive(Debug, Clone)]
pub struct TermColumn {
    pub name: String,
    pub cells: Vec<String>,
}

/// A taxonomy table in column order, as read from the workbook.
#[derive(Debug, Clone)]
pub struct TermTable {
    pub columns: Vec<TermColumn>,
}

/// Failure to parse the taxonomy input into columns and cells.
///
/// Always fatal: without a term list there is nothing to count, so callers
/// abort before touching any document.
#[derive(Debug, Error)]
pub enum TaxonomyLoadError {
    #[error("failed to read taxonomy workbook {path}: {message}")]
    Workbook { path: String, message: String },

    #[error("taxonomy workbook {path} contains no worksheets")]
    NoWorksheet { path: String },

    #[error("taxonomy worksheet in {path} has no header row of category names")]
    MissingHeader { path: String },
}
