// Taxonomy normalization: flatten a TermTable into deduplicated
// (category, term) pairs.
//
// Order is stable and significant — column order, then first-seen cell order —
// because the aggregator's output rows follow taxonomy order and reruns must
// produce identical files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::table::TermTable;

/// One term under one category. The pair is the identity: the same term
/// string under two different categories is two distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub category: String,
    pub term: String,
}

/// Flatten a taxonomy table into its entry list.
///
/// Per column: trim each cell to its string form and drop the empties.
/// Across the table: keep the first occurrence of each (category, term)
/// pair and discard the rest. Running this twice on the same table yields
/// the identical sequence.
pub fn normalize(table: &TermTable) -> Vec<TaxonomyEntry> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut entries = Vec::new();

    for column in &table.columns {
        for cell in &column.cells {
            let term = cell.trim();
            if term.is_empty() {
                continue;
            }
            if seen.insert((column.name.clone(), term.to_string())) {
                entries.push(TaxonomyEntry {
                    category: column.name.clone(),
                    term: term.to_string(),
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::table::TermColumn;

    fn table(columns: &[(&str, &[&str])]) -> TermTable {
        TermTable {
            columns: columns
                .iter()
                .map(|(name, cells)| TermColumn {
                    name: name.to_string(),
                    cells: cells.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn duplicate_within_column_collapses() {
        let entries = normalize(&table(&[("A", &["alpha", "alpha", "beta"])]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].term, "alpha");
        assert_eq!(entries[1].term, "beta");
    }

    #[test]
    fn same_term_under_two_categories_is_two_entries() {
        let entries = normalize(&table(&[("A", &["alpha"]), ("B", &["alpha"])]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "A");
        assert_eq!(entries[1].category, "B");
    }

    #[test]
    fn whitespace_cells_are_dropped_and_values_trimmed() {
        let entries = normalize(&table(&[("A", &["  alpha  ", "   ", ""])]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].term, "alpha");
    }

    #[test]
    fn trimmed_duplicates_collapse_too() {
        // "alpha" and " alpha " are the same term once trimmed
        let entries = normalize(&table(&[("A", &["alpha", " alpha "])]));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn normalization_is_idempotent() {
        let t = table(&[("A", &["alpha", "beta"]), ("B", &["alpha", "gamma"])]);
        assert_eq!(normalize(&t), normalize(&t));
    }
}
