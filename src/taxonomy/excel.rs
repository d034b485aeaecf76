// Excel adapter: reads the first worksheet of an .xlsx workbook into a TermTable.
//
// The first row is the header (category names); every row below it contributes
// cells to the column under its header. Columns with a blank header are
// ignored, as are empty and error cells.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::table::{TaxonomyLoadError, TermColumn, TermTable};

/// Load a taxonomy workbook into its tabular form.
pub fn load_term_table(path: &Path) -> Result<TermTable, TaxonomyLoadError> {
    let workbook_error = |message: String| TaxonomyLoadError::Workbook {
        path: path.display().to_string(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TaxonomyLoadError::NoWorksheet {
            path: path.display().to_string(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = range.rows();

    // Header row: one column per named category, remembering its sheet index
    // so sparse sheets (blank header in the middle) stay aligned.
    let mut columns: Vec<TermColumn> = Vec::new();
    let mut indices: Vec<usize> = Vec::new();
    if let Some(header) = rows.next() {
        for (idx, cell) in header.iter().enumerate() {
            if let Some(name) = cell_to_string(cell) {
                let name = name.trim().to_string();
                if !name.is_empty() {
                    indices.push(idx);
                    columns.push(TermColumn {
                        name,
                        cells: Vec::new(),
                    });
                }
            }
        }
    }

    if columns.is_empty() {
        return Err(TaxonomyLoadError::MissingHeader {
            path: path.display().to_string(),
        });
    }

    for row in rows {
        for (slot, &idx) in indices.iter().enumerate() {
            if let Some(value) = row.get(idx).and_then(cell_to_string) {
                columns[slot].cells.push(value);
            }
        }
    }

    Ok(TermTable { columns })
}

/// String form of a present cell; None for missing/error cells.
///
/// Integral floats render without the trailing `.0` — spreadsheet apps store
/// plain numbers as floats, and a term list cell holding `2030` should match
/// the literal "2030" in document text.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_lose_the_decimal() {
        assert_eq!(cell_to_string(&Data::Float(2030.0)), Some("2030".into()));
        assert_eq!(cell_to_string(&Data::Float(1.5)), Some("1.5".into()));
    }

    #[test]
    fn missing_and_error_cells_are_none() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(
            cell_to_string(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
    }

    #[test]
    fn missing_workbook_is_a_load_error() {
        let err = load_term_table(Path::new("/nonexistent/terms.xlsx")).unwrap_err();
        assert!(matches!(err, TaxonomyLoadError::Workbook { .. }));
    }
}
