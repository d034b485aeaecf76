// Document discovery: list the PDFs under the raw-data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// List the PDF files directly under `dir`, sorted by path.
///
/// The extension check is case-insensitive (`.pdf` and `.PDF` both count);
/// sorting keeps result rows in the same order across reruns regardless of
/// directory enumeration order.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read document directory {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("a/report.pdf")));
        assert!(has_pdf_extension(Path::new("a/REPORT.PDF")));
        assert!(!has_pdf_extension(Path::new("a/report.docx")));
        assert!(!has_pdf_extension(Path::new("a/report")));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(discover_documents(Path::new("/nonexistent/raw")).is_err());
    }
}
