// CSV writer for the frequency matrix.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::counting::record::CountRecord;

/// Write the result rows to `path` as `document,category,term,count`.
///
/// Rows are written in the order given — the aggregator already ordered them.
/// The parent directory is created if missing (the processed/ folder usually
/// doesn't exist on a first run). Callers decide what to do about an empty
/// record set; this function writes whatever it is handed.
pub fn write_counts(path: &Path, records: &[CountRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create output directory {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create output file {}", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
