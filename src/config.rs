use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// take precedence over env vars, which take precedence over the defaults
/// (a `./data` tree with `raw/`, `helper/`, and `processed/` subfolders).
pub struct Config {
    /// Base data directory (CONCORD_DATA_DIR, default `./data`).
    pub data_dir: PathBuf,
    /// Taxonomy workbook path (CONCORD_TAXONOMY, default `<data>/helper/terms.xlsx`).
    pub taxonomy_path: PathBuf,
    /// Result CSV path (CONCORD_OUTPUT, default `<data>/processed/term_counts.csv`).
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration, letting CLI flags override env vars.
    ///
    /// The taxonomy and output defaults are derived from the resolved data
    /// directory, so `--data-dir` alone moves the whole tree.
    pub fn load_with(
        data_dir: Option<PathBuf>,
        taxonomy: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = data_dir
            .or_else(|| env::var("CONCORD_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("./data"));

        let taxonomy_path = taxonomy
            .or_else(|| env::var("CONCORD_TAXONOMY").ok().map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join("helper").join("terms.xlsx"));

        let output_path = output
            .or_else(|| env::var("CONCORD_OUTPUT").ok().map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join("processed").join("term_counts.csv"));

        Ok(Self {
            data_dir,
            taxonomy_path,
            output_path,
        })
    }

    /// Directory containing the source documents to count.
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    /// Check that the taxonomy workbook exists.
    /// Call this before any operation that needs the term list.
    pub fn require_taxonomy(&self) -> Result<()> {
        if !self.taxonomy_path.is_file() {
            anyhow::bail!(
                "Taxonomy workbook not found at {}\n\
                 Set CONCORD_TAXONOMY (or pass --taxonomy) to point at your .xlsx file.",
                self.taxonomy_path.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_beat_defaults() {
        let config = Config::load_with(
            Some(PathBuf::from("/tmp/corpus")),
            None,
            Some(PathBuf::from("/tmp/out.csv")),
        )
        .unwrap();
        assert_eq!(config.raw_dir(), PathBuf::from("/tmp/corpus/raw"));
        assert_eq!(
            config.taxonomy_path,
            PathBuf::from("/tmp/corpus/helper/terms.xlsx")
        );
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
    }
}
