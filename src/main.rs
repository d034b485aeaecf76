use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::{info, warn};

use concord::config::Config;
use concord::extract::corpus;
use concord::extract::pdf::PdfExtractor;
use concord::extract::traits::TextExtractor;
use concord::output;
use concord::pipeline::matrix::{self, FailurePolicy};
use concord::taxonomy::{excel, normalize};

/// Concord: document-term frequency matrix builder.
///
/// Counts case-insensitive occurrences of taxonomy terms across a set of
/// PDF documents and writes one CSV row per (document, category, term)
/// triple with at least one match.
#[derive(Parser)]
#[command(name = "concord", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: load taxonomy, extract documents, count, write CSV
    Run {
        /// Base data directory (documents under <dir>/raw)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Taxonomy workbook (.xlsx) path
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Result CSV path
        #[arg(long)]
        output: Option<PathBuf>,

        /// What to do when a document's text cannot be extracted
        #[arg(long, value_enum, default_value_t = OnError::Skip)]
        on_error: OnError,
    },

    /// Load the taxonomy and print the normalized term list
    Terms {
        /// Taxonomy workbook (.xlsx) path
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Print the entries as JSON instead of a grouped listing
        #[arg(long)]
        json: bool,
    },

    /// Extract one document's text and dump it to stdout
    Extract {
        /// The document to convert (e.g. data/raw/report.pdf)
        file: PathBuf,
    },
}

/// CLI face of the pipeline failure policy.
#[derive(Clone, Copy, ValueEnum)]
enum OnError {
    /// Skip the document, log a warning, continue with the rest
    Skip,
    /// Fail the whole run on the first unreadable document
    Abort,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Skip => FailurePolicy::Skip,
            OnError::Abort => FailurePolicy::Abort,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("concord=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data_dir,
            taxonomy,
            output: output_path,
            on_error,
        } => {
            let config = Config::load_with(data_dir, taxonomy, output_path)?;
            config.require_taxonomy()?;

            let table = excel::load_term_table(&config.taxonomy_path)?;
            let entries = normalize::normalize(&table);
            if entries.is_empty() {
                anyhow::bail!(
                    "Taxonomy {} produced no terms — every cell was empty.",
                    config.taxonomy_path.display()
                );
            }
            info!(terms = entries.len(), "Taxonomy normalized");
            println!(
                "Loaded {} terms from {}.",
                entries.len(),
                config.taxonomy_path.display()
            );

            let raw_dir = config.raw_dir();
            let documents = corpus::discover_documents(&raw_dir)?;
            if documents.is_empty() {
                println!("No PDF files found in {}.", raw_dir.display());
                return Ok(());
            }
            println!("PDF files found:");
            for doc in &documents {
                println!(
                    "  - {}",
                    doc.file_name().unwrap_or(doc.as_os_str()).to_string_lossy()
                );
            }
            println!();

            let extractor = PdfExtractor;
            let outcome =
                matrix::aggregate(&documents, &entries, &extractor, on_error.into())?;

            if outcome.is_empty() {
                // Distinct from success-with-data: nothing matched anywhere,
                // so no CSV is written and the user is told why.
                warn!("No term matched any document");
                println!(
                    "{}",
                    "No matches found. Check the taxonomy terms or the documents.".yellow()
                );
                if !outcome.skipped.is_empty() {
                    println!(
                        "({} document(s) were skipped due to extraction failures.)",
                        outcome.skipped.len()
                    );
                }
                return Ok(());
            }

            output::csv::write_counts(&config.output_path, &outcome.records)?;
            output::terminal::display_run_summary(&outcome, &config.output_path);
        }

        Commands::Terms { taxonomy, json } => {
            let config = Config::load_with(None, taxonomy, None)?;
            config.require_taxonomy()?;

            let table = excel::load_term_table(&config.taxonomy_path)?;
            let entries = normalize::normalize(&table);

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::terminal::display_term_list(&entries);
            }
        }

        Commands::Extract { file } => {
            let text = PdfExtractor.extract(&file)?;
            println!("{text}");
        }
    }

    Ok(())
}
