// Colored terminal output for term lists and run summaries.
//
// This module handles all terminal-specific formatting; the main.rs
// subcommand handlers delegate here.

use std::path::Path;

use colored::Colorize;

use crate::counting::record::MatrixOutcome;
use crate::output::truncate_chars;
use crate::taxonomy::normalize::TaxonomyEntry;

/// Display the normalized taxonomy grouped by category.
pub fn display_term_list(entries: &[TaxonomyEntry]) {
    if entries.is_empty() {
        println!("The taxonomy produced no terms. Check the workbook contents.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Taxonomy ({} terms) ===", entries.len()).bold()
    );

    let mut current_category: Option<&str> = None;
    for entry in entries {
        if current_category != Some(entry.category.as_str()) {
            println!("\n  {}", entry.category.bold());
            current_category = Some(entry.category.as_str());
        }
        println!("    - {}", truncate_chars(&entry.term, 60));
    }
    println!();
}

/// Display the post-run summary: row counts, skipped documents, output
/// location, and a head preview of the first result rows.
pub fn display_run_summary(outcome: &MatrixOutcome, output_path: &Path) {
    println!(
        "\n{}",
        format!(
            "=== Results: {} rows across {} documents ===",
            outcome.records.len(),
            outcome.documents_with_matches()
        )
        .bold()
    );

    if !outcome.skipped.is_empty() {
        println!(
            "\n  {} {} document(s) skipped:",
            "!".yellow().bold(),
            outcome.skipped.len()
        );
        for skipped in &outcome.skipped {
            println!(
                "    {} — {}",
                skipped.document.yellow(),
                truncate_chars(&skipped.reason, 80).dimmed()
            );
        }
    }

    println!("\nSaved results to: {}", output_path.display());

    // Head preview, pandas-style
    println!();
    println!(
        "  {:<28} {:<20} {:<24} {:>6}",
        "document".dimmed(),
        "category".dimmed(),
        "term".dimmed(),
        "count".dimmed(),
    );
    println!("  {}", "-".repeat(80).dimmed());
    for record in outcome.records.iter().take(5) {
        println!(
            "  {:<28} {:<20} {:<24} {:>6}",
            truncate_chars(&record.document, 26),
            truncate_chars(&record.category, 18),
            truncate_chars(&record.term, 22),
            record.count,
        );
    }
    if outcome.records.len() > 5 {
        println!("  {}", format!("... {} more rows", outcome.records.len() - 5).dimmed());
    }
    println!();
}
