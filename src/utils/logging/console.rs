//! Console output utilities
//!
//! Human-readable run reports printed by the binary after a run.

use crate::algorithm::distribution::{ComparisonTable, SurveySource};
use crate::models::ParentRole;
use crate::pipeline::RunSummary;

/// Print per-parent counts and the written files
pub fn print_run_summary(summary: &RunSummary) {
    println!(
        "Coded {} of {} respondents ({} without any occupation text) in {} ms",
        summary.coded, summary.entries, summary.excluded, summary.elapsed_ms
    );
    println!(
        "{:<8} {:>9} {:>9} {:>9} {:>12} {:>8}",
        "parent", "answered", "automatic", "corrected", "unclassified", "missing"
    );
    for role in ParentRole::all() {
        let counts = summary.role(role);
        println!(
            "{:<8} {:>9} {:>9} {:>9} {:>12} {:>8}",
            role.as_str(),
            counts.answered(),
            counts.automatic,
            counts.corrected,
            counts.unclassified,
            counts.missing
        );
    }
    if summary.conflicts > 0 {
        println!("Conflicting correction keys: {}", summary.conflicts);
    }
    if let Some(predefined) = &summary.predefined {
        println!(
            "Predefined survey: {} rows, {} unknown codes",
            predefined.rows, predefined.unknown_codes
        );
    }
    println!("Outputs:");
    for path in &summary.outputs {
        println!("  - {}", path.display());
    }
}

/// Print a comparison table with both surveys side by side
pub fn print_comparison(table: &ComparisonTable) {
    println!("Comparison ({}):", table.scope);
    println!(
        "  {:>5}  {:<70} {:>10} {:>10}",
        "code", "category", "free text", "predefined"
    );
    for free in table.rows_for(SurveySource::FreeText) {
        let predefined = table
            .row(SurveySource::Predefined, free.category)
            .map_or(0.0, |row| row.share);
        println!(
            "  {:>5}  {:<70} {:>9.1}% {:>9.1}%",
            free.category_code,
            free.category_label,
            free.share * 100.0,
            predefined * 100.0
        );
    }
}
