//! Output writers
//!
//! Tabular outputs are CSV with a header row, the per-respondent dataset is
//! additionally written as Parquet, and the run summary as pretty JSON.

use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::corrections::{CorrectionConflict, ReviewRow};
use crate::algorithm::distribution::ComparisonTable;
use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::models::RespondentRecord;
use crate::utils::io::parquet::write_parquet;
use crate::utils::logging::FileOperation;

/// Serialize rows to a CSV file with a header derived from `T`
///
/// An empty slice still produces a file holding only `headers`.
pub fn write_csv<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let operation = FileOperation::write("CSV file", path);

    let file = safe_create_file(path, "CSV output")?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(!rows.is_empty())
        .from_writer(file);
    if rows.is_empty() {
        writer.write_record(headers)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| crate::error::OccupationError::io(path, e))?;

    operation.finish(rows.len());
    Ok(())
}

/// Write the per-respondent dataset as Parquet and CSV next to each other
pub fn write_respondents(dir: &Path, stem: &str, records: &[RespondentRecord]) -> Result<()> {
    let batch = RespondentRecord::to_record_batch(records)?;
    write_parquet(
        &dir.join(format!("{stem}.parquet")),
        &RespondentRecord::schema(),
        &[batch],
    )?;
    write_csv(
        &dir.join(format!("{stem}.csv")),
        &RESPONDENT_HEADERS,
        records,
    )
}

const RESPONDENT_HEADERS: [&str; 7] = [
    "response_id",
    "mother_detailed",
    "mother_category",
    "mother_status",
    "father_detailed",
    "father_category",
    "father_status",
];

/// Write one comparison table as `comparison_<scope>.csv`
pub fn write_comparison(dir: &Path, table: &ComparisonTable) -> Result<()> {
    write_csv(
        &dir.join(format!("comparison_{}.csv", table.scope)),
        &["category_code", "category_label", "source_survey", "count", "share"],
        &table.rows,
    )
}

/// Write a review sheet as `review_<role>.csv`
pub fn write_review(dir: &Path, role: &str, rows: &[ReviewRow]) -> Result<()> {
    write_csv(
        &dir.join(format!("review_{role}.csv")),
        &[
            "occupation",
            "count",
            "detailed_code",
            "auto_category",
            "flag",
            "suggestion",
        ],
        rows,
    )
}

/// Write conflicting correction keys, one row per key
///
/// Suggested codes are joined with `|` to keep one column.
pub fn write_conflicts<'a>(
    path: &Path,
    conflicts: impl IntoIterator<Item = &'a CorrectionConflict>,
) -> Result<()> {
    #[derive(Serialize)]
    struct ConflictRow<'r> {
        role: &'r str,
        occupation: &'r str,
        suggestions: String,
    }

    let rows = conflicts
        .into_iter()
        .map(|conflict| ConflictRow {
            role: conflict.role.as_str(),
            occupation: &conflict.occupation,
            suggestions: conflict.suggestions.iter().join("|"),
        })
        .collect_vec();
    write_csv(path, &["role", "occupation", "suggestions"], &rows)
}

/// Write any serializable value as pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = safe_create_file(path, "JSON output")?;
    serde_json::to_writer_pretty(file, value)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
