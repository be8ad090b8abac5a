//! Survey dataset readers
//!
//! Both surveys arrive either as Parquet or as CSV exports. The format is
//! chosen from the file extension; everything that is not `.parquet` is
//! read as delimited text.

use std::path::Path;

use arrow::record_batch::RecordBatch;
use log::debug;

use crate::algorithm::distribution::PredefinedEntry;
use crate::config::ColumnConfig;
use crate::error::util::safe_read_to_string;
use crate::error::{OccupationError, Result};
use crate::models::RawEntry;
use crate::utils::arrow::{extract_codes, extract_ids, extract_strings, fallback_id, float_to_code};
use crate::utils::io::parquet::read_parquet;
use crate::utils::logging::FileOperation;

/// Input format of a survey dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyFormat {
    Parquet,
    Csv,
}

impl SurveyFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_parquet = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
        if is_parquet { Self::Parquet } else { Self::Csv }
    }
}

/// Read the free-text survey
pub fn read_survey(path: &Path, columns: &ColumnConfig) -> Result<Vec<RawEntry>> {
    let entries = match SurveyFormat::from_path(path) {
        SurveyFormat::Parquet => {
            let wanted = [
                columns.response_id.as_str(),
                columns.mother_text.as_str(),
                columns.father_text.as_str(),
            ];
            let batches = read_parquet(path, Some(&wanted))?;
            let mut entries = Vec::new();
            for batch in &batches {
                let batch_entries = survey_entries_from_batch(batch, columns, entries.len())?;
                entries.extend(batch_entries);
            }
            entries
        }
        SurveyFormat::Csv => {
            let table = CsvTable::read(path)?;
            let id = table.column(&columns.response_id)?;
            let mother = table.column(&columns.mother_text)?;
            let father = table.column(&columns.father_text)?;
            table
                .rows
                .iter()
                .enumerate()
                .map(|(row, record)| RawEntry {
                    response_id: row_id(record, id, row),
                    mother_text: cell(record, mother).map(str::to_string),
                    father_text: cell(record, father).map(str::to_string),
                })
                .collect()
        }
    };
    debug!("Read {} survey entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Read the predefined-category survey
///
/// Code columns may be stored as integers or floats; non-integral values
/// count as missing.
pub fn read_predefined(path: &Path, columns: &ColumnConfig) -> Result<Vec<PredefinedEntry>> {
    match SurveyFormat::from_path(path) {
        SurveyFormat::Parquet => {
            let wanted = [
                columns.response_id.as_str(),
                columns.predefined_mother.as_str(),
                columns.predefined_father.as_str(),
            ];
            let batches = read_parquet(path, Some(&wanted))?;
            let mut entries = Vec::new();
            for batch in &batches {
                let batch_entries = predefined_entries_from_batch(batch, columns, entries.len())?;
                entries.extend(batch_entries);
            }
            Ok(entries)
        }
        SurveyFormat::Csv => {
            let table = CsvTable::read(path)?;
            let id = table.column(&columns.response_id)?;
            let mother = table.column(&columns.predefined_mother)?;
            let father = table.column(&columns.predefined_father)?;
            Ok(table
                .rows
                .iter()
                .enumerate()
                .map(|(row, record)| PredefinedEntry {
                    response_id: row_id(record, id, row),
                    mother: cell(record, mother).and_then(parse_code),
                    father: cell(record, father).and_then(parse_code),
                })
                .collect())
        }
    }
}

fn survey_entries_from_batch(
    batch: &RecordBatch,
    columns: &ColumnConfig,
    first_row: usize,
) -> Result<Vec<RawEntry>> {
    let ids = extract_ids(batch, &columns.response_id, first_row)?;
    let mother = required(extract_strings(batch, &columns.mother_text, true)?, &columns.mother_text)?;
    let father = required(extract_strings(batch, &columns.father_text, true)?, &columns.father_text)?;
    Ok(ids
        .into_iter()
        .zip(mother)
        .zip(father)
        .map(|((response_id, mother_text), father_text)| RawEntry {
            response_id,
            mother_text,
            father_text,
        })
        .collect())
}

fn predefined_entries_from_batch(
    batch: &RecordBatch,
    columns: &ColumnConfig,
    first_row: usize,
) -> Result<Vec<PredefinedEntry>> {
    let ids = extract_ids(batch, &columns.response_id, first_row)?;
    let mother = required(
        extract_codes(batch, &columns.predefined_mother, true)?,
        &columns.predefined_mother,
    )?;
    let father = required(
        extract_codes(batch, &columns.predefined_father, true)?,
        &columns.predefined_father,
    )?;
    Ok(ids
        .into_iter()
        .zip(mother)
        .zip(father)
        .map(|((response_id, mother), father)| PredefinedEntry {
            response_id,
            mother,
            father,
        })
        .collect())
}

fn required<T>(values: Option<T>, column: &str) -> Result<T> {
    values.ok_or_else(|| OccupationError::ColumnNotFound {
        column: column.to_string(),
    })
}

/// Parse a numeric answer code from a text cell
fn parse_code(raw: &str) -> Option<i64> {
    raw.trim().parse::<f64>().ok().and_then(float_to_code)
}

fn cell(record: &csv::StringRecord, index: usize) -> Option<&str> {
    record.get(index)
}

fn row_id(record: &csv::StringRecord, index: usize, row: usize) -> String {
    match record.get(index).map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => fallback_id(row),
    }
}

/// A delimited text file held in memory with its header
#[derive(Debug)]
pub struct CsvTable {
    pub headers: csv::StringRecord,
    pub rows: Vec<csv::StringRecord>,
}

impl CsvTable {
    /// Read a CSV file, detecting comma, semicolon or tab delimiters
    pub fn read(path: &Path) -> Result<Self> {
        let operation = FileOperation::read("CSV file", path);

        let content = safe_read_to_string(path, "CSV input")?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(sniff_delimiter(content))
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        operation.finish(rows.len());
        Ok(Self { headers, rows })
    }

    /// Index of a header, compared after trimming
    pub fn column(&self, name: &str) -> Result<usize> {
        self.find_column(|header| header == name)
            .ok_or_else(|| OccupationError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Index of the first header accepted by `matches`
    pub fn find_column(&self, matches: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers.iter().position(|header| matches(header.trim()))
    }
}

/// Pick the delimiter that splits the header line into the most fields
fn sniff_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or_default();
    [b',', b';', b'\t']
        .into_iter()
        .max_by_key(|&delimiter| {
            let fields = csv::ReaderBuilder::new()
                .delimiter(delimiter)
                .has_headers(false)
                .from_reader(header.as_bytes())
                .records()
                .next()
                .and_then(std::result::Result::ok)
                .map_or(0, |record| record.len());
            // Prefer comma on ties.
            (fields, u8::from(delimiter == b','))
        })
        .unwrap_or(b',')
}
