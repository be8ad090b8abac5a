//! Correction sheet readers
//!
//! Reviewers maintain corrections in a workbook with one sheet per parent.
//! The same content is also accepted as plain CSV: either a directory
//! holding `<sheet>.csv` per parent, or a single CSV path whose stem is
//! suffixed with the sheet name (`corrections_mother.csv`).

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use log::{debug, warn};

use crate::algorithm::corrections::{
    CorrectionIndex, CorrectionRecord, CorrectionSet, parse_flag, parse_suggestion,
};
use crate::config::SheetConfig;
use crate::error::{OccupationError, Result};
use crate::models::ParentRole;
use crate::utils::io::survey::CsvTable;
use crate::utils::logging::FileOperation;

const OCCUPATION_HEADERS: &[&str] = &["occupation", "beruf"];
const FLAG_HEADERS: &[&str] = &["flag"];
const SUGGESTION_HEADERS: &[&str] = &["suggestion", "korrektur", "vorschlag"];

/// Positions of the correction columns in a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SheetLayout {
    occupation: usize,
    flag: Option<usize>,
    suggestion: Option<usize>,
}

impl SheetLayout {
    fn from_headers(sheet: &str, headers: &[&str]) -> Result<Self> {
        let find = |aliases: &[&str]| {
            headers.iter().position(|header| {
                let header = header.trim().to_lowercase();
                aliases.iter().any(|alias| header == *alias)
            })
        };
        let occupation = find(OCCUPATION_HEADERS).ok_or_else(|| {
            OccupationError::validation(format!(
                "correction sheet '{sheet}' has no occupation column"
            ))
        })?;
        let layout = Self {
            occupation,
            flag: find(FLAG_HEADERS),
            suggestion: find(SUGGESTION_HEADERS),
        };
        if layout.flag.is_none() || layout.suggestion.is_none() {
            warn!("Correction sheet '{sheet}' lacks a flag or suggestion column");
        }
        Ok(layout)
    }

    /// Turn one row of cell texts into a record
    fn record(&self, sheet: &str, cells: &[String]) -> CorrectionRecord {
        let get = |index: Option<usize>| {
            index
                .and_then(|i| cells.get(i))
                .map_or("", String::as_str)
        };
        let flag_text = get(self.flag);
        let flag = parse_flag(flag_text).unwrap_or_else(|| {
            warn!("Unrecognized flag '{flag_text}' in sheet '{sheet}', treating as unset");
            false
        });
        CorrectionRecord::new(
            get(Some(self.occupation)),
            flag,
            parse_suggestion(get(self.suggestion)),
        )
    }
}

/// Read corrections for both parents
///
/// `path` may be a workbook (`.xlsx`, `.xlsm`, `.xls`, `.ods`), a directory
/// of CSV sheets or a CSV file path.
pub fn read_corrections(path: &Path, sheets: &SheetConfig) -> Result<CorrectionSet> {
    let operation = FileOperation::read("correction sheets", path);

    let rows = if path.is_dir() {
        read_csv_sheets(sheets, |name| path.join(format!("{name}.csv")))?
    } else if is_workbook(path) {
        read_workbook(path, sheets)?
    } else {
        read_csv_sheets(sheets, |name| sibling_sheet(path, name))?
    };

    let [mother, father] = rows;
    let total = mother.len() + father.len();
    let set = CorrectionSet {
        mother: CorrectionIndex::build(ParentRole::Mother, mother),
        father: CorrectionIndex::build(ParentRole::Father, father),
    };
    operation.finish(total);
    Ok(set)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ["xlsx", "xlsm", "xlsb", "xls", "ods"]
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// `corrections.csv` with sheet `mother` becomes `corrections_mother.csv`
fn sibling_sheet(path: &Path, sheet: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_{sheet}.csv"))
}

fn read_workbook(path: &Path, sheets: &SheetConfig) -> Result<[Vec<CorrectionRecord>; 2]> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)?;
    let available = workbook.sheet_names();
    debug!("Workbook {} has sheets {available:?}", path.display());

    let mut read_sheet = |name: &str| -> Result<Vec<CorrectionRecord>> {
        let sheet = available
            .iter()
            .find(|candidate| candidate.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| OccupationError::MissingSheet {
                sheet: name.to_string(),
            })?;
        let range = workbook.worksheet_range(sheet)?;
        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
        let Some(headers) = rows.next() else {
            return Ok(Vec::new());
        };
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        let layout = SheetLayout::from_headers(name, &headers)?;
        Ok(rows.map(|cells| layout.record(name, &cells)).collect())
    };

    Ok([read_sheet(&sheets.mother)?, read_sheet(&sheets.father)?])
}

fn read_csv_sheets(
    sheets: &SheetConfig,
    locate: impl Fn(&str) -> PathBuf,
) -> Result<[Vec<CorrectionRecord>; 2]> {
    let read_sheet = |name: &str| -> Result<Vec<CorrectionRecord>> {
        let path = locate(name);
        if !path.is_file() {
            return Err(OccupationError::MissingSheet {
                sheet: path.display().to_string(),
            });
        }
        let table = CsvTable::read(&path)?;
        let headers: Vec<&str> = table.headers.iter().collect();
        let layout = SheetLayout::from_headers(name, &headers)?;
        Ok(table
            .rows
            .iter()
            .map(|record| {
                let cells: Vec<String> = record.iter().map(str::to_string).collect();
                layout.record(name, &cells)
            })
            .collect())
    };
    Ok([read_sheet(&sheets.mother)?, read_sheet(&sheets.father)?])
}

/// Text of a spreadsheet cell as a reviewer would read it
///
/// Whole floats lose their decimal part so that a suggestion typed as 3
/// and stored as 3.0 parses the same way.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{f:.0}"),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
