//! File input and output
//!
//! Survey datasets, correction sheets and every file a run produces.

pub mod parquet;
pub mod sheets;
pub mod survey;
pub mod writers;

pub use parquet::{read_parquet, write_parquet};
pub use sheets::read_corrections;
pub use survey::{CsvTable, SurveyFormat, read_predefined, read_survey};
pub use writers::{
    write_comparison, write_conflicts, write_csv, write_json, write_respondents, write_review,
};
