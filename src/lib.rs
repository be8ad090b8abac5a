//! Rule-based coding of free-text parental occupations into ISCED-F fields
//! and a six-category survey scheme, with a manual correction overlay and
//! a distribution comparison against a predefined-category survey.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::corrections::{CorrectionIndex, CorrectionRecord, CorrectionSet, Suggestion};
pub use algorithm::distribution::{ComparisonScope, ComparisonTable, DistributionReconciler};
pub use algorithm::occupation::{
    Category6, Classifier, DetailedCode, FieldGroup, IscedCode, OccupationCoder, RuleTable,
};
pub use config::PipelineConfig;
pub use error::{OccupationError, Result};
pub use models::{CodedEntry, EntryStatus, ParentRole, RawEntry, RespondentRecord};
pub use pipeline::{RunSummary, run};
