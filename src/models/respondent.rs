//! Respondent models
//!
//! `RawEntry` is one survey row as read from disk, `CodedEntry` is the same
//! respondent after coding both parents, and `RespondentRecord` is the flat
//! row persisted for the downstream merge.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use super::parent::{ParentOutcome, ParentRole};
use crate::algorithm::occupation::codes::{Category6, DetailedCode};
use crate::error::Result;

/// One survey respondent with both free-text parental occupations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub response_id: String,
    pub mother_text: Option<String>,
    pub father_text: Option<String>,
}

impl RawEntry {
    #[must_use]
    pub fn new(
        response_id: impl Into<String>,
        mother_text: Option<&str>,
        father_text: Option<&str>,
    ) -> Self {
        Self {
            response_id: response_id.into(),
            mother_text: mother_text.map(str::to_string),
            father_text: father_text.map(str::to_string),
        }
    }

    /// Raw answer for one parent
    #[must_use]
    pub fn text(&self, role: ParentRole) -> Option<&str> {
        match role {
            ParentRole::Mother => self.mother_text.as_deref(),
            ParentRole::Father => self.father_text.as_deref(),
        }
    }
}

/// A respondent with both parents coded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedEntry {
    pub response_id: String,
    pub mother: ParentOutcome,
    pub father: ParentOutcome,
}

impl CodedEntry {
    #[must_use]
    pub fn outcome(&self, role: ParentRole) -> &ParentOutcome {
        match role {
            ParentRole::Mother => &self.mother,
            ParentRole::Father => &self.father,
        }
    }
}

/// Flat per-respondent output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentRecord {
    pub response_id: String,
    pub mother_detailed: Option<i16>,
    pub mother_category: Option<i16>,
    pub mother_status: String,
    pub father_detailed: Option<i16>,
    pub father_category: Option<i16>,
    pub father_status: String,
}

impl RespondentRecord {
    /// Arrow schema of the persisted output
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("response_id", DataType::Utf8, false),
            Field::new("mother_detailed", DataType::Int16, true),
            Field::new("mother_category", DataType::Int16, true),
            Field::new("mother_status", DataType::Utf8, false),
            Field::new("father_detailed", DataType::Int16, true),
            Field::new("father_category", DataType::Int16, true),
            Field::new("father_status", DataType::Utf8, false),
        ])
    }

    /// Convert records to a `RecordBatch` with the output schema
    pub fn to_record_batch(records: &[Self]) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().map(Arc::clone).collect();
        Ok(serde_arrow::to_record_batch(&fields, &records)?)
    }

    /// Read records back from a `RecordBatch`
    pub fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// Final category for one parent
    #[must_use]
    pub fn category(&self, role: ParentRole) -> Option<Category6> {
        let code = match role {
            ParentRole::Mother => self.mother_category,
            ParentRole::Father => self.father_category,
        };
        code.and_then(Category6::from_code)
    }
}

impl From<&CodedEntry> for RespondentRecord {
    fn from(entry: &CodedEntry) -> Self {
        let detailed = |o: &ParentOutcome| o.detailed.map(DetailedCode::code);
        let category = |o: &ParentOutcome| o.category.map(Category6::code);
        Self {
            response_id: entry.response_id.clone(),
            mother_detailed: detailed(&entry.mother),
            mother_category: category(&entry.mother),
            mother_status: entry.mother.status.to_string(),
            father_detailed: detailed(&entry.father),
            father_category: category(&entry.father),
            father_status: entry.father.status.to_string(),
        }
    }
}
