//! Configuration for a coding run
//!
//! A run is configured from an optional TOML file and command-line flags.
//! Every field has a default except the survey input path.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{OccupationError, Result};

/// Column names of the survey datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Respondent identifier, shared by both surveys
    pub response_id: String,
    /// Free-text occupation of the mother
    pub mother_text: String,
    /// Free-text occupation of the father
    pub father_text: String,
    /// Predefined-category answer for the mother
    pub predefined_mother: String,
    /// Predefined-category answer for the father
    pub predefined_father: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            response_id: "ResponseId".to_string(),
            mother_text: "mother_occupation".to_string(),
            father_text: "father_occupation".to_string(),
            predefined_mother: "mother_category".to_string(),
            predefined_father: "father_category".to_string(),
        }
    }
}

/// Sheet names of the correction workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub mother: String,
    pub father: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            mother: "mother".to_string(),
            father: "father".to_string(),
        }
    }
}

/// Configuration for a complete coding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Free-text survey dataset (Parquet or CSV)
    pub survey_path: PathBuf,
    /// Correction workbook, or a directory holding per-parent CSV sheets
    pub corrections_path: Option<PathBuf>,
    /// Predefined-category survey dataset (Parquet or CSV)
    pub predefined_path: Option<PathBuf>,
    /// Directory receiving all outputs
    pub output_dir: PathBuf,
    pub columns: ColumnConfig,
    pub sheets: SheetConfig,
    /// Whether homemaker, unemployed and don't-know take part in the comparison
    pub include_sentinels_in_comparison: bool,
    /// Whether to code entries on a thread pool
    pub parallel: bool,
    /// Worker threads; defaults to the number of CPUs
    pub threads: Option<usize>,
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            survey_path: PathBuf::new(),
            corrections_path: None,
            predefined_path: None,
            output_dir: PathBuf::from("output"),
            columns: ColumnConfig::default(),
            sheets: SheetConfig::default(),
            include_sentinels_in_comparison: true,
            parallel: true,
            threads: None,
            show_progress: true,
        }
    }
}

impl PipelineConfig {
    /// Configuration with default settings for one survey file
    #[must_use]
    pub fn new(survey_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            survey_path: survey_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "pipeline configuration")?;
        toml::from_str(&content)
            .map_err(|e| OccupationError::config(format!("{}: {e}", path.display())))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| OccupationError::config(e.to_string()))
    }

    /// Number of worker threads to use
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }

    /// Check that the configuration describes a runnable job
    pub fn validate(&self) -> Result<()> {
        if self.survey_path.as_os_str().is_empty() {
            return Err(OccupationError::config("survey_path is required"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(OccupationError::config("output_dir must not be empty"));
        }

        let columns = [
            ("columns.response_id", &self.columns.response_id),
            ("columns.mother_text", &self.columns.mother_text),
            ("columns.father_text", &self.columns.father_text),
            ("columns.predefined_mother", &self.columns.predefined_mother),
            ("columns.predefined_father", &self.columns.predefined_father),
            ("sheets.mother", &self.sheets.mother),
            ("sheets.father", &self.sheets.father),
        ];
        if let Some((name, _)) = columns.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(OccupationError::config(format!("{name} must not be empty")));
        }

        if self.threads == Some(0) {
            return Err(OccupationError::config("threads must be at least 1"));
        }
        Ok(())
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Survey: {}", self.survey_path.display())?;
        match &self.corrections_path {
            Some(path) => writeln!(f, "  Corrections: {}", path.display())?,
            None => writeln!(f, "  Corrections: none")?,
        }
        if let Some(path) = &self.predefined_path {
            writeln!(f, "  Predefined Survey: {}", path.display())?;
        }
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(
            f,
            "  Columns: id={}, mother={}, father={}",
            self.columns.response_id, self.columns.mother_text, self.columns.father_text
        )?;
        writeln!(
            f,
            "  Sentinels In Comparison: {}",
            self.include_sentinels_in_comparison
        )?;
        writeln!(
            f,
            "  Parallel: {} ({} threads)",
            self.parallel,
            self.effective_threads()
        )?;
        Ok(())
    }
}
