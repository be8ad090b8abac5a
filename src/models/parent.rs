//! Parent occupation model
//!
//! This module contains the per-parent outcome of coding one occupation
//! answer: which parent it belongs to, what the classifier and the
//! correction overlay made of it, and how the final category came about.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::occupation::codes::{Category6, DetailedCode};
use crate::algorithm::occupation::normalize::NormalizedText;

/// Which parent an occupation answer describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentRole {
    Mother,
    Father,
}

impl ParentRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mother => "mother",
            Self::Father => "father",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Mother, Self::Father]
    }
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the final category of a parent answer was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// No answer was given
    Missing,
    /// Text present, no rule matched and no usable correction exists
    Unclassified,
    /// Category taken from the classifier
    Automatic,
    /// Category taken from a manual correction
    Corrected,
}

impl EntryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Unclassified => "unclassified",
            Self::Automatic => "automatic",
            Self::Corrected => "corrected",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coding outcome for one parent of one respondent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOutcome {
    pub role: ParentRole,
    /// Answer as given, untouched
    pub original: Option<String>,
    pub normalized: Option<NormalizedText>,
    /// Classifier result
    pub detailed: Option<DetailedCode>,
    /// Category derived from `detailed` before corrections
    pub automatic: Option<Category6>,
    /// Category after the correction overlay
    pub category: Option<Category6>,
    pub status: EntryStatus,
}

impl ParentOutcome {
    /// Outcome for an absent or blank answer
    #[must_use]
    pub fn missing(role: ParentRole, original: Option<String>) -> Self {
        Self {
            role,
            original,
            normalized: None,
            detailed: None,
            automatic: None,
            category: None,
            status: EntryStatus::Missing,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.status == EntryStatus::Missing
    }

    /// Whether the answer had text but ended without a category
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.status == EntryStatus::Unclassified
    }
}
