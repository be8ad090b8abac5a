//! Occupation coding
//!
//! Turns free-text parental occupations into survey categories:
//! normalize, classify against the rule table, aggregate the detailed code
//! and finally overlay manual corrections.

pub mod aggregate;
pub mod classifier;
pub mod codes;
pub mod normalize;
pub mod rules;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use log::debug;
use rayon::prelude::*;

pub use aggregate::{aggregate, to_category6, to_field_group};
pub use classifier::{ClassificationTrace, Classifier, RuleMatch};
pub use codes::{Category6, DetailedCode, FieldGroup, IscedCode};
pub use normalize::{NormalizedText, normalize};
pub use rules::{Rule, RuleBlock, RuleTable, RuleTier};

use crate::algorithm::corrections::{CorrectionRecord, CorrectionSet, apply_corrections};
use crate::models::{CodedEntry, EntryStatus, ParentOutcome, ParentRole, RawEntry};

/// Result of coding a batch of survey entries
#[derive(Debug, Clone, Default)]
pub struct CodingResult {
    /// Coded respondents in input order
    pub coded: Vec<CodedEntry>,
    /// Respondents without any parental occupation text
    pub excluded: usize,
}

/// Codes parental occupations and applies corrections
#[derive(Debug, Clone, Copy)]
pub struct OccupationCoder<'a> {
    classifier: Classifier<'a>,
    corrections: &'a CorrectionSet,
}

impl<'a> OccupationCoder<'a> {
    #[must_use]
    pub const fn new(classifier: Classifier<'a>, corrections: &'a CorrectionSet) -> Self {
        Self {
            classifier,
            corrections,
        }
    }

    #[must_use]
    pub const fn classifier(&self) -> Classifier<'a> {
        self.classifier
    }

    /// Code one parent's answer
    #[must_use]
    pub fn code_text(&self, role: ParentRole, raw: Option<&str>) -> ParentOutcome {
        let Some(normalized) = normalize(raw) else {
            return ParentOutcome::missing(role, raw.map(str::to_string));
        };
        let original = raw.unwrap_or_default();

        let detailed = self.classifier.classify(&normalized);
        if detailed.is_none() {
            debug!("Unclassified {role} occupation: '{normalized}'");
        }
        let automatic = detailed.and_then(aggregate);

        let correction = self.corrections.for_role(role).lookup(original);
        let category = apply_corrections(automatic, correction);
        let corrected = correction.and_then(CorrectionRecord::override_category).is_some();

        let status = match (category, corrected) {
            (Some(_), true) => EntryStatus::Corrected,
            (Some(_), false) => EntryStatus::Automatic,
            (None, _) => EntryStatus::Unclassified,
        };

        ParentOutcome {
            role,
            original: Some(original.to_string()),
            normalized: Some(normalized),
            detailed,
            automatic,
            category,
            status,
        }
    }

    /// Code both parents of one respondent
    ///
    /// Returns `None` when neither parent has an answer; such respondents
    /// are excluded rather than counted as unclassified.
    #[must_use]
    pub fn code_entry(&self, entry: &RawEntry) -> Option<CodedEntry> {
        let mother = self.code_text(ParentRole::Mother, entry.text(ParentRole::Mother));
        let father = self.code_text(ParentRole::Father, entry.text(ParentRole::Father));
        if mother.is_missing() && father.is_missing() {
            return None;
        }
        Some(CodedEntry {
            response_id: entry.response_id.clone(),
            mother,
            father,
        })
    }

    /// Code a batch of respondents, optionally in parallel
    ///
    /// Entries are independent of each other; output order matches input
    /// order either way.
    #[must_use]
    pub fn code_entries(
        &self,
        entries: &[RawEntry],
        parallel: bool,
        progress: Option<&ProgressBar>,
    ) -> CodingResult {
        let bar = progress.cloned().unwrap_or_else(ProgressBar::hidden);
        let results: Vec<Option<CodedEntry>> = if parallel {
            entries
                .par_iter()
                .progress_with(bar)
                .map(|entry| self.code_entry(entry))
                .collect()
        } else {
            entries
                .iter()
                .progress_with(bar)
                .map(|entry| self.code_entry(entry))
                .collect()
        };

        let total = results.len();
        let coded: Vec<CodedEntry> = results.into_iter().flatten().collect();
        CodingResult {
            excluded: total - coded.len(),
            coded,
        }
    }
}
