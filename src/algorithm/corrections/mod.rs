//! Manual correction overlay
//!
//! Reviewers go through the coded occupations in a spreadsheet and, per
//! distinct answer text, set a flag and optionally suggest a category. A
//! flagged row with a category suggestion replaces the automatic category
//! of every entry with that exact text.
//!
//! Correction sheets are hand-maintained and carry artifacts: blank rows,
//! repeated texts, trailing whitespace copied from the survey export.
//! [`CorrectionIndex::build`] filters those once, and refuses to guess when
//! the same text carries two different suggestions.

pub mod review;

use std::fmt;

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::occupation::codes::Category6;
use crate::models::ParentRole;

pub use review::{ReviewRow, build_review};

/// Parsed content of a suggestion cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Empty,
    Category(Category6),
    /// Placeholder text such as "not clear" or a code outside the scheme
    Ambiguous(String),
}

impl Suggestion {
    #[must_use]
    pub const fn category(&self) -> Option<Category6> {
        match self {
            Self::Category(category) => Some(*category),
            _ => None,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Category(category) => write!(f, "{}", category.code()),
            Self::Ambiguous(text) => f.write_str(text),
        }
    }
}

/// One row of a correction sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRecord {
    /// Occupation text exactly as it appears in the sheet
    pub occupation: String,
    pub flag: bool,
    pub suggestion: Suggestion,
}

impl CorrectionRecord {
    #[must_use]
    pub fn new(occupation: impl Into<String>, flag: bool, suggestion: Suggestion) -> Self {
        Self {
            occupation: occupation.into(),
            flag,
            suggestion,
        }
    }

    /// Lookup key of this record
    #[must_use]
    pub fn key(&self) -> &str {
        correction_key(&self.occupation)
    }

    /// Category this record imposes, if it imposes one
    #[must_use]
    pub const fn override_category(&self) -> Option<Category6> {
        if self.flag {
            self.suggestion.category()
        } else {
            None
        }
    }

    /// A row that changes nothing: unflagged and without suggestion
    #[must_use]
    pub fn is_inert(&self) -> bool {
        !self.flag && self.suggestion == Suggestion::Empty
    }
}

/// Key used to match correction rows to survey answers
///
/// Trailing whitespace is dropped; case and leading text are preserved.
#[must_use]
pub fn correction_key(text: &str) -> &str {
    text.trim_end()
}

/// Parse a flag cell
///
/// Returns `None` for content that is neither a yes nor a no marker.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "1.0" | "true" | "wahr" | "ja" | "yes" | "y" | "x" => Some(true),
        "" | "0" | "0.0" | "false" | "falsch" | "nein" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Parse a suggestion cell
///
/// Numeric cells may come from spreadsheets as floats ("3.0"); anything that
/// is not an integral code of the six-category scheme is ambiguous.
#[must_use]
pub fn parse_suggestion(raw: &str) -> Suggestion {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Suggestion::Empty;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.fract() == 0.0 && value.abs() < f64::from(i16::MAX))
        .and_then(|value| {
            #[allow(clippy::cast_possible_truncation)]
            let code = value as i16;
            Category6::from_code(code)
        })
        .map_or_else(|| Suggestion::Ambiguous(trimmed.to_string()), Suggestion::Category)
}

/// Overlay one correction onto an automatic category
///
/// A flagged record with a category suggestion wins; anything else leaves
/// the automatic result untouched, including an unclassified one.
#[must_use]
pub fn apply_corrections(
    automatic: Option<Category6>,
    record: Option<&CorrectionRecord>,
) -> Option<Category6> {
    record
        .and_then(CorrectionRecord::override_category)
        .or(automatic)
}

/// Two or more rows for the same text with different suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionConflict {
    pub role: ParentRole,
    pub occupation: String,
    /// Distinct category codes suggested for the text
    pub suggestions: Vec<i16>,
}

/// Row accounting for one correction sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionStats {
    pub rows: usize,
    pub blank_rows: usize,
    pub duplicate_rows: usize,
    pub ambiguous_suggestions: usize,
    pub overrides: usize,
    pub conflicting_keys: usize,
}

/// Deduplicated corrections of one parent role, keyed by occupation text
#[derive(Debug, Clone)]
pub struct CorrectionIndex {
    role: ParentRole,
    records: FxHashMap<String, CorrectionRecord>,
    conflicts: Vec<CorrectionConflict>,
    stats: CorrectionStats,
}

impl CorrectionIndex {
    /// Index without any corrections
    #[must_use]
    pub fn empty(role: ParentRole) -> Self {
        Self {
            role,
            records: FxHashMap::default(),
            conflicts: Vec::new(),
            stats: CorrectionStats::default(),
        }
    }

    /// Build the index from sheet rows in sheet order
    ///
    /// Rows with a blank occupation are dropped. For a repeated key, inert
    /// rows give way to rows that carry a flag or a suggestion, and
    /// identical rows collapse to the first. A key whose rows impose
    /// different categories is a conflict: no row is applied for it.
    pub fn build(role: ParentRole, rows: impl IntoIterator<Item = CorrectionRecord>) -> Self {
        let mut index = Self::empty(role);
        let mut suggested: FxHashMap<String, Vec<i16>> = FxHashMap::default();

        for row in rows {
            index.stats.rows += 1;
            let key = row.key();
            if key.trim().is_empty() {
                index.stats.blank_rows += 1;
                continue;
            }
            if matches!(row.suggestion, Suggestion::Ambiguous(_)) {
                index.stats.ambiguous_suggestions += 1;
            }
            if let Some(category) = row.override_category() {
                let codes = suggested.entry(key.to_string()).or_default();
                if !codes.contains(&category.code()) {
                    codes.push(category.code());
                }
            }

            let replace = match index.records.get(key) {
                None => true,
                Some(existing) => {
                    index.stats.duplicate_rows += 1;
                    (existing.is_inert() && !row.is_inert())
                        || (existing.override_category().is_none()
                            && row.override_category().is_some())
                }
            };
            if replace {
                index.records.insert(key.to_string(), row);
            }
        }

        let mut conflicts: Vec<CorrectionConflict> = suggested
            .into_iter()
            .filter(|(_, codes)| codes.len() > 1)
            .map(|(occupation, suggestions)| CorrectionConflict {
                role,
                occupation,
                suggestions,
            })
            .collect();
        conflicts.sort_by(|a, b| a.occupation.cmp(&b.occupation));

        for conflict in &conflicts {
            warn!(
                "Conflicting {role} corrections for '{}': suggestions {:?}; keeping automatic result",
                conflict.occupation, conflict.suggestions
            );
            index.records.remove(&conflict.occupation);
        }

        index.stats.conflicting_keys = conflicts.len();
        index.stats.overrides = index
            .records
            .values()
            .filter(|r| r.override_category().is_some())
            .count();
        index.conflicts = conflicts;

        debug!(
            "Built {role} correction index: {} keys from {} rows ({} blank, {} duplicate)",
            index.records.len(),
            index.stats.rows,
            index.stats.blank_rows,
            index.stats.duplicate_rows
        );
        index
    }

    /// Correction applying to a raw occupation answer
    #[must_use]
    pub fn lookup(&self, original: &str) -> Option<&CorrectionRecord> {
        self.records.get(correction_key(original))
    }

    #[must_use]
    pub const fn role(&self) -> ParentRole {
        self.role
    }

    #[must_use]
    pub fn conflicts(&self) -> &[CorrectionConflict] {
        &self.conflicts
    }

    #[must_use]
    pub const fn stats(&self) -> CorrectionStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Corrections for both parents
#[derive(Debug, Clone)]
pub struct CorrectionSet {
    pub mother: CorrectionIndex,
    pub father: CorrectionIndex,
}

impl CorrectionSet {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mother: CorrectionIndex::empty(ParentRole::Mother),
            father: CorrectionIndex::empty(ParentRole::Father),
        }
    }

    #[must_use]
    pub const fn for_role(&self, role: ParentRole) -> &CorrectionIndex {
        match role {
            ParentRole::Mother => &self.mother,
            ParentRole::Father => &self.father,
        }
    }

    /// All conflicts, mother first
    pub fn conflicts(&self) -> impl Iterator<Item = &CorrectionConflict> {
        self.mother.conflicts().iter().chain(self.father.conflicts())
    }
}

impl Default for CorrectionSet {
    fn default() -> Self {
        Self::empty()
    }
}
