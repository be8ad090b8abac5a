//! Review sheet construction
//!
//! The review sheet lists every distinct answer text of one parent role
//! with what the classifier made of it, ready to be edited into the next
//! correction sheet. Existing corrections are carried over so that a
//! reviewer never loses earlier decisions.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{CorrectionIndex, correction_key};
use crate::algorithm::occupation::codes::{Category6, DetailedCode};
use crate::models::{CodedEntry, EntryStatus, ParentRole};

/// One distinct occupation text of the review sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub occupation: String,
    pub count: usize,
    pub detailed_code: Option<i16>,
    pub auto_category: Option<i16>,
    pub flag: u8,
    pub suggestion: String,
}

impl ReviewRow {
    /// Whether the classifier found nothing for this text
    #[must_use]
    pub const fn is_unclassified(&self) -> bool {
        self.detailed_code.is_none()
    }
}

/// Build the review sheet of one parent role
///
/// Rows are keyed like corrections are. Unclassified texts come first,
/// then descending count, then text for a stable order.
#[must_use]
pub fn build_review(
    role: ParentRole,
    coded: &[CodedEntry],
    corrections: &CorrectionIndex,
) -> Vec<ReviewRow> {
    let mut rows: FxHashMap<&str, ReviewRow> = FxHashMap::default();

    for outcome in coded.iter().map(|entry| entry.outcome(role)) {
        if outcome.status == EntryStatus::Missing {
            continue;
        }
        let Some(original) = outcome.original.as_deref() else {
            continue;
        };
        let key = correction_key(original);
        rows.entry(key)
            .or_insert_with(|| {
                let existing = corrections.lookup(key);
                ReviewRow {
                    occupation: key.to_string(),
                    count: 0,
                    detailed_code: outcome.detailed.map(DetailedCode::code),
                    auto_category: outcome.automatic.map(Category6::code),
                    flag: existing.map_or(0, |record| u8::from(record.flag)),
                    suggestion: existing
                        .map(|record| record.suggestion.to_string())
                        .unwrap_or_default(),
                }
            })
            .count += 1;
    }

    rows.into_values()
        .sorted_by(|a, b| {
            b.is_unclassified()
                .cmp(&a.is_unclassified())
                .then(b.count.cmp(&a.count))
                .then_with(|| a.occupation.cmp(&b.occupation))
        })
        .collect()
}
