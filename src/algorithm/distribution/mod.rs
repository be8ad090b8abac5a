//! Distribution comparison between the free-text and the predefined survey
//!
//! The free-text survey is coded into the six-category scheme by this
//! crate; the predefined survey asked the same question with a closed list
//! of answers numbered in its own order. Both are brought onto the same
//! category axis and compared as relative frequencies, each source
//! normalized by its own total.

use std::fmt;

use itertools::Itertools;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::occupation::codes::Category6;
use crate::models::{CodedEntry, ParentRole};

/// Survey a count comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveySource {
    FreeText,
    Predefined,
}

impl SurveySource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeText => "free_text",
            Self::Predefined => "predefined",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::FreeText, Self::Predefined]
    }
}

impl fmt::Display for SurveySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an answer code of the predefined survey onto the six-category scheme
///
/// The closed question lists agriculture first and education last, so the
/// numbering runs against the canonical order.
#[must_use]
pub const fn remap_predefined(code: i64) -> Option<Category6> {
    match code {
        1 => Some(Category6::Agriculture),
        2 => Some(Category6::ScienceTechnology),
        3 => Some(Category6::BusinessAdministrationLaw),
        4 => Some(Category6::ServicesRetail),
        5 => Some(Category6::EducationHealthSocial),
        6 => Some(Category6::SocialSciencesArts),
        7 => Some(Category6::Homemaker),
        8 => Some(Category6::Unemployed),
        9 => Some(Category6::DontKnow),
        _ => None,
    }
}

/// One respondent of the predefined survey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedEntry {
    pub response_id: String,
    pub mother: Option<i64>,
    pub father: Option<i64>,
}

impl PredefinedEntry {
    #[must_use]
    pub const fn code(&self, role: ParentRole) -> Option<i64> {
        match role {
            ParentRole::Mother => self.mother,
            ParentRole::Father => self.father,
        }
    }
}

/// A predefined-survey code outside the known answer list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredefinedIssue {
    pub response_id: String,
    pub role: ParentRole,
    pub code: i64,
}

/// Grouping of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonScope {
    Role(ParentRole),
    Both,
}

impl ComparisonScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Role(role) => role.as_str(),
            Self::Both => "both",
        }
    }

    #[must_use]
    pub const fn roles(self) -> &'static [ParentRole] {
        match self {
            Self::Role(ParentRole::Mother) => &[ParentRole::Mother],
            Self::Role(ParentRole::Father) => &[ParentRole::Father],
            Self::Both => &[ParentRole::Mother, ParentRole::Father],
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self::Role(ParentRole::Mother),
            Self::Role(ParentRole::Father),
            Self::Both,
        ]
    }
}

impl fmt::Display for ComparisonScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count and share of one category in one survey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    #[serde(skip_serializing)]
    pub category: Category6,
    pub category_code: i16,
    pub category_label: &'static str,
    pub source_survey: SurveySource,
    pub count: usize,
    pub share: f64,
}

/// Side-by-side category distribution of both surveys
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub scope: ComparisonScope,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Rows of one survey in category order
    pub fn rows_for(&self, source: SurveySource) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(move |row| row.source_survey == source)
    }

    /// Number of counted entries of one survey
    #[must_use]
    pub fn total(&self, source: SurveySource) -> usize {
        self.rows_for(source).map(|row| row.count).sum()
    }

    /// Sum of shares of one survey; 1.0 unless the survey is empty
    #[must_use]
    pub fn share_sum(&self, source: SurveySource) -> f64 {
        self.rows_for(source).map(|row| row.share).sum()
    }

    #[must_use]
    pub fn row(&self, source: SurveySource, category: Category6) -> Option<&ComparisonRow> {
        self.rows_for(source).find(|row| row.category == category)
    }
}

/// Comparison tables for mother, father and both parents pooled
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub tables: Vec<ComparisonTable>,
    pub issues: Vec<PredefinedIssue>,
    pub predefined_rows: usize,
}

impl Reconciliation {
    #[must_use]
    pub fn table(&self, scope: ComparisonScope) -> Option<&ComparisonTable> {
        self.tables.iter().find(|table| table.scope == scope)
    }
}

/// Builds comparison tables over a fixed category axis
#[derive(Debug, Clone, Copy)]
pub struct DistributionReconciler {
    include_sentinels: bool,
}

impl Default for DistributionReconciler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DistributionReconciler {
    #[must_use]
    pub const fn new(include_sentinels: bool) -> Self {
        Self { include_sentinels }
    }

    /// Categories on the comparison axis, in canonical order
    #[must_use]
    pub fn categories(&self) -> Vec<Category6> {
        Category6::all()
            .into_iter()
            .filter(|category| self.include_sentinels || !category.is_sentinel())
            .collect()
    }

    /// Compare two category samples
    ///
    /// Every axis category gets a row for each source, zero counts included.
    /// Categories off the axis are not counted.
    #[must_use]
    pub fn reconcile(
        &self,
        scope: ComparisonScope,
        free_text: impl IntoIterator<Item = Category6>,
        predefined: impl IntoIterator<Item = Category6>,
    ) -> ComparisonTable {
        let axis = self.categories();
        let mut rows = Vec::with_capacity(axis.len() * 2);

        for (source, sample) in [
            (SurveySource::FreeText, free_text.into_iter().collect_vec()),
            (SurveySource::Predefined, predefined.into_iter().collect_vec()),
        ] {
            let counts: FxHashMap<Category6, usize> = sample
                .into_iter()
                .filter(|category| axis.contains(category))
                .counts()
                .into_iter()
                .collect();
            let total: usize = counts.values().sum();

            for &category in &axis {
                let count = counts.get(&category).copied().unwrap_or(0);
                #[allow(clippy::cast_precision_loss)]
                let share = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                rows.push(ComparisonRow {
                    category,
                    category_code: category.code(),
                    category_label: category.label(),
                    source_survey: source,
                    count,
                    share,
                });
            }
        }

        ComparisonTable { scope, rows }
    }

    /// Remap the predefined survey and compare it with coded entries
    ///
    /// Produces one table per parent and one with both parents pooled.
    /// Unknown predefined codes are reported and left out of the counts.
    #[must_use]
    pub fn reconcile_entries(
        &self,
        coded: &[CodedEntry],
        predefined: &[PredefinedEntry],
    ) -> Reconciliation {
        let mut issues = Vec::new();
        let mut remapped: FxHashMap<ParentRole, Vec<Category6>> = FxHashMap::default();

        for entry in predefined {
            for role in ParentRole::all() {
                let Some(code) = entry.code(role) else {
                    continue;
                };
                match remap_predefined(code) {
                    Some(category) => remapped.entry(role).or_default().push(category),
                    None => issues.push(PredefinedIssue {
                        response_id: entry.response_id.clone(),
                        role,
                        code,
                    }),
                }
            }
        }

        if !issues.is_empty() {
            warn!(
                "{} predefined survey answers carry unknown codes: {}",
                issues.len(),
                issues.iter().map(|i| i.code).unique().sorted().join(", ")
            );
        }

        let tables = ComparisonScope::all()
            .into_iter()
            .map(|scope| {
                let free_text = scope.roles().iter().flat_map(|&role| {
                    coded
                        .iter()
                        .filter_map(move |entry| entry.outcome(role).category)
                });
                let predefined = scope
                    .roles()
                    .iter()
                    .flat_map(|role| remapped.get(role).into_iter().flatten().copied());
                self.reconcile(scope, free_text, predefined)
            })
            .collect_vec();

        for table in &tables {
            info!(
                "Comparison ({}): {} free-text vs {} predefined answers",
                table.scope,
                table.total(SurveySource::FreeText),
                table.total(SurveySource::Predefined)
            );
        }

        Reconciliation {
            tables,
            issues,
            predefined_rows: predefined.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn predefined_codes_follow_questionnaire_order() {
        assert_eq!(remap_predefined(1), Some(Category6::Agriculture));
        assert_eq!(remap_predefined(5), Some(Category6::EducationHealthSocial));
        assert_eq!(remap_predefined(7), Some(Category6::Homemaker));
        assert_eq!(remap_predefined(9), Some(Category6::DontKnow));
        assert_eq!(remap_predefined(0), None);
        assert_eq!(remap_predefined(-8), None);
    }

    #[test]
    fn shares_are_normalized_per_source() {
        let reconciler = DistributionReconciler::default();
        let table = reconciler.reconcile(
            ComparisonScope::Both,
            [
                Category6::Agriculture,
                Category6::Agriculture,
                Category6::EducationHealthSocial,
                Category6::Homemaker,
            ],
            [Category6::ScienceTechnology; 3],
        );
        for source in SurveySource::all() {
            assert!((table.share_sum(source) - 1.0).abs() < EPSILON);
        }
        let agriculture = table.row(SurveySource::FreeText, Category6::Agriculture).unwrap();
        assert_eq!(agriculture.count, 2);
        assert!((agriculture.share - 0.5).abs() < EPSILON);
        assert_eq!(table.total(SurveySource::Predefined), 3);
    }

    #[test]
    fn every_category_appears_for_both_sources() {
        let table = DistributionReconciler::default().reconcile(
            ComparisonScope::Both,
            [Category6::Agriculture],
            [],
        );
        assert_eq!(table.rows.len(), Category6::all().len() * 2);
        assert_eq!(table.share_sum(SurveySource::Predefined), 0.0);
        let zero = table.row(SurveySource::FreeText, Category6::DontKnow).unwrap();
        assert_eq!(zero.count, 0);
        assert_eq!(zero.category_label, "Weiss nicht");
    }

    #[test]
    fn sentinels_can_be_left_off_the_axis() {
        let table = DistributionReconciler::new(false).reconcile(
            ComparisonScope::Both,
            [Category6::Homemaker, Category6::Agriculture],
            [Category6::Unemployed],
        );
        assert_eq!(table.rows.len(), 12);
        assert_eq!(table.total(SurveySource::FreeText), 1);
        assert_eq!(table.total(SurveySource::Predefined), 0);
    }

    #[test]
    fn unknown_predefined_codes_are_reported() {
        let predefined = vec![
            PredefinedEntry {
                response_id: "r1".to_string(),
                mother: Some(1),
                father: Some(12),
            },
            PredefinedEntry {
                response_id: "r2".to_string(),
                mother: None,
                father: Some(2),
            },
        ];
        let result = DistributionReconciler::default().reconcile_entries(&[], &predefined);
        assert_eq!(
            result.issues,
            vec![PredefinedIssue {
                response_id: "r1".to_string(),
                role: ParentRole::Father,
                code: 12
            }]
        );
        let both = result.table(ComparisonScope::Both).unwrap();
        assert_eq!(both.total(SurveySource::Predefined), 2);
        let father = result.table(ComparisonScope::Role(ParentRole::Father)).unwrap();
        assert_eq!(
            father.row(SurveySource::Predefined, Category6::ScienceTechnology).unwrap().count,
            1
        );
    }
}
