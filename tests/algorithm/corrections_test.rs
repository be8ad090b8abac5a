#[cfg(test)]
mod tests {
    use occ_coder::algorithm::corrections::{
        CorrectionStats, apply_corrections, build_review, parse_suggestion,
    };
    use occ_coder::{
        Category6, Classifier, CorrectionIndex, CorrectionRecord, CorrectionSet, EntryStatus,
        OccupationCoder, ParentRole, RawEntry, Suggestion,
    };

    use crate::utils::{expected_category, sample_survey};

    fn record(text: &str, flag: bool, suggestion: &str) -> CorrectionRecord {
        CorrectionRecord::new(text, flag, parse_suggestion(suggestion))
    }

    fn mother_only(rows: Vec<CorrectionRecord>) -> CorrectionSet {
        CorrectionSet {
            mother: CorrectionIndex::build(ParentRole::Mother, rows),
            father: CorrectionIndex::empty(ParentRole::Father),
        }
    }

    #[test]
    fn test_flagged_suggestion_replaces_automatic_category() {
        // Journalism aggregates to category 5; the reviewer moved it to 3.
        let corrections = mother_only(vec![record("Journalistin", true, "3")]);
        let coder = OccupationCoder::new(Classifier::new(), &corrections);
        let outcome = coder.code_text(ParentRole::Mother, Some("Journalistin"));

        assert_eq!(outcome.automatic.map(Category6::code), Some(5));
        assert_eq!(outcome.category.map(Category6::code), Some(3));
        assert_eq!(outcome.status, EntryStatus::Corrected);
    }

    #[test]
    fn test_unflagged_or_unclear_rows_leave_automatic_result() {
        let corrections = mother_only(vec![
            record("Landwirtin", false, "1"),
            record("Lehrerin", true, "not clear"),
            record("Koch", true, ""),
        ]);
        let coder = OccupationCoder::new(Classifier::new(), &corrections);
        for text in ["Landwirtin", "Lehrerin", "Koch"] {
            let outcome = coder.code_text(ParentRole::Mother, Some(text));
            assert_eq!(outcome.category, outcome.automatic, "{text}");
            assert_eq!(outcome.status, EntryStatus::Automatic, "{text}");
        }
        assert_eq!(corrections.mother.stats().ambiguous_suggestions, 1);
    }

    #[test]
    fn test_correction_rescues_unclassified_text() {
        let corrections = mother_only(vec![record("Treuhänderin", true, "3")]);
        let coder = OccupationCoder::new(Classifier::new(), &corrections);
        let outcome = coder.code_text(ParentRole::Mother, Some("Treuhänderin"));
        assert_eq!(outcome.detailed, None);
        assert_eq!(outcome.category, Some(Category6::BusinessAdministrationLaw));
        assert_eq!(outcome.status, EntryStatus::Corrected);
    }

    #[test]
    fn test_overlay_is_idempotent() {
        let records = [
            record("a", true, "3"),
            record("b", false, "3"),
            record("c", true, "unklar"),
            record("d", true, "-2"),
        ];
        for correction in &records {
            for automatic in Category6::all().into_iter().map(Some).chain([None]) {
                let once = apply_corrections(automatic, Some(correction));
                let twice = apply_corrections(once, Some(correction));
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_conflicting_duplicates_are_surfaced_not_resolved() {
        let corrections = mother_only(vec![
            record("Beraterin", true, "3"),
            record("Beraterin ", true, "5"),
            record("Beraterin", true, "3"),
        ]);
        assert!(corrections.mother.lookup("Beraterin").is_none());
        let conflicts: Vec<_> = corrections.conflicts().collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].occupation, "Beraterin");
        assert_eq!(conflicts[0].suggestions, vec![3, 5]);
        assert_eq!(
            corrections.mother.stats(),
            CorrectionStats {
                rows: 3,
                blank_rows: 0,
                duplicate_rows: 2,
                ambiguous_suggestions: 0,
                overrides: 0,
                conflicting_keys: 1,
            }
        );
    }

    #[test]
    fn test_sentinel_suggestions_are_categories() {
        assert_eq!(parse_suggestion("-14"), Suggestion::Category(Category6::Homemaker));
        assert_eq!(parse_suggestion("-2.0"), Suggestion::Category(Category6::Unemployed));
        assert!(matches!(parse_suggestion("-10"), Suggestion::Ambiguous(_)));
    }

    #[test]
    fn test_review_sheet_covers_every_answered_text() {
        let entries = sample_survey(300);
        let corrections = CorrectionSet::empty();
        let coder = OccupationCoder::new(Classifier::new(), &corrections);
        let coded = coder.code_entries(&entries, true, None).coded;

        for role in ParentRole::all() {
            let review = build_review(role, &coded, corrections.for_role(role));
            let answered = coded
                .iter()
                .filter(|entry| !entry.outcome(role).is_missing())
                .count();
            assert_eq!(review.iter().map(|row| row.count).sum::<usize>(), answered);

            // Trailing whitespace variants share one row.
            assert!(review.iter().all(|row| row.occupation == row.occupation.trim_end()));
            assert!(review.windows(2).all(|pair| {
                pair[0].is_unclassified() >= pair[1].is_unclassified()
            }));
            for row in &review {
                assert_eq!(
                    row.auto_category,
                    expected_category(&row.occupation).map(Category6::code),
                    "{}",
                    row.occupation
                );
            }
        }
    }

    #[test]
    fn test_corrections_do_not_cross_parents() {
        let corrections = mother_only(vec![record("Koch", true, "4")]);
        let coder = OccupationCoder::new(Classifier::new(), &corrections);
        let entry = coder
            .code_entry(&RawEntry::new("r", Some("Koch"), Some("Koch")))
            .unwrap();
        assert_eq!(entry.mother.category, Some(Category6::ScienceTechnology));
        assert_eq!(entry.father.category, Some(Category6::ServicesRetail));
    }
}
