#[cfg(test)]
mod tests {
    use occ_coder::algorithm::distribution::{
        ComparisonScope, DistributionReconciler, SurveySource, remap_predefined,
    };
    use occ_coder::{Category6, Classifier, CorrectionSet, OccupationCoder, ParentRole};

    use crate::utils::{sample_predefined, sample_survey};

    const TOLERANCE: f64 = 1e-9;

    fn reconcile_samples(include_sentinels: bool) -> occ_coder::algorithm::distribution::Reconciliation {
        let corrections = CorrectionSet::empty();
        let coder = OccupationCoder::new(Classifier::new(), &corrections);
        let coded = coder.code_entries(&sample_survey(500), true, None).coded;
        DistributionReconciler::new(include_sentinels)
            .reconcile_entries(&coded, &sample_predefined(400))
    }

    #[test]
    fn test_shares_sum_to_one_per_source() {
        for include_sentinels in [true, false] {
            let result = reconcile_samples(include_sentinels);
            assert_eq!(result.tables.len(), 3);
            for table in &result.tables {
                for source in SurveySource::all() {
                    let sum = table.share_sum(source);
                    assert!((sum - 1.0).abs() < TOLERANCE, "{} {source}: {sum}", table.scope);
                }
            }
        }
    }

    #[test]
    fn test_axis_is_identical_for_both_sources() {
        let result = reconcile_samples(true);
        for table in &result.tables {
            let free: Vec<Category6> = table.rows_for(SurveySource::FreeText).map(|r| r.category).collect();
            let predefined: Vec<Category6> = table
                .rows_for(SurveySource::Predefined)
                .map(|r| r.category)
                .collect();
            assert_eq!(free, Category6::all().to_vec());
            assert_eq!(free, predefined);
        }
    }

    #[test]
    fn test_pooled_table_adds_up_parent_tables() {
        let result = reconcile_samples(true);
        let both = result.table(ComparisonScope::Both).unwrap();
        for source in SurveySource::all() {
            for category in Category6::all() {
                let pooled = both.row(source, category).unwrap().count;
                let split: usize = ParentRole::all()
                    .into_iter()
                    .map(|role| {
                        result
                            .table(ComparisonScope::Role(role))
                            .and_then(|t| t.row(source, category))
                            .map_or(0, |r| r.count)
                    })
                    .sum();
                assert_eq!(pooled, split, "{source} {category:?}");
            }
        }
    }

    #[test]
    fn test_unknown_predefined_codes_are_reported_and_skipped() {
        let predefined = sample_predefined(400);
        let result = reconcile_samples(true);
        let unknown = predefined
            .iter()
            .flat_map(|entry| [entry.mother, entry.father])
            .flatten()
            .filter(|&code| remap_predefined(code).is_none())
            .count();
        assert!(unknown > 0);
        assert_eq!(result.issues.len(), unknown);
        assert_eq!(result.predefined_rows, 400);

        let answered = predefined
            .iter()
            .flat_map(|entry| [entry.mother, entry.father])
            .flatten()
            .count();
        let both = result.table(ComparisonScope::Both).unwrap();
        assert_eq!(both.total(SurveySource::Predefined), answered - unknown);
    }

    #[test]
    fn test_excluding_sentinels_shrinks_axis() {
        let result = reconcile_samples(false);
        let both = result.table(ComparisonScope::Both).unwrap();
        assert_eq!(both.rows.len(), 12);
        assert!(both.rows.iter().all(|row| !row.category.is_sentinel()));
    }

    #[test]
    fn test_empty_source_has_zero_shares() {
        let table = DistributionReconciler::default().reconcile(
            ComparisonScope::Role(ParentRole::Father),
            std::iter::empty(),
            [Category6::Agriculture, Category6::Unemployed],
        );
        assert!(table.rows_for(SurveySource::FreeText).all(|row| row.share == 0.0 && row.count == 0));
        let unemployed = table.row(SurveySource::Predefined, Category6::Unemployed).unwrap();
        assert!((unemployed.share - 0.5).abs() < TOLERANCE);
    }
}
