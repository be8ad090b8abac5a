#[cfg(test)]
mod tests {
    use std::fs;

    use occ_coder::pipeline::{RESPONDENT_STEM, run_detailed};
    use occ_coder::utils::io::read_parquet;
    use occ_coder::{
        Category6, ComparisonScope, EntryStatus, OccupationError, ParentRole, PipelineConfig,
        RawEntry, RespondentRecord,
    };

    use crate::utils::{
        expected_category, sample_predefined, sample_survey, write_correction_sheets,
        write_predefined_parquet, write_survey_csv, write_survey_parquet,
    };

    fn config(survey: &std::path::Path, output: &std::path::Path) -> PipelineConfig {
        let mut config = PipelineConfig::new(survey, output);
        config.show_progress = false;
        config.threads = Some(2);
        config
    }

    #[test]
    fn test_parquet_survey_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let entries = sample_survey(200);
        let survey = write_survey_parquet(&dir.path().join("survey.parquet"), &entries).unwrap();
        let predefined =
            write_predefined_parquet(&dir.path().join("predefined.parquet"), &sample_predefined(150))
                .unwrap();
        let output = dir.path().join("out");

        let mut config = config(&survey, &output);
        config.predefined_path = Some(predefined);
        let result = run_detailed(&config).unwrap();
        let summary = &result.summary;

        // Every respondent is either coded or excluded, none is lost.
        assert_eq!(summary.entries, 200);
        assert_eq!(summary.coded + summary.excluded, summary.entries);
        let excluded = entries
            .iter()
            .filter(|e| e.mother_text.is_none() && e.father_text.is_none())
            .count();
        assert_eq!(summary.excluded, excluded);

        for role in ParentRole::all() {
            let counts = summary.role(role);
            assert_eq!(counts.answered() + counts.missing, summary.coded);
            assert_eq!(counts.corrected, 0);
        }

        for name in [
            "parent_occupations.parquet",
            "parent_occupations.csv",
            "review_mother.csv",
            "review_father.csv",
            "comparison_mother.csv",
            "comparison_father.csv",
            "comparison_both.csv",
            "summary.json",
        ] {
            assert!(output.join(name).is_file(), "{name} missing");
        }
        assert!(!output.join("correction_conflicts.csv").exists());

        let reconciliation = result.reconciliation.as_ref().unwrap();
        assert!(reconciliation.table(ComparisonScope::Both).is_some());
        assert_eq!(summary.predefined.as_ref().unwrap().rows, 150);
    }

    #[test]
    fn test_persisted_records_match_coding() {
        let dir = tempfile::tempdir().unwrap();
        let entries = sample_survey(120);
        let survey = write_survey_parquet(&dir.path().join("survey.parquet"), &entries).unwrap();
        let output = dir.path().join("out");
        let result = run_detailed(&config(&survey, &output)).unwrap();

        let batches =
            read_parquet(&output.join(format!("{RESPONDENT_STEM}.parquet")), None).unwrap();
        let records: Vec<RespondentRecord> = batches
            .iter()
            .flat_map(|batch| RespondentRecord::from_record_batch(batch).unwrap())
            .collect();
        assert_eq!(records.len(), result.coding.coded.len());

        let by_id: std::collections::HashMap<&str, &RawEntry> =
            entries.iter().map(|e| (e.response_id.as_str(), e)).collect();
        for record in &records {
            let raw = by_id[record.response_id.as_str()];
            for role in ParentRole::all() {
                let expected = raw.text(role).and_then(expected_category);
                assert_eq!(record.category(role), expected, "{} {role}", record.response_id);
            }
        }
    }

    #[test]
    fn test_csv_survey_with_corrections() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            RawEntry::new("R1", Some("Journalistin"), Some("Landwirt")),
            RawEntry::new("R2", Some("Hausfrau"), Some("er ist Arzt")),
            RawEntry::new("R3", None, None),
            RawEntry::new("R4", Some("Treuhänderin"), Some("Berater")),
            RawEntry::new("R5", Some("Journalistin "), None),
        ];
        let survey = write_survey_csv(&dir.path().join("survey.csv"), &entries);
        let sheets = dir.path().join("corrections");
        fs::create_dir(&sheets).unwrap();
        write_correction_sheets(
            &sheets,
            &[("Journalistin", "1", "3"), ("Treuhänderin", "1", "3")],
            &[("Berater", "1", "3"), ("Berater", "1", "5")],
        );
        let output = dir.path().join("out");

        let mut config = config(&survey, &output);
        config.corrections_path = Some(sheets);
        config.parallel = false;
        let result = run_detailed(&config).unwrap();

        let coded = &result.coding.coded;
        assert_eq!(coded.len(), 4);
        assert_eq!(result.coding.excluded, 1);

        let r1 = &coded[0];
        assert_eq!(r1.mother.category, Some(Category6::BusinessAdministrationLaw));
        assert_eq!(r1.mother.status, EntryStatus::Corrected);
        assert_eq!(r1.father.category, Some(Category6::Agriculture));

        let r2 = &coded[1];
        assert_eq!(r2.mother.category.map(Category6::code), Some(-14));
        assert_eq!(r2.father.category.map(Category6::code), Some(1));

        let r4 = &coded[2];
        assert_eq!(r4.mother.status, EntryStatus::Corrected);
        assert_eq!(r4.father.status, EntryStatus::Unclassified);

        // Trailing whitespace in the survey still hits the correction.
        assert_eq!(coded[3].mother.status, EntryStatus::Corrected);

        assert_eq!(result.summary.conflicts, 1);
        let conflicts = fs::read_to_string(output.join("correction_conflicts.csv")).unwrap();
        assert!(conflicts.contains("father,Berater,3|5"));

        let review = fs::read_to_string(output.join("review_father.csv")).unwrap();
        let first_row = review.lines().nth(1).unwrap();
        assert!(first_row.starts_with("Berater,1,,,0,"), "{first_row}");
    }

    #[test]
    fn test_missing_survey_column_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let survey = dir.path().join("survey.csv");
        fs::write(&survey, "ResponseId,mutter,vater\nR1,Koch,Maurer\n").unwrap();
        let err = run_detailed(&config(&survey, &dir.path().join("out"))).unwrap_err();
        assert!(matches!(err, OccupationError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_missing_correction_sheet_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let survey = write_survey_csv(&dir.path().join("survey.csv"), &sample_survey(10));
        let mut config = config(&survey, &dir.path().join("out"));
        config.corrections_path = Some(dir.path().to_path_buf());
        let err = run_detailed(&config).unwrap_err();
        assert!(matches!(err, OccupationError::MissingSheet { .. }));
    }

    #[test]
    fn test_summary_json_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let survey = write_survey_csv(&dir.path().join("survey.csv"), &sample_survey(40));
        let output = dir.path().join("out");
        let summary = occ_coder::run(&config(&survey, &output)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("summary.json")).unwrap())
                .unwrap();
        assert_eq!(json["entries"], 40);
        assert_eq!(json["coded"], summary.coded);
        assert_eq!(json["mother"]["role"], "mother");
        assert!(json["generated_at"].is_string());
        assert!(json["predefined"].is_null());
    }
}
