//! End-to-end coding run
//!
//! Load the survey and corrections, code every respondent, write the
//! per-respondent dataset and review sheets, optionally compare against
//! the predefined survey, and finish with a JSON summary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};
use log::{info, warn};
use serde::Serialize;

use crate::algorithm::corrections::{CorrectionSet, CorrectionStats, build_review};
use crate::algorithm::distribution::{DistributionReconciler, Reconciliation};
use crate::algorithm::occupation::{Classifier, CodingResult, OccupationCoder};
use crate::config::PipelineConfig;
use crate::error::util::ensure_directory;
use crate::error::{OccupationError, Result};
use crate::models::{CodedEntry, EntryStatus, ParentRole, RespondentRecord};
use crate::utils::io::{
    read_corrections, read_predefined, read_survey, write_comparison, write_conflicts,
    write_json, write_respondents, write_review,
};
use crate::utils::logging::{coding_progress_bar, finish_progress_bar};

/// Stem of the per-respondent output files
pub const RESPONDENT_STEM: &str = "parent_occupations";

/// Per-parent counts of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSummary {
    pub role: ParentRole,
    pub missing: usize,
    pub unclassified: usize,
    pub automatic: usize,
    pub corrected: usize,
    pub corrections: CorrectionStats,
    pub distinct_texts: usize,
}

impl RoleSummary {
    fn tally(role: ParentRole, coded: &[CodedEntry], corrections: &CorrectionSet) -> Self {
        let mut summary = Self {
            role,
            missing: 0,
            unclassified: 0,
            automatic: 0,
            corrected: 0,
            corrections: corrections.for_role(role).stats(),
            distinct_texts: 0,
        };
        for entry in coded {
            match entry.outcome(role).status {
                EntryStatus::Missing => summary.missing += 1,
                EntryStatus::Unclassified => summary.unclassified += 1,
                EntryStatus::Automatic => summary.automatic += 1,
                EntryStatus::Corrected => summary.corrected += 1,
            }
        }
        summary
    }

    /// Answers that carry text
    #[must_use]
    pub const fn answered(&self) -> usize {
        self.unclassified + self.automatic + self.corrected
    }
}

/// Predefined survey part of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredefinedSummary {
    pub rows: usize,
    pub unknown_codes: usize,
}

/// Outcome of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Local>,
    pub survey_path: PathBuf,
    pub output_dir: PathBuf,
    /// Respondents read from the survey
    pub entries: usize,
    /// Respondents without any occupation text
    pub excluded: usize,
    pub coded: usize,
    pub mother: RoleSummary,
    pub father: RoleSummary,
    pub conflicts: usize,
    pub predefined: Option<PredefinedSummary>,
    pub outputs: Vec<PathBuf>,
    pub elapsed_ms: u128,
}

impl RunSummary {
    #[must_use]
    pub const fn role(&self, role: ParentRole) -> &RoleSummary {
        match role {
            ParentRole::Mother => &self.mother,
            ParentRole::Father => &self.father,
        }
    }
}

/// Everything a run computes before it is written out
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub coding: CodingResult,
    pub corrections: CorrectionSet,
    pub reconciliation: Option<Reconciliation>,
    pub summary: RunSummary,
}

/// Run the full pipeline described by `config`
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    run_detailed(config).map(|output| output.summary)
}

/// Run the full pipeline and keep the intermediate results
pub fn run_detailed(config: &PipelineConfig) -> Result<RunOutput> {
    config.validate()?;
    info!("{config}");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_threads())
        .build()
        .map_err(|e| OccupationError::config(format!("cannot build thread pool: {e}")))?;
    pool.install(|| execute(config))
}

fn execute(config: &PipelineConfig) -> Result<RunOutput> {
    let start = Instant::now();
    let output_dir = config.output_dir.as_path();
    ensure_directory(output_dir, "output directory")?;

    let entries = read_survey(&config.survey_path, &config.columns)?;
    let corrections = load_corrections(config)?;

    let coder = OccupationCoder::new(Classifier::new(), &corrections);
    let bar = coding_progress_bar(entries.len(), config.show_progress, "Coding occupations");
    let coding = coder.code_entries(&entries, config.parallel, Some(&bar));
    finish_progress_bar(&bar, "Coding complete");
    info!(
        "Coded {} respondents, excluded {} without any occupation text",
        coding.coded.len(),
        coding.excluded
    );

    let mut outputs = Vec::new();
    let records: Vec<RespondentRecord> = coding.coded.iter().map(RespondentRecord::from).collect();
    write_respondents(output_dir, RESPONDENT_STEM, &records)?;
    outputs.push(output_dir.join(format!("{RESPONDENT_STEM}.parquet")));
    outputs.push(output_dir.join(format!("{RESPONDENT_STEM}.csv")));

    let mut summarize_role = |role: ParentRole| -> Result<RoleSummary> {
        let review = build_review(role, &coding.coded, corrections.for_role(role));
        write_review(output_dir, role.as_str(), &review)?;
        outputs.push(output_dir.join(format!("review_{role}.csv")));

        let mut summary = RoleSummary::tally(role, &coding.coded, &corrections);
        summary.distinct_texts = review.len();
        Ok(summary)
    };
    let mother = summarize_role(ParentRole::Mother)?;
    let father = summarize_role(ParentRole::Father)?;

    let conflicts = corrections.conflicts().count();
    if conflicts > 0 {
        let path = output_dir.join("correction_conflicts.csv");
        write_conflicts(&path, corrections.conflicts())?;
        outputs.push(path);
    }

    let reconciliation = match &config.predefined_path {
        Some(path) => {
            let reconciliation = reconcile(config, path, &coding.coded)?;
            for table in &reconciliation.tables {
                write_comparison(output_dir, table)?;
                outputs.push(output_dir.join(format!("comparison_{}.csv", table.scope)));
            }
            Some(reconciliation)
        }
        None => None,
    };

    let summary_path = output_dir.join("summary.json");
    outputs.push(summary_path.clone());

    let summary = RunSummary {
        generated_at: Local::now(),
        survey_path: config.survey_path.clone(),
        output_dir: output_dir.to_path_buf(),
        entries: entries.len(),
        excluded: coding.excluded,
        coded: coding.coded.len(),
        mother,
        father,
        conflicts,
        predefined: reconciliation.as_ref().map(|r| PredefinedSummary {
            rows: r.predefined_rows,
            unknown_codes: r.issues.len(),
        }),
        outputs,
        elapsed_ms: start.elapsed().as_millis(),
    };
    write_json(&summary_path, &summary)?;

    for role in ParentRole::all() {
        let counts = summary.role(role);
        info!(
            "{role}: {} answered, {} automatic, {} corrected, {} unclassified, {} missing",
            counts.answered(),
            counts.automatic,
            counts.corrected,
            counts.unclassified,
            counts.missing
        );
    }

    Ok(RunOutput {
        coding,
        corrections,
        reconciliation,
        summary,
    })
}

fn load_corrections(config: &PipelineConfig) -> Result<CorrectionSet> {
    match &config.corrections_path {
        Some(path) => read_corrections(path, &config.sheets),
        None => {
            warn!("No correction sheet configured, using automatic categories only");
            Ok(CorrectionSet::empty())
        }
    }
}

fn reconcile(config: &PipelineConfig, path: &Path, coded: &[CodedEntry]) -> Result<Reconciliation> {
    let predefined = read_predefined(path, &config.columns)?;
    let reconciler = DistributionReconciler::new(config.include_sentinels_in_comparison);
    Ok(reconciler.reconcile_entries(coded, &predefined))
}
