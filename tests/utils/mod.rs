use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use occ_coder::algorithm::distribution::PredefinedEntry;
use occ_coder::utils::io::write_parquet;
use occ_coder::{Category6, RawEntry, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seed shared by every generated sample
pub const SAMPLE_SEED: u64 = 42;

/// Occupation answers with the category the built-in rules assign
pub const KNOWN_OCCUPATIONS: &[(&str, Option<Category6>)] = &[
    ("Landwirt", Some(Category6::Agriculture)),
    ("Bäuerin", Some(Category6::Agriculture)),
    ("Lehrerin", Some(Category6::EducationHealthSocial)),
    ("er ist Arzt", Some(Category6::EducationHealthSocial)),
    ("Krankenschwester", Some(Category6::EducationHealthSocial)),
    ("Hausfrau", Some(Category6::Homemaker)),
    ("Journalistin", Some(Category6::SocialSciencesArts)),
    ("Bankkaufmann", Some(Category6::BusinessAdministrationLaw)),
    ("Elektriker", Some(Category6::ScienceTechnology)),
    ("Verkäuferin", Some(Category6::ServicesRetail)),
    ("Koch", Some(Category6::ServicesRetail)),
    ("arbeitslos", Some(Category6::Unemployed)),
    ("weiss nicht", Some(Category6::DontKnow)),
    ("Qwertz", None),
];

/// Category the built-in rules assign to a known answer
#[must_use]
pub fn expected_category(text: &str) -> Option<Category6> {
    KNOWN_OCCUPATIONS
        .iter()
        .find(|(known, _)| known.trim_end() == text.trim_end())
        .and_then(|(_, category)| *category)
}

/// Deterministic free-text survey sample
///
/// About one answer in ten is missing and some answers carry the trailing
/// whitespace survey exports tend to add.
#[must_use]
pub fn sample_survey(size: usize) -> Vec<RawEntry> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let answer = |rng: &mut StdRng| -> Option<String> {
        if rng.random_bool(0.1) {
            return None;
        }
        let (text, _) = KNOWN_OCCUPATIONS.choose(rng)?;
        if rng.random_bool(0.2) {
            Some(format!("{text} "))
        } else {
            Some((*text).to_string())
        }
    };

    (0..size)
        .map(|i| RawEntry {
            response_id: format!("R_{i:04}"),
            mother_text: answer(&mut rng),
            father_text: answer(&mut rng),
        })
        .collect()
}

/// Deterministic predefined-survey sample with codes 1..=9 and a few
/// unknown codes
#[must_use]
pub fn sample_predefined(size: usize) -> Vec<PredefinedEntry> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED + 1);
    (0..size)
        .map(|i| PredefinedEntry {
            response_id: format!("P_{i:04}"),
            mother: Some(rng.random_range(1..=10)),
            father: if rng.random_bool(0.05) {
                None
            } else {
                Some(rng.random_range(1..=9))
            },
        })
        .collect()
}

/// Write a survey sample as CSV with the default column names
pub fn write_survey_csv(path: &Path, entries: &[RawEntry]) -> PathBuf {
    let mut content = String::from("ResponseId,mother_occupation,father_occupation\n");
    for entry in entries {
        content.push_str(&format!(
            "{},{},{}\n",
            entry.response_id,
            entry.mother_text.as_deref().unwrap_or_default(),
            entry.father_text.as_deref().unwrap_or_default()
        ));
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

/// Write a survey sample as Parquet with the default column names
pub fn write_survey_parquet(path: &Path, entries: &[RawEntry]) -> Result<PathBuf> {
    let schema = Schema::new(vec![
        Field::new("ResponseId", DataType::Utf8, false),
        Field::new("mother_occupation", DataType::Utf8, true),
        Field::new("father_occupation", DataType::Utf8, true),
    ]);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(
            entries.iter().map(|e| e.response_id.as_str()),
        )),
        Arc::new(StringArray::from_iter(
            entries.iter().map(|e| e.mother_text.as_deref()),
        )),
        Arc::new(StringArray::from_iter(
            entries.iter().map(|e| e.father_text.as_deref()),
        )),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;
    write_parquet(path, &schema, &[batch])?;
    Ok(path.to_path_buf())
}

/// Write a predefined-survey sample as Parquet with float codes, the way
/// statistics packages export them
pub fn write_predefined_parquet(path: &Path, entries: &[PredefinedEntry]) -> Result<PathBuf> {
    let schema = Schema::new(vec![
        Field::new("ResponseId", DataType::Utf8, false),
        Field::new("mother_category", DataType::Float64, true),
        Field::new("father_category", DataType::Float64, true),
    ]);
    #[allow(clippy::cast_precision_loss)]
    let as_float = |code: Option<i64>| code.map(|c| c as f64);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(
            entries.iter().map(|e| e.response_id.as_str()),
        )),
        Arc::new(Float64Array::from_iter(entries.iter().map(|e| as_float(e.mother)))),
        Arc::new(Float64Array::from_iter(entries.iter().map(|e| as_float(e.father)))),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;
    write_parquet(path, &schema, &[batch])?;
    Ok(path.to_path_buf())
}

/// Write per-parent correction sheets into `dir`
pub fn write_correction_sheets(dir: &Path, mother: &[(&str, &str, &str)], father: &[(&str, &str, &str)]) {
    for (name, rows) in [("mother", mother), ("father", father)] {
        let mut content = String::from("occupation,flag,suggestion\n");
        for (occupation, flag, suggestion) in rows {
            content.push_str(&format!("{occupation},{flag},{suggestion}\n"));
        }
        fs::write(dir.join(format!("{name}.csv")), content).unwrap();
    }
}
