//! Column extraction for survey record batches
//!
//! Survey tables are read column-wise: one pass per column yields one value
//! per row, with nulls mapped to `None`.

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::utils::arrow::array_utils::{downcast_array, get_column};

/// Extract a text column
///
/// Returns `Ok(None)` if the column is absent and not required. Empty
/// strings are kept: blank answers are told apart from nulls later.
pub fn extract_strings(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
) -> Result<Option<Vec<Option<String>>>> {
    let Some(array) = get_column(batch, column_name, &DataType::Utf8, required)? else {
        return Ok(None);
    };
    let strings = downcast_array::<StringArray>(&array, column_name, "String")?;
    Ok(Some(
        strings
            .iter()
            .map(|value| value.map(str::to_string))
            .collect(),
    ))
}

/// Convert a float answer code to an integer code
///
/// NaN, infinities and values with a fractional part are treated as missing.
#[must_use]
pub fn float_to_code(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > 1e15 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let code = value as i64;
    Some(code)
}

/// Extract an integer code column stored as any numeric type
///
/// Returns `Ok(None)` if the column is absent and not required.
pub fn extract_codes(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
) -> Result<Option<Vec<Option<i64>>>> {
    let Some(array) = get_column(batch, column_name, &DataType::Float64, required)? else {
        return Ok(None);
    };
    let floats = downcast_array::<Float64Array>(&array, column_name, "Float64")?;
    Ok(Some(
        floats
            .iter()
            .map(|value| value.and_then(float_to_code))
            .collect(),
    ))
}

/// Identifier given to a respondent whose id cell is null or blank
///
/// `row` counts from the start of the file, not of the batch.
#[must_use]
pub fn fallback_id(row: usize) -> String {
    format!("row-{row}")
}

/// Extract the identifier column as strings, whatever its physical type
///
/// `first_row` is the file row of the batch's first row, so that fallback
/// ids stay unique across batches.
pub fn extract_ids(batch: &RecordBatch, column_name: &str, first_row: usize) -> Result<Vec<String>> {
    let values = extract_strings(batch, column_name, true)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(row, id)| match id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => fallback_id(first_row + row),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{Int32Array, LargeStringArray};
    use arrow::datatypes::{Field, Schema};

    fn batch() -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("text", DataType::LargeUtf8, true),
            Field::new("code", DataType::Float64, true),
        ]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(Int32Array::from(vec![10, 11, 12])),
                Arc::new(LargeStringArray::from(vec![Some("Koch"), None, Some("")])),
                Arc::new(Float64Array::from(vec![Some(3.0), Some(2.5), None])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn large_utf8_is_cast_to_strings() {
        let values = extract_strings(&batch(), "text", true).unwrap().unwrap();
        assert_eq!(values, vec![Some("Koch".to_string()), None, Some(String::new())]);
    }

    #[test]
    fn fractional_codes_are_missing() {
        let codes = extract_codes(&batch(), "code", true).unwrap().unwrap();
        assert_eq!(codes, vec![Some(3), None, None]);
    }

    #[test]
    fn integer_ids_become_strings() {
        assert_eq!(extract_ids(&batch(), "id", 0).unwrap(), vec!["10", "11", "12"]);
    }

    #[test]
    fn fallback_ids_count_from_first_row() {
        let schema = Schema::new(vec![Field::new("id", DataType::Utf8, true)]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(StringArray::from(vec![None, Some("R7"), Some(" ")]))],
        )
        .unwrap();
        assert_eq!(
            extract_ids(&batch, "id", 40).unwrap(),
            vec!["row-40", "R7", "row-42"]
        );
    }

    #[test]
    fn missing_optional_column_is_none() {
        assert!(extract_codes(&batch(), "absent", false).unwrap().is_none());
        assert!(extract_codes(&batch(), "absent", true).is_err());
    }
}
