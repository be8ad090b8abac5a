//! Utilities for working with Arrow arrays.
//!
//! Survey exports differ in how they type their columns: text can arrive as
//! `Utf8` or `LargeUtf8`, answer codes as any integer width or as floats.
//! Columns are cast to one canonical type before extraction.

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cast::{can_cast_types, cast};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::error::{OccupationError, Result};

/// Get a column from a record batch, cast to the expected type
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The data type the caller will downcast to
/// * `required` - Whether a missing column is an error
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err` - If the column is missing and required, or cannot be cast
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        if required {
            return Err(OccupationError::ColumnNotFound {
                column: column_name.to_string(),
            });
        }
        warn!("Column '{column_name}' not found in record batch");
        return Ok(None);
    };

    let column = batch.column(idx);
    let actual_type = column.data_type();
    if actual_type == expected_type {
        return Ok(Some(column.clone()));
    }

    if !can_cast_types(actual_type, expected_type) {
        return Err(OccupationError::ColumnType {
            column: column_name.to_string(),
            expected: expected_type.to_string(),
        });
    }

    debug!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    Ok(Some(cast(column, expected_type)?))
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `A` - The target array type to downcast to
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| OccupationError::ColumnType {
            column: column_name.to_string(),
            expected: expected_type_name.to_string(),
        })
}
