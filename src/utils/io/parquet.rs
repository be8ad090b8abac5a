//! Parquet file operations
//!
//! Reading survey tables into Arrow record batches, optionally projected to
//! the columns a run needs, and writing coded output back to Parquet.

use std::path::Path;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use log::warn;
use parquet::arrow::ArrowWriter;
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::utils::logging::FileOperation;

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var("PARQUET_BATCH_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&size| size > 0)
}

/// Helper for creating a projection mask from column names
///
/// Columns absent from the file are skipped with a warning; callers decide
/// later whether a missing column is fatal.
#[must_use]
pub fn create_projection(
    columns: &[&str],
    file_schema: &Schema,
    parquet_schema: &parquet::schema::types::SchemaDescriptor,
) -> Option<ProjectionMask> {
    let projection = columns
        .iter()
        .filter_map(|name| {
            file_schema.index_of(name).map_or_else(
                |_| {
                    warn!("Field {name} not found in parquet file, skipping");
                    None
                },
                Some,
            )
        })
        .unique()
        .collect_vec();

    if projection.is_empty() {
        warn!("No matching fields found in schema projection, reading all columns");
        None
    } else {
        Some(ProjectionMask::roots(parquet_schema, projection))
    }
}

/// Read a parquet file into Arrow record batches
///
/// # Arguments
/// * `path` - Path to the Parquet file
/// * `columns` - Optional column names to project
pub fn read_parquet(path: &Path, columns: Option<&[&str]>) -> Result<Vec<RecordBatch>> {
    let operation = FileOperation::read("parquet file", path);

    let file = safe_open_file(path, "parquet input")?;
    let mut builder = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE));

    if let Some(columns) = columns {
        let mask = create_projection(columns, builder.schema(), builder.parquet_schema());
        if let Some(mask) = mask {
            builder = builder.with_projection(mask);
        }
    }

    let batches: Vec<RecordBatch> = builder.build()?.try_collect()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    operation.finish(rows);
    Ok(batches)
}

/// Write record batches to a Snappy-compressed parquet file
///
/// All batches must share the schema of the first one. Writing zero batches
/// is a no-op that still creates an empty file with `schema`.
pub fn write_parquet(path: &Path, schema: &Schema, batches: &[RecordBatch]) -> Result<()> {
    let operation = FileOperation::write("parquet file", path);

    let file = safe_create_file(path, "parquet output")?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, std::sync::Arc::new(schema.clone()), Some(props))?;
    for batch in batches {
        writer.write(batch)?;
    }
    writer.close()?;

    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    operation.finish(rows);
    Ok(())
}
