//! Arrow data handling utilities
//!
//! Typed column access on record batches read from survey files.

pub mod array_utils;
pub mod extractors;

pub use array_utils::{downcast_array, get_column};
pub use extractors::{extract_codes, extract_ids, extract_strings, fallback_id, float_to_code};
