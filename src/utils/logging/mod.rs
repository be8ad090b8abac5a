//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and progress tracking.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use console::{print_comparison, print_run_summary};
pub use self::log::{Direction, FileOperation};
pub use progress::{coding_progress_bar, create_main_progress_bar, finish_progress_bar};
