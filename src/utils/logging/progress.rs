//! Progress reporting for batch coding
//!
//! Bars are drawn on stderr and only when stderr is a terminal, so piped
//! runs and tests stay quiet.

use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a main progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

fn main_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(DEFAULT_MAIN_TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("#>-"))
}

/// Create a main progress bar with a standardized style
///
/// # Arguments
/// * `length` - Total length for the progress bar
/// * `description` - Optional description to display as the initial message
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(main_style());

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Progress bar for coding `length` entries, hidden unless requested and
/// attached to a terminal
#[must_use]
pub fn coding_progress_bar(length: usize, show: bool, description: &str) -> ProgressBar {
    if !show || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    create_main_progress_bar(length as u64, Some(description))
}

/// Finish a progress bar with a final message
pub fn finish_progress_bar(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_progress_is_hidden() {
        let pb = coding_progress_bar(10, false, "coding");
        assert!(pb.is_hidden());
        pb.inc(3);
        assert_eq!(pb.position(), 3);
    }
}
