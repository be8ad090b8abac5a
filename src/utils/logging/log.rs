//! File operation logging
//!
//! Every read and write of a run is bracketed by two info lines: one when
//! the file is opened, one with the row count and duration when it is done.

use std::path::Path;
use std::time::{Duration, Instant};

/// Whether a file is being read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Read,
    Write,
}

impl Direction {
    const fn progressive(self) -> &'static str {
        match self {
            Self::Read => "Reading",
            Self::Write => "Writing",
        }
    }

    const fn past(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Wrote",
        }
    }

    const fn preposition(self) -> &'static str {
        match self {
            Self::Read => "from",
            Self::Write => "to",
        }
    }
}

/// A file read or write in progress
///
/// Created with [`FileOperation::read`] or [`FileOperation::write`], which
/// log the start; [`FileOperation::finish`] logs the row count.
#[derive(Debug)]
#[must_use = "call `finish` to log the completed operation"]
pub struct FileOperation<'a> {
    direction: Direction,
    path: &'a Path,
    started: Instant,
}

impl<'a> FileOperation<'a> {
    /// Start reading `what` (e.g. "parquet file") from `path`
    pub fn read(what: &str, path: &'a Path) -> Self {
        Self::start(Direction::Read, what, path)
    }

    /// Start writing `what` to `path`
    pub fn write(what: &str, path: &'a Path) -> Self {
        Self::start(Direction::Write, what, path)
    }

    fn start(direction: Direction, what: &str, path: &'a Path) -> Self {
        log::info!("{} {what} {}", direction.progressive(), path.display());
        Self {
            direction,
            path,
            started: Instant::now(),
        }
    }

    /// Log completion with the number of rows moved
    pub fn finish(self, rows: usize) {
        log::info!("{}", self.completion_message(rows, self.started.elapsed()));
    }

    fn completion_message(&self, rows: usize, elapsed: Duration) -> String {
        let unit = if rows == 1 { "row" } else { "rows" };
        format!(
            "{} {rows} {unit} {} {} in {elapsed:.2?}",
            self.direction.past(),
            self.direction.preposition(),
            self.path.display()
        )
    }
}
