//! Result types shared by command runners and the summary printer.

use std::path::PathBuf;

/// Outcome of the `normalize` command.
#[derive(Debug)]
pub struct NormalizeOutcome {
    /// Where the result was written; `None` means stdout.
    pub destination: Option<PathBuf>,
    /// Version tag of the written configuration, after any bump.
    pub version: String,
}

/// Outcome of the `diff` command.
#[derive(Debug)]
pub struct DiffOutcome {
    pub equal: bool,
    pub left_version: String,
    pub right_version: String,
}
