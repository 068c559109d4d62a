//! CLI components for the `cellmap` configuration tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
