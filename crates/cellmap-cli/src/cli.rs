//! Argument definitions for the `cellmap` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cellmap",
    version,
    about = "Spreadsheet cell mapping configuration tool",
    long_about = "Validate, normalize and compare the exported cell mapping\n\
                  configurations shared between the admin portal and the\n\
                  calculation engine."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an exported configuration file.
    Validate(ValidateArgs),

    /// Rewrite an exported configuration in canonical form.
    Normalize(NormalizeArgs),

    /// Compare two exported configurations for semantic equality.
    Diff(DiffArgs),

    /// Emit the built-in sample configuration.
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the exported configuration JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the exported configuration JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increment the configuration's version tag.
    #[arg(long = "bump-version")]
    pub bump_version: bool,

    /// Restamp metadata.createdAt with the current time.
    #[arg(long = "stamp")]
    pub stamp: bool,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// First configuration file.
    #[arg(value_name = "FILE_A")]
    pub left: PathBuf,

    /// Second configuration file.
    #[arg(value_name = "FILE_B")]
    pub right: PathBuf,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Write the sample here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
