//! Command runners for the `cellmap` binary.
//!
//! Runners own all file I/O; the core crates stay pure. Each runner
//! returns a result for `main` to print and turn into an exit code.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use cellmap_model::{DraftConfiguration, ExportConfiguration, RandomIds, sample_configuration};
use cellmap_transform::{are_exports_equal, increment_version_tag, to_export_configuration};
use cellmap_validate::{ImportValidationResult, SUPPORTED_SCHEMA_VERSIONS, validate_imported_json};

use crate::cli::{DiffArgs, NormalizeArgs, SampleArgs, ValidateArgs};
use crate::types::{DiffOutcome, NormalizeOutcome};

/// Runs the full import validation over a configuration file.
///
/// A rejected file is a normal outcome, not an error; `Err` is reserved
/// for I/O problems.
pub fn run_validate(args: &ValidateArgs) -> Result<ImportValidationResult> {
    let raw = read_configuration(&args.file)?;
    let result = validate_imported_json(&raw);

    if let ImportValidationResult::Success {
        snapshot,
        schema_version,
        ..
    } = &result
    {
        info!(
            file = %args.file.display(),
            version = %snapshot.version,
            inputs = snapshot.inputs.len(),
            outputs = snapshot.outputs.len(),
            "configuration validated"
        );
        if let Some(schema_version) = schema_version.as_deref() {
            if !SUPPORTED_SCHEMA_VERSIONS.contains(&schema_version) {
                warn!(schema_version, "schema version is not supported by this build");
            }
        }
    }

    Ok(result)
}

/// Rewrites a configuration file in canonical form: sanitized fields,
/// location-sorted mappings, sorted JSON keys.
pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeOutcome> {
    let (mut draft, _) = import_file(&args.file)?;

    if args.bump_version {
        draft.metadata.version = increment_version_tag(&draft.metadata.version);
    }
    if args.stamp {
        draft.metadata.created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    }

    let export = to_export_configuration(&draft);
    write_export(args.output.as_deref(), &export)?;
    info!(
        version = %export.version,
        bumped = args.bump_version,
        stamped = args.stamp,
        "configuration normalized"
    );

    Ok(NormalizeOutcome {
        destination: args.output.clone(),
        version: export.version,
    })
}

/// Compares two configuration files by canonical snapshot equality.
pub fn run_diff(args: &DiffArgs) -> Result<DiffOutcome> {
    let (_, left) = import_file(&args.left)?;
    let (_, right) = import_file(&args.right)?;
    let equal = are_exports_equal(&left, &right);

    Ok(DiffOutcome {
        equal,
        left_version: left.version,
        right_version: right.version,
    })
}

/// Emits the built-in sample configuration export.
pub fn run_sample(args: &SampleArgs) -> Result<()> {
    let draft = sample_configuration(&RandomIds);
    let export = to_export_configuration(&draft);
    write_export(args.output.as_deref(), &export)?;
    if let Some(path) = &args.output {
        info!(file = %path.display(), "wrote sample configuration");
    }
    Ok(())
}

fn read_configuration(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Imports a file, failing with the collected validation messages when
/// the payload is rejected.
fn import_file(path: &Path) -> Result<(DraftConfiguration, ExportConfiguration)> {
    let raw = read_configuration(path)?;
    match validate_imported_json(&raw) {
        ImportValidationResult::Success {
            draft, snapshot, ..
        } => Ok((draft, snapshot)),
        ImportValidationResult::Failure { errors } => {
            bail!(
                "{} is not a valid configuration:\n- {}",
                path.display(),
                errors.join("\n- ")
            )
        }
    }
}

/// Writes the export pretty-printed with sorted keys, to the destination
/// path or stdout.
fn write_export(destination: Option<&Path>, export: &ExportConfiguration) -> Result<()> {
    let value = serde_json::to_value(export).context("serialize configuration")?;
    let mut rendered =
        serde_json::to_string_pretty(&value).context("render configuration")?;
    rendered.push('\n');

    match destination {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
