//! Implementation of `nikparse parse <NIK>`.
//!
//! Decodes one NIK and prints the result to stdout. A NIK that fails to
//! decode is not a CLI error: the reason is logged at WARN on stderr (hidden
//! by `--quiet`), the placeholder line goes to stdout, and the exit code is 0.
//! Only catalog and I/O problems produce a non-zero exit.
use std::io::Write;

use nik_core::{GeoCatalog, NikRecord, ParseConfig};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format;

/// Runs the `parse` command against an already loaded catalog.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    nik: &str,
    catalog: &GeoCatalog,
    config: &ParseConfig,
    output: OutputFormat,
) -> Result<(), CliError> {
    let result = nik_core::parse(nik, catalog, config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match result {
        Ok(record) => print_record(&mut out, nik, &record, output),
        Err(err) => {
            tracing::warn!("cannot parse NIK {nik}: {err}");
            match output {
                OutputFormat::Human => format::write_invalid_human(&mut out, nik),
                OutputFormat::Json => {
                    format::write_json_line(&mut out, &format::invalid_to_json(nik, &err))
                }
            }
        }
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes a decoded record in the requested format.
fn print_record<W: Write>(
    w: &mut W,
    nik: &str,
    record: &NikRecord,
    output: OutputFormat,
) -> std::io::Result<()> {
    match output {
        OutputFormat::Human => format::write_record_human(w, nik, record),
        OutputFormat::Json => format::write_json_line(w, &format::record_to_json(nik, record)),
    }
}
