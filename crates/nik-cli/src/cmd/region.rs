//! Implementation of `nikparse region <CODE>`.
//!
//! Looks up a province, district or sub-district code in the catalog.
//!
//! Exit codes: 0 = found, 1 = well-formed but unknown, 2 = malformed code.
use nik_core::{GeoCatalog, RegionCode};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format;

/// Runs the `region` command.
///
/// # Errors
///
/// Returns [`CliError::InvalidRegionCode`] if `code` is not 2, 4 or 6
/// digits, [`CliError::RegionNotFound`] if the catalog has no entry for it,
/// and [`CliError::IoError`] if stdout cannot be written.
pub fn run(code: &str, catalog: &GeoCatalog, output: OutputFormat) -> Result<(), CliError> {
    let code = RegionCode::try_from(code).map_err(|e| CliError::InvalidRegionCode {
        detail: e.to_string(),
    })?;

    let Some(region) = catalog.lookup(&code) else {
        return Err(CliError::RegionNotFound {
            code: code.to_string(),
        });
    };
    tracing::debug!(%code, level = %region.level, "region found");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match output {
        OutputFormat::Human => format::write_region_human(&mut out, &region),
        OutputFormat::Json => {
            let value = serde_json::to_value(&region).map_err(|e| CliError::IoError {
                source: "stdout".to_owned(),
                detail: e.to_string(),
            })?;
            format::write_json_line(&mut out, &value)
        }
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
