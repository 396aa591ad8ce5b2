mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser;
use nik_core::{GeoCatalog, ParseConfig};

use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    tracing::debug!(core_version = nik_core::version(), "nikparse starting");

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Loads the catalog the command needs and dispatches to it.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Parse {
            nik,
            skip_geo,
            reference_year,
        } => {
            let config = ParseConfig {
                skip_geo_validation: *skip_geo,
                reference_year: *reference_year,
            };
            // Skipping geo validation means the catalog is never needed.
            let catalog = if *skip_geo {
                GeoCatalog::default()
            } else {
                load_catalog(cli)?
            };
            cmd::parse::run(nik, &catalog, &config, cli.format)
        }
        Command::Region { code } => {
            let catalog = load_catalog(cli)?;
            cmd::region::run(code, &catalog, cli.format)
        }
    }
}

/// Loads the catalog from `--catalog` if given, otherwise the bundled one.
///
/// # Errors
///
/// Any read or parse failure is a [`CliError`] with exit code 2; there is no
/// fallback to the bundled catalog when an explicit one is broken.
fn load_catalog(cli: &Cli) -> Result<GeoCatalog, CliError> {
    let Some(source) = &cli.catalog else {
        tracing::debug!("using bundled geo catalog");
        return GeoCatalog::bundled().map_err(|e| CliError::CatalogLoad {
            source: "bundled".to_owned(),
            detail: e.to_string(),
        });
    };

    tracing::debug!(source = %source.label(), "loading geo catalog");
    let content = io::read_input(source, cli.max_file_size)?;
    let catalog = GeoCatalog::from_json(&content).map_err(|e| CliError::CatalogLoad {
        source: source.label(),
        detail: e.to_string(),
    })?;

    let orphans = catalog.orphans();
    if !orphans.is_empty() {
        tracing::warn!(
            count = orphans.len(),
            first = %orphans[0],
            "catalog has codes without a parent region"
        );
    }
    Ok(catalog)
}
