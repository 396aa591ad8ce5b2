//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl PathOrStdin {
    /// Label used in messages: the path, or `"-"` for stdin.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "-".to_owned(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Pipe-delimited line (default).
    Human,
    /// A single JSON object.
    Json,
}

/// All top-level subcommands exposed by the `nikparse` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Decode a NIK into region, birth date and gender.
    ///
    /// Prints `NIK|DD-MM-YYYY|GENDER|PROVINCE|DISTRICT|SUB-DISTRICT|POSTAL`.
    /// An invalid NIK prints `NIK|INVALID` and logs the reason on stderr
    /// (hidden by `--quiet`); the exit code stays 0.
    ///
    /// The bundled catalog lists every province but only a sample of districts
    /// and sub-districts, so most real NIKs are rejected as "not found" with
    /// it. Pass the full national table with `--catalog`, or use `--skip-geo`.
    Parse {
        /// The 16-digit identifier.
        #[arg(value_name = "NIK")]
        nik: String,
        /// Decode birth date and gender only; do not look up or load the
        /// region catalog.
        #[arg(long)]
        skip_geo: bool,
        /// Year used to pick the birth century (default: the current year).
        #[arg(long, value_name = "YEAR", value_parser = clap::value_parser!(u32).range(1..=9999))]
        reference_year: Option<u32>,
    },

    /// Look up a province (2 digits), district (4) or sub-district (6) code.
    Region {
        /// The region code.
        #[arg(value_name = "CODE")]
        code: String,
    },
}

/// Root CLI struct for the `nikparse` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "nikparse",
    version,
    about = "Parse and validate Indonesian national identification numbers (NIK)",
    long_about = "Parse and validate Indonesian national identification numbers (NIK).\n\
                  Decodes province, district, sub-district, postal code, date of birth\n\
                  and gender from a 16-digit NIK."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Region catalog JSON to use instead of the bundled one, or `-` for stdin.
    ///
    /// The bundled catalog only covers a sample of sub-districts; supply the
    /// full national table here to decode arbitrary NIKs. Can also be set via
    /// the `NIKPARSE_CATALOG` environment variable.
    #[arg(long, value_name = "FILE", global = true, env = "NIKPARSE_CATALOG")]
    pub catalog: Option<PathOrStdin>,

    /// Maximum catalog file size in bytes.
    ///
    /// Can also be set via the `NIKPARSE_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "NIKPARSE_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log decoding steps and catalog details to stderr (incompatible with
    /// `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests;
