//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `nikparse` binary. Every
//! variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
//!
//! - Exit code **2**: input failure. The catalog could not be read or parsed,
//!   or an argument is malformed. Nothing was decoded.
//! - Exit code **1**: logical failure. The input was well-formed but the
//!   lookup found nothing.
//!
//! An invalid NIK is not a `CliError`: `parse` reports it on
//! stdout/stderr and exits 0.
use std::fmt;
use std::path::PathBuf;

/// All error conditions that the `nikparse` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// Any other I/O error while reading input or writing output.
    IoError {
        /// What was being read or written.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The region catalog is not valid catalog JSON.
    CatalogLoad {
        /// `"bundled"`, `"-"` for stdin, or the filesystem path.
        source: String,
        /// The catalog parser's message.
        detail: String,
    },

    /// The `region` argument is not a 2-, 4- or 6-digit code.
    InvalidRegionCode {
        /// The validation message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The region code is well-formed but absent from the catalog.
    RegionNotFound {
        /// The code that was looked up.
        code: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::IoError { .. }
            | Self::CatalogLoad { .. }
            | Self::InvalidRegionCode { .. } => 2,

            Self::RegionNotFound { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::CatalogLoad { source, detail } => {
                format!("error: cannot load region catalog from {source}: {detail}")
            }
            Self::InvalidRegionCode { detail } => format!("error: {detail}"),
            Self::RegionNotFound { code } => {
                format!("error: region {code} not found in catalog")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}
