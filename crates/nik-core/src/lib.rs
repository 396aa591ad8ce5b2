#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod calendar;
pub mod catalog;
pub mod decode;
pub mod newtypes;

pub use catalog::{CatalogError, GeoCatalog, Region, SUB_DISTRICT_DELIMITER};
pub use decode::{
    DateField, Gender, NIK_LENGTH, NikError, NikRecord, ParseConfig, infer_full_year, parse,
};
pub use newtypes::{NewtypeError, RegionCode, RegionLevel};

/// Returns the current version of the nik-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
