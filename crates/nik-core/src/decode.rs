//! Decoding of a 16-digit NIK into its region, birth-date and gender fields.
//!
//! A NIK is laid out as fixed-width fields:
//!
//! ```text
//!  0  2  4  6  8  10 12       16
//!  PP DD SS dd mm yy UUUU
//!  |  |  |  |  |  |  └─ uniqueness suffix
//!  |  |  |  |  |  └──── birth year, two digits
//!  |  |  |  |  └─────── birth month
//!  |  |  |  └────────── birth day, +40 for women
//!  |  |  └───────────── sub-district digits
//!  |  └──────────────── district digits
//!  └─────────────────── province digits
//! ```
//!
//! [`parse`] checks the fields in a fixed order and stops at the first
//! failure. The only input besides the identifier and the catalog is the
//! reference year used to pick the birth century, which callers can pin via
//! [`ParseConfig::reference_year`].
use std::fmt;

use serde::Serialize;

use crate::calendar;
use crate::catalog::{GeoCatalog, split_sub_district};

/// Required length of a NIK, in bytes.
pub const NIK_LENGTH: usize = 16;

/// Amount added to the birth day of female holders.
const FEMALE_DAY_OFFSET: i32 = 40;

// ---------------------------------------------------------------------------
// NikError
// ---------------------------------------------------------------------------

/// The birth-date field that failed to parse as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Characters 6..8.
    Day,
    /// Characters 10..12.
    Year,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("day of birth"),
            Self::Year => f.write_str("year of birth"),
        }
    }
}

/// Reasons a NIK is rejected by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NikError {
    /// The input is not exactly [`NIK_LENGTH`] bytes long.
    InvalidLength {
        /// Actual length in bytes.
        length: usize,
    },
    /// At least one of the three region codes is absent from the catalog.
    GeoNotFound {
        /// Characters 0..2.
        province_code: String,
        /// Characters 0..4.
        district_code: String,
        /// Characters 0..6.
        sub_district_code: String,
    },
    /// The day or year digits are not an integer.
    FieldParse {
        /// Which field failed.
        field: DateField,
        /// The raw characters.
        value: String,
    },
    /// The catalog's sub-district entry lacks the name/postal-code delimiter.
    MalformedCatalogEntry {
        /// Sub-district code whose entry is malformed.
        code: String,
        /// The entry as stored in the catalog.
        entry: String,
    },
    /// The composed `DD-MM-YYYY` birth date does not exist.
    InvalidDate {
        /// The composed date string.
        date: String,
    },
}

impl fmt::Display for NikError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "invalid NIK length: expected {NIK_LENGTH} characters, got {length}"
                )
            }
            Self::GeoNotFound {
                province_code,
                district_code,
                sub_district_code,
            } => write!(
                f,
                "province or district or sub-district not found: \
                 {province_code} | {district_code} | {sub_district_code}"
            ),
            Self::FieldParse { field, value } => {
                write!(f, "cannot parse {field}: {value:?} is not a number")
            }
            Self::MalformedCatalogEntry { code, entry } => write!(
                f,
                "malformed catalog entry for sub-district {code}: {entry:?} has no postal code"
            ),
            Self::InvalidDate { date } => write!(f, "invalid date of birth: {date}"),
        }
    }
}

impl std::error::Error for NikError {}

// ---------------------------------------------------------------------------
// ParseConfig
// ---------------------------------------------------------------------------

/// Options for [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Skip the catalog lookup. Region fields of the record are left empty
    /// and [`NikRecord::skipped_geo_validation`] is set. Default `false`.
    pub skip_geo_validation: bool,
    /// Year used for century inference. `None` (the default) reads the
    /// system clock on every call.
    pub reference_year: Option<u32>,
}

impl ParseConfig {
    /// Configuration that decodes birth date and gender only.
    pub fn without_geo() -> Self {
        Self {
            skip_geo_validation: true,
            ..Self::default()
        }
    }

    /// Pins the reference year used for century inference.
    #[must_use]
    pub fn with_reference_year(mut self, year: u32) -> Self {
        self.reference_year = Some(year);
        self
    }
}

// ---------------------------------------------------------------------------
// NikRecord
// ---------------------------------------------------------------------------

/// Gender encoded by the day-of-birth offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    /// Day of birth stored as-is.
    #[serde(rename = "LAKI-LAKI")]
    Male,
    /// Day of birth stored with 40 added.
    #[serde(rename = "PEREMPUAN")]
    Female,
}

impl Gender {
    /// The Indonesian label printed on identity documents.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "LAKI-LAKI",
            Self::Female => "PEREMPUAN",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields decoded from a valid NIK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NikRecord {
    /// Province code, characters 0..2.
    pub province_code: String,
    /// District code, characters 0..4.
    pub district_code: String,
    /// Sub-district code, characters 0..6.
    pub sub_district_code: String,
    /// Province name; empty when geo validation was skipped.
    pub province: String,
    /// District name; empty when geo validation was skipped.
    pub district: String,
    /// Sub-district name, uppercased; empty when geo validation was skipped.
    pub sub_district: String,
    /// Postal code of the sub-district; empty when geo validation was skipped.
    pub postal_code: String,
    /// Two-digit day of birth with the gender offset removed.
    pub date_of_birth: String,
    /// Two-digit month of birth, as written in the NIK.
    pub month_of_birth: String,
    /// Four-digit year of birth after century inference.
    pub year_of_birth: String,
    /// Gender derived from the day offset.
    pub gender: Gender,
    /// Registration sequence, characters 12..16.
    pub unique_code: String,
    /// `true` when the record was produced without consulting the catalog.
    pub skipped_geo_validation: bool,
}

impl NikRecord {
    /// Birth date as `DD-MM-YYYY`.
    pub fn birth_date(&self) -> String {
        format!(
            "{}-{}-{}",
            self.date_of_birth, self.month_of_birth, self.year_of_birth
        )
    }
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

/// Region names resolved from the catalog.
#[derive(Default)]
struct Geo {
    province: String,
    district: String,
    sub_district: String,
    postal_code: String,
}

/// Decodes and validates a NIK.
///
/// The checks run in this order, each one short-circuiting:
///
/// 1. the input is exactly [`NIK_LENGTH`] bytes (digits are not checked here);
/// 2. unless [`ParseConfig::skip_geo_validation`] is set, the province,
///    district and sub-district prefixes all exist in `catalog` and the
///    sub-district entry splits into a name and postal code;
/// 3. the day and year digits parse as integers;
/// 4. the composed `DD-MM-YYYY` date exists.
///
/// A day above 40 marks a female holder and has 40 subtracted. The two-digit
/// year is placed in the 2000s when it is below the last two digits of the
/// reference year, and in the 1900s otherwise.
///
/// # Errors
///
/// Returns the [`NikError`] variant of the first check that fails.
///
/// # Examples
///
/// ```
/// use nik_core::{GeoCatalog, Gender, ParseConfig, parse};
///
/// let catalog = GeoCatalog::bundled().expect("bundled catalog");
/// let config = ParseConfig::default().with_reference_year(2024);
/// let record = parse("3201010201980001", &catalog, &config).expect("valid NIK");
///
/// assert_eq!(record.province, "JAWA BARAT");
/// assert_eq!(record.birth_date(), "02-01-1998");
/// assert_eq!(record.gender, Gender::Male);
/// ```
pub fn parse(nik: &str, catalog: &GeoCatalog, config: &ParseConfig) -> Result<NikRecord, NikError> {
    let bytes = nik.as_bytes();
    if bytes.len() != NIK_LENGTH {
        return Err(NikError::InvalidLength {
            length: bytes.len(),
        });
    }

    let province_code = segment(bytes, 0, 2);
    let district_code = segment(bytes, 0, 4);
    let sub_district_code = segment(bytes, 0, 6);

    let geo = if config.skip_geo_validation {
        tracing::trace!("geo validation skipped");
        Geo::default()
    } else {
        resolve_geo(catalog, &province_code, &district_code, &sub_district_code)?
    };

    let day_raw = segment(bytes, 6, 8);
    let month_of_birth = segment(bytes, 8, 10);
    let year_raw = segment(bytes, 10, 12);

    let day = parse_field(&day_raw, DateField::Day)?;
    let year = parse_field(&year_raw, DateField::Year)?;

    let (gender, day) = if day > FEMALE_DAY_OFFSET {
        (Gender::Female, day - FEMALE_DAY_OFFSET)
    } else {
        (Gender::Male, day)
    };
    let date_of_birth = format!("{day:02}");

    let reference_year = config.reference_year.unwrap_or_else(calendar::current_year);
    let year_of_birth = infer_full_year(year, reference_year);

    let date = format!("{date_of_birth}-{month_of_birth}-{year_of_birth}");
    if !calendar::is_valid_dmy(&date) {
        return Err(NikError::InvalidDate { date });
    }
    tracing::debug!(%date, gender = gender.label(), "NIK decoded");

    Ok(NikRecord {
        province_code,
        district_code,
        sub_district_code,
        province: geo.province,
        district: geo.district,
        sub_district: geo.sub_district,
        postal_code: geo.postal_code,
        date_of_birth,
        month_of_birth,
        year_of_birth,
        gender,
        unique_code: segment(bytes, 12, 16),
        skipped_geo_validation: config.skip_geo_validation,
    })
}

/// Checks the three region codes against the catalog and resolves their names.
fn resolve_geo(
    catalog: &GeoCatalog,
    province_code: &str,
    district_code: &str,
    sub_district_code: &str,
) -> Result<Geo, NikError> {
    if !catalog.has_entry(province_code, district_code, sub_district_code) {
        return Err(NikError::GeoNotFound {
            province_code: province_code.to_owned(),
            district_code: district_code.to_owned(),
            sub_district_code: sub_district_code.to_owned(),
        });
    }

    let entry = catalog.sub_district_raw(sub_district_code).to_uppercase();
    let Some((sub_district, postal_code)) = split_sub_district(&entry) else {
        return Err(NikError::MalformedCatalogEntry {
            code: sub_district_code.to_owned(),
            entry: catalog.sub_district_raw(sub_district_code).to_owned(),
        });
    };

    Ok(Geo {
        province: catalog.province(province_code).to_owned(),
        district: catalog.district(district_code).to_owned(),
        sub_district: sub_district.to_owned(),
        postal_code: postal_code.to_owned(),
    })
}

/// Returns bytes `start..end` of the identifier as a string.
///
/// The length check happens on bytes, so a multi-byte character may straddle
/// a field boundary; such bytes decode to U+FFFD and fail the later checks
/// instead of panicking on a char boundary.
fn segment(bytes: &[u8], start: usize, end: usize) -> String {
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

/// Parses a day or year field as a signed integer.
///
/// A leading sign is accepted, like any integer parse; a negative value then
/// fails date validation.
fn parse_field(raw: &str, field: DateField) -> Result<i32, NikError> {
    raw.parse::<i32>().map_err(|_| NikError::FieldParse {
        field,
        value: raw.to_owned(),
    })
}

/// Expands a two-digit year to four digits relative to `reference_year`.
///
/// Years below the reference year's last two digits are taken as 20xx, all
/// others as 19xx. There is no pivot window: with reference year 2024, `23`
/// becomes 2023 and `24` becomes 1924.
pub fn infer_full_year(two_digit_year: i32, reference_year: u32) -> String {
    let pivot = i64::from(reference_year % 100);
    let prefix = if i64::from(two_digit_year) < pivot {
        "20"
    } else {
        "19"
    };
    format!("{prefix}{two_digit_year:02}")
}
