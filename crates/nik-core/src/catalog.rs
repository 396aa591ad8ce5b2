//! The geographic reference catalog: administrative codes to names.
//!
//! A [`GeoCatalog`] holds three flat maps keyed by cumulative numeric codes:
//!
//! | JSON key    | Level        | Key width | Value                       |
//! |-------------|--------------|-----------|-----------------------------|
//! | `provinsi`  | province     | 2 digits  | province name               |
//! | `kabkot`    | district     | 4 digits  | district name               |
//! | `kecamatan` | sub-district | 6 digits  | `"<NAME> -- <POSTAL CODE>"` |
//!
//! The catalog is built once (from the bundled resource or an external JSON
//! document) and is read-only afterwards, so a shared reference can be used
//! from any number of threads.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::newtypes::{RegionCode, RegionLevel};

/// Separator between the sub-district name and its postal code.
pub const SUB_DISTRICT_DELIMITER: &str = " -- ";

/// The catalog compiled into the library.
const BUNDLED_GEODATA: &str = include_str!("../assets/geodata.json");

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Errors produced while loading a [`GeoCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The document is not valid JSON, or does not match the three-category
    /// schema (missing category, unknown top-level key, non-string value).
    Json {
        /// 1-based line of the first error.
        line: usize,
        /// 1-based column of the first error.
        column: usize,
        /// Description from the JSON parser.
        detail: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json {
                line,
                column,
                detail,
            } => write!(
                f,
                "invalid geo catalog at line {line}, column {column}: {detail}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// GeoCatalog
// ---------------------------------------------------------------------------

/// Immutable lookup table of Indonesian administrative regions.
///
/// `GeoCatalog::default()` is the empty catalog; it is what a caller passes
/// when geographic validation is skipped and the real data is not needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoCatalog {
    #[serde(rename = "provinsi")]
    provinces: BTreeMap<String, String>,
    #[serde(rename = "kabkot")]
    districts: BTreeMap<String, String>,
    #[serde(rename = "kecamatan")]
    sub_districts: BTreeMap<String, String>,
}

/// A resolved catalog entry, returned by [`GeoCatalog::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// The code that was looked up.
    pub code: RegionCode,
    /// Administrative level of the code.
    pub level: RegionLevel,
    /// Region name. For sub-districts this is the name part of the composite
    /// entry, uppercased.
    pub name: String,
    /// Postal code; only present for sub-districts whose entry carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl GeoCatalog {
    /// Parses a catalog from a JSON document.
    ///
    /// Only the structure is checked: the three categories must be present,
    /// no other top-level key is allowed, and every value must be a string.
    /// Codes are not cross-checked against their parents; see
    /// [`GeoCatalog::orphans`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the document cannot be deserialized.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(
            provinces = catalog.province_count(),
            districts = catalog.district_count(),
            sub_districts = catalog.sub_district_count(),
            "geo catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses the catalog bundled with this library.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the bundled resource is malformed,
    /// which indicates a broken build rather than bad user input.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_GEODATA)
    }

    /// Returns `true` iff all three codes are present in their respective
    /// tables.
    pub fn has_entry(
        &self,
        province_code: &str,
        district_code: &str,
        sub_district_code: &str,
    ) -> bool {
        self.provinces.contains_key(province_code)
            && self.districts.contains_key(district_code)
            && self.sub_districts.contains_key(sub_district_code)
    }

    /// Province name for a 2-digit code, or `""` if absent.
    pub fn province(&self, code: &str) -> &str {
        self.provinces.get(code).map_or("", String::as_str)
    }

    /// District name for a 4-digit code, or `""` if absent.
    pub fn district(&self, code: &str) -> &str {
        self.districts.get(code).map_or("", String::as_str)
    }

    /// Raw `"<NAME> -- <POSTAL CODE>"` entry for a 6-digit code, or `""` if
    /// absent.
    pub fn sub_district_raw(&self, code: &str) -> &str {
        self.sub_districts.get(code).map_or("", String::as_str)
    }

    /// Looks up a region at whatever level `code` addresses.
    ///
    /// Sub-district entries are split on [`SUB_DISTRICT_DELIMITER`]; an entry
    /// without the delimiter is returned whole as the name with no postal
    /// code.
    pub fn lookup(&self, code: &RegionCode) -> Option<Region> {
        let level = code.level();
        let (name, postal_code) = match level {
            RegionLevel::Province => (self.provinces.get(&**code)?.clone(), None),
            RegionLevel::District => (self.districts.get(&**code)?.clone(), None),
            RegionLevel::SubDistrict => {
                let raw = self.sub_districts.get(&**code)?.to_uppercase();
                match split_sub_district(&raw) {
                    Some((name, postal)) => (name.to_owned(), Some(postal.to_owned())),
                    None => (raw, None),
                }
            }
        };
        Some(Region {
            code: code.clone(),
            level,
            name,
            postal_code,
        })
    }

    /// Number of province entries.
    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    /// Number of district entries.
    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    /// Number of sub-district entries.
    pub fn sub_district_count(&self) -> usize {
        self.sub_districts.len()
    }

    /// Lists district and sub-district codes whose parent code is missing.
    ///
    /// A district `"3201"` needs province `"32"`; a sub-district `"320101"`
    /// needs district `"3201"`. Keys that are not a well-formed code of their
    /// own level are reported as well. Results are sorted.
    pub fn orphans(&self) -> Vec<String> {
        let district_orphans = self
            .districts
            .keys()
            .filter(|key| lacks_parent(key, RegionLevel::District, &self.provinces));
        let sub_district_orphans = self
            .sub_districts
            .keys()
            .filter(|key| lacks_parent(key, RegionLevel::SubDistrict, &self.districts));

        let mut out: Vec<String> = district_orphans
            .chain(sub_district_orphans)
            .cloned()
            .collect();
        out.sort();
        out
    }
}

/// `true` unless `key` is a `level` code whose parent is a key of `parents`.
fn lacks_parent(key: &str, level: RegionLevel, parents: &BTreeMap<String, String>) -> bool {
    match RegionCode::try_from(key) {
        Ok(code) if code.level() == level => code
            .parent()
            .is_none_or(|parent| !parents.contains_key(&*parent)),
        Ok(_) | Err(_) => true,
    }
}

/// Splits an uppercased sub-district entry into `(name, postal_code)`.
///
/// Returns `None` if the entry lacks the delimiter. When the delimiter occurs
/// more than once, the postal code is the segment after the first one.
pub(crate) fn split_sub_district(entry: &str) -> Option<(&str, &str)> {
    let mut parts = entry.split(SUB_DISTRICT_DELIMITER);
    let name = parts.next()?;
    let postal = parts.next()?;
    Some((name, postal))
}
