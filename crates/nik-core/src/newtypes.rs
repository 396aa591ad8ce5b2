//! Validated newtype wrappers for administrative region codes.
//!
//! A NIK encodes the administrative hierarchy as cumulative two-digit
//! segments: the province code is the first two digits, the district code the
//! first four, and the sub-district code the first six. [`RegionCode`]
//! enforces that shape at construction time via [`TryFrom<&str>`] and exposes
//! the hierarchy level it addresses.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// Regex statics
//
// The pattern is a compile-time literal and Regex::new never returns Err for
// it. The workspace bans expect() and unwrap(), so the fallback is "a^", a
// valid pattern that never matches.
// ---------------------------------------------------------------------------

/// Matches 2, 4 or 6 ASCII digits.
static REGION_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}(?:[0-9]{2}){0,2}$").unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
});

// ---------------------------------------------------------------------------
// RegionLevel
// ---------------------------------------------------------------------------

/// The administrative level addressed by a [`RegionCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    /// Two-digit province (`provinsi`) code.
    Province,
    /// Four-digit district (`kabupaten`/`kota`) code.
    District,
    /// Six-digit sub-district (`kecamatan`) code.
    SubDistrict,
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Province => "province",
            Self::District => "district",
            Self::SubDistrict => "sub-district",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// RegionCode
// ---------------------------------------------------------------------------

/// A province, district or sub-district code.
///
/// Regex: `^[0-9]{2}(?:[0-9]{2}){0,2}$`. The level is implied by the length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode(String);

impl TryFrom<&str> for RegionCode {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if REGION_CODE_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "RegionCode",
                expected: "2, 4 or 6 digits (province, district or sub-district)",
                got: s.to_owned(),
            })
        }
    }
}

impl RegionCode {
    /// Returns the administrative level this code addresses.
    pub fn level(&self) -> RegionLevel {
        match self.0.len() {
            2 => RegionLevel::Province,
            4 => RegionLevel::District,
            _ => RegionLevel::SubDistrict,
        }
    }

    /// Returns the code of the enclosing region, or `None` for a province.
    pub fn parent(&self) -> Option<RegionCode> {
        match self.level() {
            RegionLevel::Province => None,
            RegionLevel::District | RegionLevel::SubDistrict => {
                Some(Self(self.0[..self.0.len() - 2].to_owned()))
            }
        }
    }
}

impl Deref for RegionCode {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RegionCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
