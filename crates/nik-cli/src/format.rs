//! Output formatting for decoded records and region lookups.
//!
//! - **Human mode** (default): one pipe-delimited line per result on stdout,
//!   `NIK|DD-MM-YYYY|GENDER|PROVINCE|DISTRICT|SUB-DISTRICT|POSTAL`.
//! - **JSON mode**: a single-line JSON object on stdout.
//!
//! All writers take a generic `Write` so tests can render into a `Vec<u8>`.
use std::io::Write;

use nik_core::{NikError, NikRecord, Region};
use serde_json::{Value, json};

/// Placeholder printed in place of the decoded fields when a NIK is invalid.
pub const INVALID_PLACEHOLDER: &str = "INVALID";

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes a decoded record as a pipe-delimited line.
///
/// Region fields are empty when geo validation was skipped, so the line still
/// has seven fields.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_record_human<W: Write>(
    writer: &mut W,
    nik: &str,
    record: &NikRecord,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{nik}|{}|{}|{}|{}|{}|{}",
        record.birth_date(),
        record.gender,
        record.province,
        record.district,
        record.sub_district,
        record.postal_code
    )
}

/// Writes the placeholder line for a NIK that failed to decode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_invalid_human<W: Write>(writer: &mut W, nik: &str) -> std::io::Result<()> {
    writeln!(writer, "{nik}|{INVALID_PLACEHOLDER}")
}

/// Writes a region as `CODE|NAME`, or `CODE|NAME|POSTAL` for sub-districts
/// that carry a postal code.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_region_human<W: Write>(writer: &mut W, region: &Region) -> std::io::Result<()> {
    match &region.postal_code {
        Some(postal) => writeln!(writer, "{}|{}|{postal}", region.code, region.name),
        None => writeln!(writer, "{}|{}", region.code, region.name),
    }
}

// ---------------------------------------------------------------------------
// JSON mode
// ---------------------------------------------------------------------------

/// Builds the JSON object for a decoded record.
///
/// The record's fields are flattened next to `nik`, `valid` and `birth_date`.
pub fn record_to_json(nik: &str, record: &NikRecord) -> Value {
    let mut value = serde_json::to_value(record).unwrap_or_else(|_| json!({}));
    if let Value::Object(map) = &mut value {
        map.insert("nik".to_owned(), Value::String(nik.to_owned()));
        map.insert("valid".to_owned(), Value::Bool(true));
        map.insert("birth_date".to_owned(), Value::String(record.birth_date()));
    }
    value
}

/// Builds the JSON object for a NIK that failed to decode.
pub fn invalid_to_json(nik: &str, err: &NikError) -> Value {
    json!({
        "nik": nik,
        "valid": false,
        "error": err.to_string(),
    })
}

/// Writes a JSON value as a single line.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json_line<W: Write>(writer: &mut W, value: &Value) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use nik_core::{GeoCatalog, ParseConfig, RegionCode, parse};

    use super::*;

    fn record(nik: &str, config: &ParseConfig) -> NikRecord {
        let catalog = GeoCatalog::bundled().expect("bundled catalog");
        parse(nik, &catalog, config).expect("valid NIK")
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("UTF-8 output")
    }

    #[test]
    fn human_record_line() {
        let nik = "3201010201980001";
        let rec = record(nik, &ParseConfig::default().with_reference_year(2024));
        let out = render(|w| write_record_human(w, nik, &rec));
        assert_eq!(
            out,
            "3201010201980001|02-01-1998|LAKI-LAKI|JAWA BARAT|KAB. BOGOR|CIBINONG|43271\n"
        );
    }

    #[test]
    fn human_record_line_without_geo_keeps_seven_fields() {
        let nik = "9999994201980001";
        let rec = record(nik, &ParseConfig::without_geo().with_reference_year(2024));
        let out = render(|w| write_record_human(w, nik, &rec));
        assert_eq!(out, "9999994201980001|02-01-1998|PEREMPUAN||||\n");
    }

    #[test]
    fn human_invalid_line() {
        let out = render(|w| write_invalid_human(w, "123"));
        assert_eq!(out, "123|INVALID\n");
    }

    #[test]
    fn human_region_lines() {
        let catalog = GeoCatalog::bundled().expect("bundled catalog");
        let sub = catalog
            .lookup(&RegionCode::try_from("320101").expect("code"))
            .expect("present");
        assert_eq!(
            render(|w| write_region_human(w, &sub)),
            "320101|CIBINONG|43271\n"
        );
        let province = catalog
            .lookup(&RegionCode::try_from("32").expect("code"))
            .expect("present");
        assert_eq!(
            render(|w| write_region_human(w, &province)),
            "32|JAWA BARAT\n"
        );
    }

    #[test]
    fn json_record_is_flat() {
        let nik = "3201010201980001";
        let rec = record(nik, &ParseConfig::default().with_reference_year(2024));
        let value = record_to_json(nik, &rec);
        assert_eq!(value["nik"], nik);
        assert_eq!(value["valid"], true);
        assert_eq!(value["birth_date"], "02-01-1998");
        assert_eq!(value["province"], "JAWA BARAT");
        assert_eq!(value["gender"], "LAKI-LAKI");
    }

    #[test]
    fn json_invalid_carries_error_message() {
        let err = NikError::InvalidLength { length: 3 };
        let value = invalid_to_json("123", &err);
        assert_eq!(value["valid"], false);
        assert!(
            value["error"]
                .as_str()
                .expect("string")
                .contains("length")
        );
    }

    #[test]
    fn json_line_ends_with_newline() {
        let out = render(|w| write_json_line(w, &json!({"a": 1})));
        assert_eq!(out, "{\"a\":1}\n");
    }
}
