//! Property-based tests for NIK decoding.
//!
//! Generates identifiers field by field so that each property can control
//! exactly which part of the input varies.
#![allow(clippy::expect_used)]

use nik_core::{DateField, GeoCatalog, Gender, NikError, ParseConfig, calendar, parse};
use proptest::prelude::*;

/// Region prefixes present in the bundled catalog.
const KNOWN_PREFIXES: &[&str] = &["320101", "320102", "317101", "327301", "517101"];

fn bundled() -> GeoCatalog {
    GeoCatalog::bundled().expect("bundled catalog parses")
}

/// Builds a NIK from its parts. `day` is the encoded day (with the female
/// offset already applied when wanted).
fn build_nik(prefix: &str, day: u32, month: u32, yy: u32, suffix: u32) -> String {
    format!("{prefix}{day:02}{month:02}{yy:02}{suffix:04}")
}

/// Strategy for a real calendar date as (day, month, two-digit year).
fn valid_date() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=12, 0u32..=99).prop_flat_map(|(month, yy)| {
        // Reference year 2050: yy < 50 is 20yy, the rest 19yy.
        let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
        let max_day = calendar::days_in_month(year, month);
        (1..=max_day).prop_map(move |day| (day, month, yy))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any input whose byte length is not 16 is rejected on length alone.
    #[test]
    fn wrong_length_is_rejected(s in "\\PC{0,40}") {
        prop_assume!(s.len() != 16);
        let result = parse(&s, &GeoCatalog::default(), &ParseConfig::default());
        prop_assert_eq!(result, Err(NikError::InvalidLength { length: s.len() }));
    }

    /// Known prefixes with a real date decode to the catalog's names.
    #[test]
    fn known_prefix_and_valid_date_decode(
        prefix_idx in 0..KNOWN_PREFIXES.len(),
        (day, month, yy) in valid_date(),
        suffix in 0u32..10_000,
    ) {
        let catalog = bundled();
        let prefix = KNOWN_PREFIXES[prefix_idx];
        let nik = build_nik(prefix, day, month, yy, suffix);
        let config = ParseConfig::default().with_reference_year(2050);
        let record = parse(&nik, &catalog, &config).expect("valid NIK");

        prop_assert_eq!(&record.province, catalog.province(&prefix[..2]));
        prop_assert_eq!(&record.district, catalog.district(&prefix[..4]));
        let raw = catalog.sub_district_raw(prefix);
        let expected_prefix = format!("{} -- ", record.sub_district);
        prop_assert!(raw.starts_with(&expected_prefix));
        prop_assert!(raw.ends_with(&record.postal_code));
        prop_assert!(!record.skipped_geo_validation);
    }

    /// Days above 40 are female with 40 removed; the reported day is always
    /// a zero-padded value in 1..=31.
    #[test]
    fn gender_follows_day_offset(
        (day, month, yy) in valid_date(),
        female in any::<bool>(),
    ) {
        let encoded = if female { day + 40 } else { day };
        let nik = build_nik("320101", encoded, month, yy, 1);
        let config = ParseConfig::without_geo().with_reference_year(2050);
        let record = parse(&nik, &GeoCatalog::default(), &config).expect("valid date");

        let expected = if female { Gender::Female } else { Gender::Male };
        prop_assert_eq!(record.gender, expected);
        prop_assert_eq!(record.date_of_birth.len(), 2);
        let reported: u32 = record.date_of_birth.parse().expect("numeric day");
        prop_assert_eq!(reported, day);
        prop_assert!((1..=31).contains(&reported));
    }

    /// The century flips exactly when the two-digit year reaches the
    /// reference year's last two digits.
    #[test]
    fn century_flips_at_reference_year(yy in 0u32..=99, reference_year in 1950u32..=2099) {
        // 1 January always exists, so only the century varies.
        let nik = build_nik("320101", 1, 1, yy, 1);
        let config = ParseConfig::without_geo().with_reference_year(reference_year);
        let record = parse(&nik, &GeoCatalog::default(), &config).expect("valid date");

        let expected_century = if yy < reference_year % 100 { "20" } else { "19" };
        prop_assert_eq!(&record.year_of_birth[..2], expected_century);
        prop_assert_eq!(&record.year_of_birth[2..], format!("{yy:02}"));
    }

    /// Moving the reference year forward never moves a fixed input from the
    /// 2000s back to the 1900s within the same century.
    #[test]
    fn century_inference_is_monotonic(yy in 0u32..=99, a in 2000u32..=2099, b in 2000u32..=2099) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let nik = build_nik("320101", 1, 1, yy, 1);
        let early_rec = parse(&nik, &GeoCatalog::default(),
            &ParseConfig::without_geo().with_reference_year(early)).expect("valid");
        let late_rec = parse(&nik, &GeoCatalog::default(),
            &ParseConfig::without_geo().with_reference_year(late)).expect("valid");
        prop_assert!(early_rec.year_of_birth <= late_rec.year_of_birth);
    }

    /// With geo validation skipped, unknown prefixes still decode and leave
    /// every region field empty.
    #[test]
    fn geo_skip_ignores_prefix(
        prefix in "[0-9]{6}",
        (day, month, yy) in valid_date(),
    ) {
        let nik = build_nik(&prefix, day, month, yy, 42);
        let config = ParseConfig::without_geo().with_reference_year(2050);
        let record = parse(&nik, &bundled(), &config).expect("valid date");

        prop_assert!(record.skipped_geo_validation);
        prop_assert!(record.province.is_empty());
        prop_assert!(record.district.is_empty());
        prop_assert!(record.sub_district.is_empty());
        prop_assert!(record.postal_code.is_empty());
        prop_assert_eq!(record.sub_district_code, prefix);
    }

    /// A non-digit in the day field is a day parse error regardless of the
    /// rest of the input.
    #[test]
    fn letter_in_day_is_field_error(letter in "[A-Za-z]", pos in 0usize..2) {
        let mut day = ['0', '1'];
        day[pos] = letter.chars().next().expect("one char");
        let nik = format!("320101{}{}01980001", day[0], day[1]);
        let config = ParseConfig::without_geo().with_reference_year(2050);
        let err = parse(&nik, &GeoCatalog::default(), &config).expect_err("bad day");
        let is_day_error = matches!(err, NikError::FieldParse { field: DateField::Day, .. });
        prop_assert!(is_day_error);
    }
}
