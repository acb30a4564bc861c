use serde_json::{Value, json};
use umsatz_core::{CanonicalMonth, parse_compact_month, parse_iso_month, parse_locale_amount};

#[test]
fn german_formatted_amount_parses() {
    assert_eq!(parse_locale_amount(&json!("1.234,56")), 1234.56);
    assert_eq!(parse_locale_amount(&json!("1.234,56 €")), 1234.56);
    assert_eq!(parse_locale_amount(&json!("1.234.567,89")), 1_234_567.89);
    assert_eq!(parse_locale_amount(&json!("-12,5")), -12.5);
}

#[test]
fn machine_formatted_amount_parses() {
    assert_eq!(parse_locale_amount(&json!("42")), 42.0);
    assert_eq!(parse_locale_amount(&json!("42.5")), 42.5);
    assert_eq!(parse_locale_amount(&json!(42.5)), 42.5);
    assert_eq!(parse_locale_amount(&json!(7)), 7.0);
}

#[test]
fn malformed_amounts_coerce_to_zero() {
    assert_eq!(parse_locale_amount(&json!("")), 0.0);
    assert_eq!(parse_locale_amount(&Value::Null), 0.0);
    assert_eq!(parse_locale_amount(&json!("n/a")), 0.0);
    assert_eq!(parse_locale_amount(&json!(true)), 0.0);
    assert_eq!(parse_locale_amount(&json!({"nested": 1})), 0.0);
    // Comma soup is unparseable, not a guess
    assert_eq!(parse_locale_amount(&json!("1,2,3")), 0.0);
}

#[test]
fn amount_never_nan() {
    for raw in ["", "NaN", "inf", "-", ",", "€"] {
        let v = parse_locale_amount(&json!(raw));
        assert!(v.is_finite(), "non-finite result for {raw:?}");
    }
}

#[test]
fn compact_month_parses_to_canonical_form() {
    let m = parse_compact_month("02.2025").unwrap();
    assert_eq!(m.to_string(), "2025-02");
    assert_eq!(m.year(), 2025);
    assert_eq!(m.month(), 2);
    assert_eq!(m.month_token(), "02");
}

#[test]
fn compact_month_rejects_bad_input() {
    for raw in [
        "13.2025", // month out of range
        "00.2025", // month out of range
        "2025-02", // ISO form belongs to the forecast endpoint
        "2.2025",  // month not zero-padded
        "02.25",   // year not 4 digits
        "02.2025.01",
        "022025",
        "",
    ] {
        let err = parse_compact_month(raw).unwrap_err();
        assert_eq!(err.raw, raw, "error must carry the offending raw value");
    }
}

#[test]
fn iso_month_parses_and_rejects_compact_form() {
    assert_eq!(parse_iso_month("2025-02").unwrap().to_string(), "2025-02");
    assert!(parse_iso_month("02.2025").is_err());
    assert!(parse_iso_month("2025-13").is_err());
    assert!(parse_iso_month("25-02").is_err());
}

#[test]
fn canonical_month_is_seven_chars_and_calendar_ordered() {
    let a = CanonicalMonth::new(2024, 12).unwrap();
    let b = CanonicalMonth::new(2025, 1).unwrap();
    assert_eq!(a.to_string().len(), 7);
    assert_eq!(b.to_string().len(), 7);
    // Calendar order, not lexicographic order of the compact form
    // ("12.2024" > "01.2025" as strings).
    assert!(a < b);
}

#[test]
fn canonical_month_serde_round_trips_as_iso_string() {
    let m = CanonicalMonth::new(2023, 7).unwrap();
    let s = serde_json::to_string(&m).unwrap();
    assert_eq!(s, "\"2023-07\"");
    let back: CanonicalMonth = serde_json::from_str(&s).unwrap();
    assert_eq!(back, m);
}
