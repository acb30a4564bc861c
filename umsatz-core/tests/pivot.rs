use std::collections::BTreeMap;

use umsatz_core::{
    ForecastMethod, ForecastPoint, NormalizedPoint, SeriesLabel, group_by_year, merge_pivot,
    parse_iso_month,
};

fn point(iso: &str, value: f64) -> NormalizedPoint {
    NormalizedPoint {
        month: parse_iso_month(iso).unwrap(),
        value,
    }
}

fn forecast(iso: &str, value: f64) -> ForecastPoint {
    ForecastPoint {
        month: parse_iso_month(iso).unwrap(),
        value,
        method: ForecastMethod::MovingAverage,
    }
}

fn year(label: &str) -> SeriesLabel {
    SeriesLabel::Year(label.to_owned())
}

#[test]
fn overlays_years_and_forecast_per_month_of_year() {
    let mut series = BTreeMap::new();
    series.insert("2024".to_owned(), vec![point("2024-01", 100.0)]);
    series.insert("2025".to_owned(), vec![point("2025-01", 150.0)]);
    let fc = vec![forecast("2025-02", 200.0)];

    let rows = merge_pivot(&series, Some(&fc));
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].month_token, "01");
    assert_eq!(rows[0].columns.get(&year("2024")), Some(&100.0));
    assert_eq!(rows[0].columns.get(&year("2025")), Some(&150.0));
    assert_eq!(rows[0].columns.get(&SeriesLabel::Forecast), None);

    assert_eq!(rows[1].month_token, "02");
    assert_eq!(rows[1].columns.len(), 1);
    assert_eq!(rows[1].columns.get(&SeriesLabel::Forecast), Some(&200.0));
}

#[test]
fn spans_only_months_actually_present() {
    let mut series = BTreeMap::new();
    series.insert(
        "2024".to_owned(),
        vec![point("2024-03", 1.0), point("2024-11", 2.0)],
    );
    let rows = merge_pivot(&series, None);
    let tokens: Vec<&str> = rows.iter().map(|r| r.month_token.as_str()).collect();
    // No fabricated empty rows for months with no data at all.
    assert_eq!(tokens, vec!["03", "11"]);
}

#[test]
fn absent_cells_stay_absent_not_zero() {
    let mut series = BTreeMap::new();
    series.insert("2024".to_owned(), vec![point("2024-01", 0.0)]);
    series.insert("2025".to_owned(), vec![point("2025-02", 5.0)]);
    let rows = merge_pivot(&series, None);
    // "zero sales" is a value; "no data" is a missing key.
    assert_eq!(rows[0].columns.get(&year("2024")), Some(&0.0));
    assert_eq!(rows[0].columns.get(&year("2025")), None);
}

#[test]
fn forecast_never_overwrites_a_year_column() {
    let mut series = BTreeMap::new();
    series.insert("2025".to_owned(), vec![point("2025-02", 150.0)]);
    let fc = vec![forecast("2025-02", 999.0)];
    let rows = merge_pivot(&series, Some(&fc));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns.get(&year("2025")), Some(&150.0));
    assert_eq!(rows[0].columns.get(&SeriesLabel::Forecast), Some(&999.0));
}

#[test]
fn forecast_only_input_still_produces_rows() {
    let rows = merge_pivot(
        &BTreeMap::new(),
        Some(&[forecast("2025-01", 10.0), forecast("2025-02", 20.0)]),
    );
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.columns.len(), 1);
        assert!(row.columns.contains_key(&SeriesLabel::Forecast));
    }
}

#[test]
fn same_label_collision_splits_into_distinct_year_columns() {
    // One labeled series carrying two calendar years into month-of-year "01".
    let mut series = BTreeMap::new();
    series.insert(
        "2024".to_owned(),
        vec![point("2024-01", 100.0), point("2025-01", 175.0)],
    );
    let rows = merge_pivot(&series, None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns.get(&year("2024")), Some(&100.0));
    assert_eq!(rows[0].columns.get(&year("2025")), Some(&175.0));
}

#[test]
fn rows_sort_numerically_by_month_token() {
    let mut series = BTreeMap::new();
    series.insert(
        "2024".to_owned(),
        vec![
            point("2024-12", 1.0),
            point("2024-02", 2.0),
            point("2024-10", 3.0),
        ],
    );
    let rows = merge_pivot(&series, None);
    let tokens: Vec<&str> = rows.iter().map(|r| r.month_token.as_str()).collect();
    assert_eq!(tokens, vec!["02", "10", "12"]);
}

#[test]
fn merge_is_idempotent() {
    let mut series = BTreeMap::new();
    series.insert(
        "2024".to_owned(),
        vec![point("2024-01", 100.0), point("2024-02", 110.0)],
    );
    series.insert("2025".to_owned(), vec![point("2025-01", 150.0)]);
    let fc = vec![forecast("2025-03", 200.0)];

    let first = merge_pivot(&series, Some(&fc));
    let second = merge_pivot(&series, Some(&fc));
    assert_eq!(first, second);
}

#[test]
fn group_by_year_labels_match_pivot_columns() {
    let all_years = vec![
        point("2021-05", 1.0),
        point("2022-05", 2.0),
        point("2021-06", 3.0),
    ];
    let grouped = group_by_year(&all_years);
    let labels: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["2021", "2022"]);
    assert_eq!(grouped["2021"].len(), 2);

    let rows = merge_pivot(&grouped, None);
    assert_eq!(rows[0].month_token, "05");
    assert_eq!(rows[0].columns.get(&year("2021")), Some(&1.0));
    assert_eq!(rows[0].columns.get(&year("2022")), Some(&2.0));
}

#[test]
fn year_columns_serialize_before_the_forecast_column() {
    let mut series = BTreeMap::new();
    series.insert("2024".to_owned(), vec![point("2024-01", 1.0)]);
    let fc = vec![forecast("2025-01", 2.0)];
    let rows = merge_pivot(&series, Some(&fc));
    let labels: Vec<String> = rows[0].columns.keys().cloned().map(String::from).collect();
    assert_eq!(labels, vec!["2024".to_owned(), "Forecast".to_owned()]);
}
