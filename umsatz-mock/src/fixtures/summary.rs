use serde_json::json;
use umsatz_core::{RawAggregate, SalesFilter};

/// Monthly aggregates for the selected filter window.
///
/// Amounts deliberately mix German locale strings and plain numbers, the
/// way the real endpoints do.
pub fn summary(filter: &SalesFilter) -> Vec<RawAggregate> {
    let year = filter.year.as_deref().unwrap_or("2025");
    match year {
        "2024" => build(vec![
            ("01.2024", json!("10.250,00 €")),
            ("02.2024", json!("11.800,50 €")),
            ("03.2024", json!("9.975,25 €")),
            ("04.2024", json!(12030.75)),
        ]),
        _ => build(vec![
            ("01.2025", json!("12.500,00 €")),
            ("02.2025", json!("14.250,75 €")),
            ("03.2025", json!(13980.0)),
        ]),
    }
}

/// Monthly aggregates across every available year, unfiltered and
/// deliberately unsorted.
pub fn all_years() -> Vec<RawAggregate> {
    build(vec![
        ("03.2025", json!(13980.0)),
        ("01.2024", json!("10.250,00 €")),
        ("01.2025", json!("12.500,00 €")),
        ("02.2024", json!("11.800,50 €")),
        ("12.2023", json!("8.790,00 €")),
        ("02.2025", json!("14.250,75 €")),
        ("01.2023", json!("7.500,00 €")),
    ])
}

fn build(rows: Vec<(&str, serde_json::Value)>) -> Vec<RawAggregate> {
    rows.into_iter()
        .map(|(period_key, amount)| RawAggregate {
            period_key: period_key.to_owned(),
            amount,
            dimension: None,
        })
        .collect()
}
