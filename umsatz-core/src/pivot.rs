//! Multi-year pivot merging for comparison charts.
//!
//! Combines several yearly series plus an optional forecast series into one
//! month-of-year-keyed table, so a single chart can overlay multiple years
//! and a forecast line.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ForecastPoint, NormalizedPoint};

/// Column label inside a pivot row: a year series or the forecast series.
///
/// Ordered with every year before the forecast column, so serialized rows
/// list historical columns first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeriesLabel {
    /// A historical year series, labeled by the grouping key (normally the
    /// 4-digit calendar year).
    Year(String),
    /// The forecast series. Structurally distinct from every year column.
    Forecast,
}

impl From<String> for SeriesLabel {
    fn from(s: String) -> Self {
        if s == "Forecast" {
            Self::Forecast
        } else {
            Self::Year(s)
        }
    }
}

impl From<SeriesLabel> for String {
    fn from(label: SeriesLabel) -> Self {
        match label {
            SeriesLabel::Year(y) => y,
            SeriesLabel::Forecast => "Forecast".to_owned(),
        }
    }
}

/// One month-of-year's comparison across all input series.
///
/// Invariant: exactly one row exists per distinct month-of-year present in
/// any input, and a missing cell is an absent key, never a zero. Charting
/// must be able to distinguish "no data" from "zero sales".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    /// Zero-padded month-of-year token, `"01"`..`"12"`.
    pub month_token: String,
    /// Cell values keyed by series label.
    pub columns: BTreeMap<SeriesLabel, f64>,
}

/// Group an all-years series into one labeled sub-series per calendar year.
///
/// The label is the 4-digit year string, which is exactly the column label
/// [`merge_pivot`] will emit for it.
#[must_use]
pub fn group_by_year(points: &[NormalizedPoint]) -> BTreeMap<String, Vec<NormalizedPoint>> {
    let mut by_year: BTreeMap<String, Vec<NormalizedPoint>> = BTreeMap::new();
    for p in points {
        by_year
            .entry(format!("{:04}", p.month.year()))
            .or_default()
            .push(*p);
    }
    by_year
}

/// Merge labeled yearly series and an optional forecast series into pivot
/// rows, one per month-of-year actually present in any input.
///
/// - Months absent from every input are not synthesized; the output spans
///   exactly the months with data.
/// - Forecast points contribute their own `Forecast` column and never
///   overwrite a year column, even on a coinciding month-of-year.
/// - If one labeled series contributes two different calendar years to the
///   same month-of-year, the colliding point is re-keyed under its own
///   calendar year so both values stay visible as distinct columns. An exact
///   duplicate (same label, same month) keeps the first appearance.
/// - Rows are sorted ascending by the numeric month-of-year.
///
/// Pure and idempotent: merging the same inputs twice yields identical
/// output.
#[must_use]
pub fn merge_pivot(
    series_by_label: &BTreeMap<String, Vec<NormalizedPoint>>,
    forecast: Option<&[ForecastPoint]>,
) -> Vec<PivotRow> {
    let mut rows: BTreeMap<u8, BTreeMap<SeriesLabel, f64>> = BTreeMap::new();

    for (label, points) in series_by_label {
        for p in points {
            let columns = rows.entry(p.month.month()).or_default();
            let key = SeriesLabel::Year(label.clone());
            if columns.contains_key(&key) {
                let rekey = SeriesLabel::Year(format!("{:04}", p.month.year()));
                if rekey != key {
                    columns.entry(rekey).or_insert(p.value);
                }
            } else {
                columns.insert(key, p.value);
            }
        }
    }

    for p in forecast.unwrap_or_default() {
        rows.entry(p.month.month())
            .or_default()
            .entry(SeriesLabel::Forecast)
            .or_insert(p.value);
    }

    rows.into_iter()
        .map(|(month, columns)| PivotRow {
            month_token: format!("{month:02}"),
            columns,
        })
        .collect()
}
