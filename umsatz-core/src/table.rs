//! Generic client-side filter/sort/search over heterogeneous record sets.
//!
//! The engine assumes no schema beyond "has named fields": records are open
//! JSON maps, and filtering/sorting work generically over stringified cells.
//! Everything here is pure and deterministic; the caller owns the filter and
//! sort state and passes fresh immutable values into [`query`] on every
//! render cycle.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a generic list (invoices, customers, products).
pub type TableRecord = serde_json::Map<String, Value>;

/// Free-text and per-column filter state, created empty and mutated by the
/// caller on every keystroke or selection. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Substring matched case-insensitively against every field.
    #[serde(default)]
    pub global_query: String,
    /// Per-column substrings, AND'd together. Empty values are ignored.
    #[serde(default)]
    pub column_filters: BTreeMap<String, String>,
}

/// Sort direction for [`SortState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order. Flips the comparator's sign, not the final array,
    /// so stability is preserved.
    Desc,
}

/// Sort key and direction. An unset key preserves post-filter input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Column to sort by, if any.
    #[serde(default)]
    pub key: Option<String>,
    /// Direction applied to the comparator.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click semantics: clicking the active ascending column flips it
    /// to descending; clicking any other column sorts it ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) && self.direction == SortDirection::Asc {
            self.direction = SortDirection::Desc;
        } else {
            self.key = Some(key.to_owned());
            self.direction = SortDirection::Asc;
        }
    }
}

/// Apply free-text and per-column filters plus a stable sort to a record
/// set. Never mutates `records`; deterministic given identical inputs.
///
/// Filtering is two-stage: a record survives only if every non-empty column
/// filter matches its column (case-insensitive substring over the
/// stringified cell), and then — if the global query is non-empty — at least
/// one of its fields matches the global query.
///
/// Sorting compares numerically when both cells are JSON numbers and as
/// case-sensitive strings otherwise. The sort is stable; equal keys keep
/// their relative pre-sort order, which callers rely on as a secondary
/// tie-break. Missing or null cells stringify to the empty string and sort
/// lexicographically smallest.
#[must_use]
pub fn query(records: &[TableRecord], filter: &FilterState, sort: &SortState) -> Vec<TableRecord> {
    let mut out: Vec<TableRecord> = records
        .iter()
        .filter(|r| matches_filter(r, filter))
        .cloned()
        .collect();

    if let Some(key) = sort.key.as_deref() {
        out.sort_by(|a, b| {
            let ord = compare_cells(a.get(key), b.get(key));
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    out
}

fn matches_filter(record: &TableRecord, filter: &FilterState) -> bool {
    for (column, needle) in &filter.column_filters {
        if needle.is_empty() {
            continue;
        }
        let hay = cell_text(record.get(column)).to_lowercase();
        if !hay.contains(&needle.to_lowercase()) {
            return false;
        }
    }

    if filter.global_query.is_empty() {
        return true;
    }
    let needle = filter.global_query.to_lowercase();
    record
        .values()
        .any(|v| cell_text(Some(v)).to_lowercase().contains(&needle))
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or(0.0)
            .total_cmp(&y.as_f64().unwrap_or(0.0)),
        _ => cell_text(a).cmp(&cell_text(b)),
    }
}

/// Stringify a cell for filtering and comparison. Strings pass through
/// unquoted; missing and null cells become the empty string.
fn cell_text(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
