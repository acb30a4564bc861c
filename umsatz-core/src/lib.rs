//! umsatz-core
//!
//! Core types and pure transforms shared across the umsatz ecosystem.
//!
//! - `types`: common data structures (raw payloads, canonical months, filters).
//! - `normalize`: locale-aware amount and period-key parsing.
//! - `series`: chronological series construction with drop diagnostics.
//! - `pivot`: multi-year/forecast pivot merging for comparison charts.
//! - `table`: the generic filter/sort/search engine for list views.
//!
//! Everything in this crate is synchronous, pure, and allocation-light: each
//! transform operates on its own input snapshot and never mutates it, so no
//! locking is required even when several views query concurrently. The
//! asynchronous fetch boundary lives in the `umsatz` orchestrator crate.
#![warn(missing_docs)]

/// Unified error type and the period-key parse error.
pub mod error;
/// Locale-aware parsing of amounts and period keys.
pub mod normalize;
/// Multi-year pivot merging for comparison charts.
pub mod pivot;
/// Chronological series construction from raw payloads.
pub mod series;
/// Generic tabular filter/sort/search engine.
pub mod table;
/// Shared data structures: raw payloads, canonical months, filters, config.
pub mod types;

pub use error::{ParseError, UmsatzError};
pub use normalize::{parse_amount_str, parse_compact_month, parse_iso_month, parse_locale_amount};
pub use pivot::{PivotRow, SeriesLabel, group_by_year, merge_pivot};
pub use series::{ForecastReport, SeriesReport, build_forecast_series, build_series};
pub use table::{FilterState, SortDirection, SortState, TableRecord, query};
pub use types::*;
