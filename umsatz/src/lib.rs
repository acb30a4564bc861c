//! Umsatz orchestrates the fetch side of a sales-analytics dashboard.
//!
//! Overview
//! - Talks to the remote API through the [`connector::SalesConnector`] seam;
//!   the transport (HTTP client, auth header injection) lives behind it.
//! - Fans out the endpoint requests a view needs concurrently and joins all
//!   of them before handing anything to the normalization pipeline — a
//!   partial batch is never applied.
//! - Tags every batch with a monotonically increasing epoch and discards any
//!   batch that resolves after a newer one was initiated, so a slow earlier
//!   request can never clobber fresher results.
//! - Normalizes payloads through `umsatz-core` (locale parsing, series
//!   ordering, pivot merging) and exposes display-ready snapshots.
//!
//! Key behaviors and trade-offs
//! - Transport failures fail the whole batch: the presentation layer falls
//!   back to an empty-dataset display instead of rendering mismatched series.
//! - Per-record problems never fail a batch: malformed amounts coerce to
//!   `0.0`, unplaceable period keys drop the record and surface as warnings
//!   on the snapshot.
//! - Cancellation is best-effort: superseded batches are suppressed, not
//!   aborted at the transport.
//!
//! Examples
//! Building an orchestrator and fetching a dashboard batch:
//! ```rust,ignore
//! use std::sync::Arc;
//! use umsatz::Umsatz;
//! use umsatz_core::SalesFilter;
//!
//! let umsatz = Umsatz::builder()
//!     .with_connector(Arc::new(HttpConnector::new(base_url, token)))
//!     .request_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let snapshot = umsatz.dashboard(&SalesFilter::default()).await?;
//! render_line_chart(&snapshot.sales_trend);
//! ```
//!
//! Overlaying yearly history with a forecast line:
//! ```rust,ignore
//! use umsatz_core::ForecastMethod;
//!
//! let overlay = umsatz.forecast_overlay(ForecastMethod::Arima).await?;
//! render_comparison_chart(&overlay.rows);
//! ```
//!
//! Querying fetched table rows entirely client-side:
//! ```rust,ignore
//! use umsatz_core::{query, FilterState, SortState};
//!
//! let table = umsatz.invoices(&filter).await?;
//! let visible = query(&table.records, &filter_state, &sort_state);
//! ```
#![warn(missing_docs)]

/// The `SalesConnector` trait and endpoint role traits.
pub mod connector;
mod core;
/// Epoch tags for stale-batch suppression.
pub mod epoch;
mod router;

pub use connector::SalesConnector;
pub use core::{Umsatz, UmsatzBuilder};
pub use epoch::FetchEpoch;
pub use router::dashboard::DashboardSnapshot;
pub use router::forecast::ForecastSnapshot;
pub use router::invoices::TableSnapshot;

pub use umsatz_core::{UmsatzConfig, UmsatzError};
