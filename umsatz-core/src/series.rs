//! Chronological series construction from raw aggregate payloads.

use crate::UmsatzError;
use crate::normalize::{parse_iso_month, parse_locale_amount};
use crate::types::{ForecastMethod, ForecastPoint, NormalizedPoint, RawAggregate, RawForecast};

/// A normalized series plus the diagnostics accumulated while building it.
///
/// Records with unplaceable period keys are dropped rather than defaulted;
/// each drop is reported as a non-fatal warning so callers can surface it
/// without aborting the whole series.
#[derive(Debug, Default)]
pub struct SeriesReport {
    /// Points sorted ascending by calendar order. Duplicate months are kept
    /// in input order; resolving them (sum vs. last-wins) is a caller concern.
    pub points: Vec<NormalizedPoint>,
    /// One warning per dropped record, carrying the offending period key.
    pub warnings: Vec<UmsatzError>,
}

impl SeriesReport {
    /// Number of records dropped during normalization.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.warnings.len()
    }
}

/// A normalized forecast series plus drop diagnostics, mirroring
/// [`SeriesReport`].
#[derive(Debug, Default)]
pub struct ForecastReport {
    /// Forecast points sorted ascending by calendar order.
    pub points: Vec<ForecastPoint>,
    /// One warning per dropped record.
    pub warnings: Vec<UmsatzError>,
}

impl ForecastReport {
    /// Number of records dropped during normalization.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.warnings.len()
    }
}

/// Normalize raw aggregates into an ascending, calendar-ordered series.
///
/// Each record is normalized independently: the amount fail-open via
/// [`parse_locale_amount`], the period key fail-loud via
/// [`crate::normalize::parse_compact_month`]. Records whose period key fails
/// to parse are dropped and diagnosed. The sort is stable and compares the
/// integer pair `(year, month)`, never the raw `MM.YYYY` string (which would
/// order months before years).
#[must_use]
pub fn build_series(raw: &[RawAggregate]) -> SeriesReport {
    let mut report = SeriesReport::default();
    for rec in raw {
        match crate::normalize::parse_compact_month(&rec.period_key) {
            Ok(month) => report.points.push(NormalizedPoint {
                month,
                value: parse_locale_amount(&rec.amount),
            }),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(period_key = %rec.period_key, "dropping record with unplaceable period key");
                report.warnings.push(e.into());
            }
        }
    }
    report.points.sort_by_key(|p| p.month);
    report
}

/// Normalize raw forecast rows into an ascending forecast series.
///
/// Same drop-and-diagnose policy as [`build_series`], over the ISO month
/// keys the forecast endpoint emits. Method labels the service reports are
/// parsed leniently; unknown or missing labels fall back to
/// `default_method`.
#[must_use]
pub fn build_forecast_series(raw: &[RawForecast], default_method: ForecastMethod) -> ForecastReport {
    let mut report = ForecastReport::default();
    for rec in raw {
        match parse_iso_month(&rec.forecast_month) {
            Ok(month) => {
                let method = rec
                    .method
                    .as_deref()
                    .and_then(ForecastMethod::parse)
                    .unwrap_or(default_method);
                report.points.push(ForecastPoint {
                    month,
                    value: parse_locale_amount(&rec.amount),
                    method,
                });
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(forecast_month = %rec.forecast_month, "dropping forecast row with unplaceable month");
                report.warnings.push(e.into());
            }
        }
    }
    report.points.sort_by_key(|p| p.month);
    report
}
