//! Payload and value types shared across the umsatz workspace.

use core::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// High-level endpoint labels for routing, errors, and telemetry.
///
/// These map one-to-one with the remote API surface and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Endpoint {
    /// Per-month sales aggregates for the selected filter window.
    Summary,
    /// Per-month sales aggregates across every available year.
    SummaryAllYears,
    /// Sales totals broken down by country.
    TopCountries,
    /// Sales totals for the best-selling products.
    TopProducts,
    /// Spend totals for the highest-revenue customers.
    TopCustomers,
    /// Upstream-computed forecast points for the coming months.
    Forecast,
    /// Row-level invoice records for the data table view.
    Invoices,
    /// The customer roster, for selection controls.
    Customers,
    /// Per-customer product purchase records.
    CustomerProducts,
}

impl Endpoint {
    /// Stable string label, matching the remote route naming.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "sales/summary",
            Self::SummaryAllYears => "sales/summary/all-years",
            Self::TopCountries => "sales/top-countries",
            Self::TopProducts => "products/top",
            Self::TopCustomers => "sales/top-customers",
            Self::Forecast => "sales/forecast",
            Self::Invoices => "invoices",
            Self::Customers => "customers",
            Self::CustomerProducts => "customers/products",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar month in canonical `YYYY-MM` form, totally ordered by
/// calendar time.
///
/// The rendered form is always exactly 7 characters with a zero-padded
/// month; construction validates `month` in 1–12 and a 4-digit year, so an
/// instance can never misfile a point on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalMonth {
    year: i32,
    month: u8,
}

impl CanonicalMonth {
    /// Build a canonical month from components.
    ///
    /// # Errors
    /// Returns `ParseError` if `month` is outside 1–12 or `year` is not a
    /// 4-digit positive integer.
    pub fn new(year: i32, month: u8) -> Result<Self, ParseError> {
        if !(1..=12).contains(&month) || !(1000..=9999).contains(&year) {
            return Err(ParseError::new(format!("{month:02}.{year}")));
        }
        Ok(Self { year, month })
    }

    /// Calendar year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Calendar month component, 1–12.
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Zero-padded month-of-year token, `"01"`..`"12"`.
    #[must_use]
    pub fn month_token(self) -> String {
        format!("{:02}", self.month)
    }

    /// The compact `MM.YYYY` period-key form used by the remote API.
    /// Round-trips with [`crate::normalize::parse_compact_month`].
    #[must_use]
    pub fn period_key(self) -> String {
        format!("{:02}.{:04}", self.month, self.year)
    }
}

impl fmt::Display for CanonicalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for CanonicalMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::normalize::parse_iso_month(s)
    }
}

impl TryFrom<String> for CanonicalMonth {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CanonicalMonth> for String {
    fn from(m: CanonicalMonth) -> Self {
        m.to_string()
    }
}

/// One aggregate record as returned by the remote summary endpoints.
///
/// Immutable once received. `amount` is deliberately loose: the remote
/// service emits either a locale-formatted currency string or a plain JSON
/// number depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAggregate {
    /// Compact period key in `MM.YYYY` form.
    #[serde(rename = "invoice_year_month")]
    pub period_key: String,
    /// Locale-formatted currency string or plain number.
    #[serde(rename = "total_sales")]
    pub amount: serde_json::Value,
    /// Optional dimension label (country, product, customer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
}

/// One forecast record as returned by the forecast endpoint.
///
/// Unlike the summary endpoints, the forecast service keys its rows by the
/// ISO `YYYY-MM` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecast {
    /// ISO month key in `YYYY-MM` form.
    #[serde(rename = "forecasted_month")]
    pub forecast_month: String,
    /// Locale-formatted currency string or plain number.
    #[serde(rename = "forecasted_sales")]
    pub amount: serde_json::Value,
    /// Method label reported by the forecast service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// A normalized chart point: canonical month plus a finite value.
///
/// `value` is never NaN; amount parsing is fail-open and coerces malformed
/// cells to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Canonical month the value belongs to.
    pub month: CanonicalMonth,
    /// Finite sales total for that month.
    pub value: f64,
}

/// Forecast generation method selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ForecastMethod {
    /// Simple moving average over trailing months.
    #[default]
    MovingAverage,
    /// Ordinary least-squares trend line.
    LinearRegression,
    /// Exponentially weighted smoothing.
    ExponentialSmoothing,
    /// ARIMA model fitted upstream.
    Arima,
    /// LSTM model served upstream.
    Lstm,
}

impl ForecastMethod {
    /// Stable query-string label, matching the remote API parameter values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MovingAverage => "moving_average",
            Self::LinearRegression => "linear_regression",
            Self::ExponentialSmoothing => "exponential_smoothing",
            Self::Arima => "arima",
            Self::Lstm => "lstm",
        }
    }

    /// Parse a method label reported by the forecast service.
    /// Unknown labels yield `None`; callers fall back to their default.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "moving_average" => Some(Self::MovingAverage),
            "linear_regression" => Some(Self::LinearRegression),
            "exponential_smoothing" => Some(Self::ExponentialSmoothing),
            "arima" => Some(Self::Arima),
            "lstm" => Some(Self::Lstm),
            _ => None,
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized forecast point, always tagged with the generating method.
///
/// Kept distinct from [`NormalizedPoint`] so forecast values can never be
/// confused with historical ones downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Canonical month the forecast targets.
    pub month: CanonicalMonth,
    /// Finite forecast value for that month.
    pub value: f64,
    /// Method that generated the value.
    pub method: ForecastMethod,
}

/// The filter selection forwarded verbatim to every endpoint in a batch.
///
/// All fields optional; an empty selection means "everything". The engine
/// never interprets these server-side filters itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesFilter {
    /// Restrict to a single invoice year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Restrict to a single product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Restrict to a single country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Restrict to a set of customers. Empty means all customers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_ids: Vec<String>,
    /// Inclusive lower bound on invoice date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on invoice date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Orchestrator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UmsatzConfig {
    /// Optional overall deadline applied across each fetch batch fan-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
    /// Forecast method used when the caller does not pick one explicitly.
    #[serde(default)]
    pub default_forecast_method: ForecastMethod,
}
