//! The `SalesConnector` trait and endpoint role traits.
//!
//! This is the transport seam: an implementation wraps whatever HTTP client
//! and authentication scheme the deployment uses, and the orchestrator only
//! ever talks to these traits. A connector advertises each endpoint it can
//! serve by returning a usable trait object from the matching `as_*_provider`
//! accessor.

use async_trait::async_trait;

use umsatz_core::{ForecastMethod, RawAggregate, RawForecast, SalesFilter, TableRecord, UmsatzError};

/// Focused role trait for connectors that serve monthly sales aggregates.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch per-month sales aggregates for the given filter selection.
    async fn sales_summary(&self, filter: &SalesFilter) -> Result<Vec<RawAggregate>, UmsatzError>;

    /// Fetch per-month sales aggregates across every available year,
    /// unfiltered. Feeds the multi-year comparison pivot.
    async fn sales_summary_all_years(&self) -> Result<Vec<RawAggregate>, UmsatzError>;
}

/// Focused role trait for connectors that serve per-country sales totals.
#[async_trait]
pub trait TopCountriesProvider: Send + Sync {
    /// Fetch sales totals broken down by country.
    async fn top_countries(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError>;
}

/// Focused role trait for connectors that serve best-selling product totals.
#[async_trait]
pub trait TopProductsProvider: Send + Sync {
    /// Fetch sales totals for the best-selling products.
    async fn top_products(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError>;
}

/// Focused role trait for connectors that serve top-customer spend totals.
#[async_trait]
pub trait TopCustomersProvider: Send + Sync {
    /// Fetch spend totals for the highest-revenue customers.
    async fn top_customers(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError>;
}

/// Focused role trait for connectors that serve upstream-computed forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch forecast rows generated with the given method.
    async fn forecast(&self, method: ForecastMethod) -> Result<Vec<RawForecast>, UmsatzError>;
}

/// Focused role trait for connectors that serve the customer roster and
/// per-customer purchase records.
#[async_trait]
pub trait CustomersProvider: Send + Sync {
    /// Fetch the customer roster, for selection controls.
    async fn customers(&self) -> Result<Vec<TableRecord>, UmsatzError>;

    /// Fetch product purchase records for the customers selected in
    /// `filter.customer_ids`; an empty selection means all customers.
    async fn customer_products(
        &self,
        filter: &SalesFilter,
    ) -> Result<Vec<TableRecord>, UmsatzError>;
}

/// Focused role trait for connectors that serve row-level invoice data.
#[async_trait]
pub trait InvoicesProvider: Send + Sync {
    /// Fetch row-level invoice records for the data table view.
    async fn invoices(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError>;
}

/// Main connector trait implemented by transport crates. Exposes endpoint
/// capability discovery.
pub trait SalesConnector: Send + Sync {
    /// A stable identifier for diagnostics (e.g. "umsatz-http", "umsatz-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise the summary endpoints by returning a usable trait object
    /// reference when supported.
    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        None
    }

    /// If implemented, returns a trait object for the top-countries endpoint.
    fn as_top_countries_provider(&self) -> Option<&dyn TopCountriesProvider> {
        None
    }

    /// If implemented, returns a trait object for the top-products endpoint.
    fn as_top_products_provider(&self) -> Option<&dyn TopProductsProvider> {
        None
    }

    /// If implemented, returns a trait object for the top-customers endpoint.
    fn as_top_customers_provider(&self) -> Option<&dyn TopCustomersProvider> {
        None
    }

    /// If implemented, returns a trait object for the forecast endpoint.
    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        None
    }

    /// If implemented, returns a trait object for the customer endpoints.
    fn as_customers_provider(&self) -> Option<&dyn CustomersProvider> {
        None
    }

    /// If implemented, returns a trait object for the invoices endpoint.
    fn as_invoices_provider(&self) -> Option<&dyn InvoicesProvider> {
        None
    }
}
