//! Mock sales connector for CI-safe tests and examples.
//!
//! Serves deterministic data from static fixtures. Two magic country values
//! steer failure modes: `"FAIL"` forces a connector-tagged endpoint error
//! and `"SLOW"` injects latency, which the orchestrator tests use to
//! exercise deadline and epoch-supersession behavior.

use async_trait::async_trait;

use umsatz::connector::{
    CustomersProvider, ForecastProvider, InvoicesProvider, SalesConnector, SummaryProvider,
    TopCountriesProvider, TopCustomersProvider, TopProductsProvider,
};
use umsatz_core::{
    Endpoint, ForecastMethod, RawAggregate, RawForecast, SalesFilter, TableRecord, UmsatzError,
};

mod fixtures;

/// Simulated latency for `"SLOW"` requests.
const SLOW_DELAY: std::time::Duration = std::time::Duration::from_millis(200);

/// Mock connector providing deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_slow(filter: &SalesFilter, endpoint: Endpoint) -> Result<(), UmsatzError> {
        match filter.country.as_deref() {
            Some("FAIL") => Err(UmsatzError::endpoint(
                endpoint,
                "umsatz-mock: forced failure",
            )),
            Some("SLOW") => {
                tokio::time::sleep(SLOW_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl SalesConnector for MockConnector {
    fn name(&self) -> &'static str {
        "umsatz-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self as &dyn SummaryProvider)
    }
    fn as_top_countries_provider(&self) -> Option<&dyn TopCountriesProvider> {
        Some(self as &dyn TopCountriesProvider)
    }
    fn as_top_products_provider(&self) -> Option<&dyn TopProductsProvider> {
        Some(self as &dyn TopProductsProvider)
    }
    fn as_top_customers_provider(&self) -> Option<&dyn TopCustomersProvider> {
        Some(self as &dyn TopCustomersProvider)
    }
    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        Some(self as &dyn ForecastProvider)
    }
    fn as_customers_provider(&self) -> Option<&dyn CustomersProvider> {
        Some(self as &dyn CustomersProvider)
    }
    fn as_invoices_provider(&self) -> Option<&dyn InvoicesProvider> {
        Some(self as &dyn InvoicesProvider)
    }
}

#[async_trait]
impl SummaryProvider for MockConnector {
    async fn sales_summary(&self, filter: &SalesFilter) -> Result<Vec<RawAggregate>, UmsatzError> {
        Self::maybe_fail_or_slow(filter, Endpoint::Summary).await?;
        Ok(fixtures::summary::summary(filter))
    }

    async fn sales_summary_all_years(&self) -> Result<Vec<RawAggregate>, UmsatzError> {
        Ok(fixtures::summary::all_years())
    }
}

#[async_trait]
impl TopCountriesProvider for MockConnector {
    async fn top_countries(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Self::maybe_fail_or_slow(filter, Endpoint::TopCountries).await?;
        Ok(fixtures::tables::top_countries())
    }
}

#[async_trait]
impl TopProductsProvider for MockConnector {
    async fn top_products(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Self::maybe_fail_or_slow(filter, Endpoint::TopProducts).await?;
        Ok(fixtures::tables::top_products())
    }
}

#[async_trait]
impl TopCustomersProvider for MockConnector {
    async fn top_customers(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Self::maybe_fail_or_slow(filter, Endpoint::TopCustomers).await?;
        Ok(fixtures::tables::top_customers())
    }
}

#[async_trait]
impl ForecastProvider for MockConnector {
    async fn forecast(&self, method: ForecastMethod) -> Result<Vec<RawForecast>, UmsatzError> {
        Ok(fixtures::forecast::forecast(method))
    }
}

#[async_trait]
impl CustomersProvider for MockConnector {
    async fn customers(&self) -> Result<Vec<TableRecord>, UmsatzError> {
        Ok(fixtures::tables::customers())
    }

    async fn customer_products(
        &self,
        filter: &SalesFilter,
    ) -> Result<Vec<TableRecord>, UmsatzError> {
        Self::maybe_fail_or_slow(filter, Endpoint::CustomerProducts).await?;
        Ok(fixtures::tables::customer_products(&filter.customer_ids))
    }
}

#[async_trait]
impl InvoicesProvider for MockConnector {
    async fn invoices(&self, filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Self::maybe_fail_or_slow(filter, Endpoint::Invoices).await?;
        Ok(fixtures::tables::invoices())
    }
}
