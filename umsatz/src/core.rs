use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use umsatz_core::{Endpoint, ForecastMethod, UmsatzConfig, UmsatzError};

use crate::connector::{
    CustomersProvider, ForecastProvider, InvoicesProvider, SalesConnector, SummaryProvider,
    TopCountriesProvider, TopCustomersProvider, TopProductsProvider,
};
use crate::epoch::EpochCounter;

/// Orchestrator that issues concurrent endpoint batches against the
/// registered connector and assembles normalized snapshots.
pub struct Umsatz {
    pub(crate) connector: Arc<dyn SalesConnector>,
    pub(crate) cfg: UmsatzConfig,
    // One counter per view family: a table refresh must not supersede an
    // in-flight chart batch.
    pub(crate) dashboard_epochs: EpochCounter,
    pub(crate) forecast_epochs: EpochCounter,
    pub(crate) invoice_epochs: EpochCounter,
    pub(crate) customer_epochs: EpochCounter,
}

/// Builder for constructing an `Umsatz` orchestrator with custom
/// configuration.
pub struct UmsatzBuilder {
    connector: Option<Arc<dyn SalesConnector>>,
    cfg: UmsatzConfig,
}

impl Default for UmsatzBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UmsatzBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior:
    /// - No connector is registered; you must provide one via
    ///   [`with_connector`](Self::with_connector) before `build()`.
    /// - No request deadline; batches wait as long as the transport does.
    /// - Forecast method defaults to the moving average.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: UmsatzConfig::default(),
        }
    }

    /// Register the transport connector.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn SalesConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Apply an overall deadline across each fetch batch fan-out.
    ///
    /// The deadline covers the whole batch, not individual endpoints: a
    /// batch that cannot complete in time resolves to `RequestTimeout` and
    /// is never partially applied.
    #[must_use]
    pub const fn request_timeout(mut self, deadline: Duration) -> Self {
        self.cfg.request_timeout = Some(deadline);
        self
    }

    /// Select the forecast method used when the caller does not pick one.
    #[must_use]
    pub const fn default_forecast_method(mut self, method: ForecastMethod) -> Self {
        self.cfg.default_forecast_method = method;
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered.
    pub fn build(self) -> Result<Umsatz, UmsatzError> {
        let connector = self
            .connector
            .ok_or_else(|| UmsatzError::InvalidArg("no connector registered".into()))?;
        Ok(Umsatz {
            connector,
            cfg: self.cfg,
            dashboard_epochs: EpochCounter::new(),
            forecast_epochs: EpochCounter::new(),
            invoice_epochs: EpochCounter::new(),
            customer_epochs: EpochCounter::new(),
        })
    }
}

impl Umsatz {
    /// Begin building an orchestrator.
    #[must_use]
    pub fn builder() -> UmsatzBuilder {
        UmsatzBuilder::new()
    }

    /// The registered connector's stable identifier.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    pub(crate) fn summary_provider(&self) -> Result<&dyn SummaryProvider, UmsatzError> {
        self.connector
            .as_summary_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::Summary))
    }

    pub(crate) fn top_countries_provider(&self) -> Result<&dyn TopCountriesProvider, UmsatzError> {
        self.connector
            .as_top_countries_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::TopCountries))
    }

    pub(crate) fn top_products_provider(&self) -> Result<&dyn TopProductsProvider, UmsatzError> {
        self.connector
            .as_top_products_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::TopProducts))
    }

    pub(crate) fn top_customers_provider(&self) -> Result<&dyn TopCustomersProvider, UmsatzError> {
        self.connector
            .as_top_customers_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::TopCustomers))
    }

    pub(crate) fn forecast_provider(&self) -> Result<&dyn ForecastProvider, UmsatzError> {
        self.connector
            .as_forecast_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::Forecast))
    }

    pub(crate) fn customers_provider(&self) -> Result<&dyn CustomersProvider, UmsatzError> {
        self.connector
            .as_customers_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::Customers))
    }

    pub(crate) fn invoices_provider(&self) -> Result<&dyn InvoicesProvider, UmsatzError> {
        self.connector
            .as_invoices_provider()
            .ok_or(UmsatzError::unsupported(Endpoint::Invoices))
    }

    /// Apply the optional request-level deadline across a batch future.
    pub(crate) async fn with_deadline<F, T>(
        &self,
        endpoint: Endpoint,
        batch: F,
    ) -> Result<T, UmsatzError>
    where
        F: Future<Output = Result<T, UmsatzError>>,
    {
        match self.cfg.request_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, batch).await {
                Ok(res) => res,
                Err(_) => Err(UmsatzError::request_timeout(endpoint)),
            },
            None => batch.await,
        }
    }
}
