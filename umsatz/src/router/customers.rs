use umsatz_core::{Endpoint, SalesFilter, TableRecord, UmsatzError};

use crate::Umsatz;
use crate::router::invoices::TableSnapshot;

impl Umsatz {
    /// Fetch the customer roster for selection controls.
    ///
    /// The roster feeds a dropdown, not a data table; it is fetched once per
    /// view and is not part of any epoch race, so only the optional request
    /// deadline applies.
    ///
    /// # Errors
    /// `Unsupported` if the connector lacks the customer endpoints,
    /// `Endpoint` on transport failure, `RequestTimeout` past the configured
    /// deadline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), err)
    )]
    pub async fn customers(&self) -> Result<Vec<TableRecord>, UmsatzError> {
        let provider = self.customers_provider()?;
        self.with_deadline(Endpoint::Customers, provider.customers())
            .await
    }

    /// Fetch product purchase records for the customers selected in
    /// `filter.customer_ids` (empty means all customers).
    ///
    /// Each re-selection initiates a new epoch-tagged batch; a batch that
    /// resolves after a newer selection is discarded as `Superseded`. The
    /// returned rows feed the client-side query engine like any other table.
    ///
    /// # Errors
    /// Same taxonomy as [`Umsatz::dashboard`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), err)
    )]
    pub async fn customer_products(
        &self,
        filter: &SalesFilter,
    ) -> Result<TableSnapshot, UmsatzError> {
        let provider = self.customers_provider()?;

        let epoch = self.customer_epochs.begin();
        let records = self
            .with_deadline(Endpoint::CustomerProducts, provider.customer_products(filter))
            .await?;
        self.customer_epochs.guard(epoch)?;

        Ok(TableSnapshot { epoch, records })
    }
}
