use umsatz_core::{Endpoint, SalesFilter, TableRecord, UmsatzError};

use crate::Umsatz;
use crate::epoch::FetchEpoch;

/// Row-level records for the data table view, ready for the client-side
/// filter/sort engine.
#[derive(Debug)]
pub struct TableSnapshot {
    /// Epoch of the batch that produced this snapshot.
    pub epoch: FetchEpoch,
    /// Raw open-schema rows; feed these to `umsatz_core::table::query`.
    pub records: Vec<TableRecord>,
}

impl Umsatz {
    /// Fetch row-level invoice records for the given server-side filter
    /// selection.
    ///
    /// Client-side narrowing (free text, per-column, sort) happens
    /// afterwards in the pure query engine; this call only owns the
    /// transport batch and its epoch.
    ///
    /// # Errors
    /// Same taxonomy as [`Umsatz::dashboard`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), err)
    )]
    pub async fn invoices(&self, filter: &SalesFilter) -> Result<TableSnapshot, UmsatzError> {
        let provider = self.invoices_provider()?;

        let epoch = self.invoice_epochs.begin();
        let records = self
            .with_deadline(Endpoint::Invoices, provider.invoices(filter))
            .await?;
        self.invoice_epochs.guard(epoch)?;

        Ok(TableSnapshot { epoch, records })
    }
}
