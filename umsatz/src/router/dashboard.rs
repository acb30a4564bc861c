use umsatz_core::{Endpoint, NormalizedPoint, SalesFilter, TableRecord, UmsatzError, build_series};

use crate::Umsatz;
use crate::epoch::FetchEpoch;

/// Everything one dashboard render needs, normalized and ready for display.
///
/// The presentation layer must not re-parse any value in here; locale
/// display formatting is applied separately on top.
#[derive(Debug)]
pub struct DashboardSnapshot {
    /// Epoch of the batch that produced this snapshot.
    pub epoch: FetchEpoch,
    /// Monthly sales series, ascending by calendar order.
    pub sales_trend: Vec<NormalizedPoint>,
    /// Per-country sales totals for the breakdown chart.
    pub top_countries: Vec<TableRecord>,
    /// Best-selling product totals.
    pub top_products: Vec<TableRecord>,
    /// Highest-revenue customer totals.
    pub top_customers: Vec<TableRecord>,
    /// Non-fatal diagnostics (dropped records) accumulated while
    /// normalizing. Surface as a warning, not an error state.
    pub warnings: Vec<UmsatzError>,
}

impl Umsatz {
    /// Fetch and normalize everything the dashboard view renders.
    ///
    /// Behavior:
    /// - Fans out the summary, top-countries, top-products, and
    ///   top-customers requests concurrently and joins all of them before
    ///   normalizing; a partial batch is never fed onward.
    /// - Any endpoint failure fails the whole batch with a connector-tagged
    ///   error; callers fall back to an empty-dataset display.
    /// - The batch is epoch-tagged at initiation. If another dashboard batch
    ///   is initiated before this one resolves, this one resolves to
    ///   `Superseded` and must be discarded.
    ///
    /// # Errors
    /// `Unsupported` if the connector lacks one of the endpoints,
    /// `Endpoint` on transport failure, `RequestTimeout` past the configured
    /// deadline, `Superseded` when a newer batch has been initiated.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), err)
    )]
    pub async fn dashboard(&self, filter: &SalesFilter) -> Result<DashboardSnapshot, UmsatzError> {
        let summary = self.summary_provider()?;
        let countries = self.top_countries_provider()?;
        let products = self.top_products_provider()?;
        let customers = self.top_customers_provider()?;

        let epoch = self.dashboard_epochs.begin();
        let batch = async {
            futures::try_join!(
                summary.sales_summary(filter),
                countries.top_countries(filter),
                products.top_products(filter),
                customers.top_customers(filter),
            )
        };
        let (raw_summary, top_countries, top_products, top_customers) =
            self.with_deadline(Endpoint::Summary, batch).await?;
        self.dashboard_epochs.guard(epoch)?;

        let series = build_series(&raw_summary);
        #[cfg(feature = "tracing")]
        if series.dropped() > 0 {
            tracing::warn!(dropped = series.dropped(), "dashboard batch dropped records");
        }

        Ok(DashboardSnapshot {
            epoch,
            sales_trend: series.points,
            top_countries,
            top_products,
            top_customers,
            warnings: series.warnings,
        })
    }
}
