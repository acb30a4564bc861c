use umsatz_core::{
    Endpoint, ForecastMethod, PivotRow, UmsatzError, build_forecast_series, build_series,
    group_by_year, merge_pivot,
};

use crate::Umsatz;
use crate::epoch::FetchEpoch;

/// The multi-year comparison table plus the forecast overlay, pivoted and
/// ready for a single chart.
#[derive(Debug)]
pub struct ForecastSnapshot {
    /// Epoch of the batch that produced this snapshot.
    pub epoch: FetchEpoch,
    /// Method the forecast column was generated with.
    pub method: ForecastMethod,
    /// One row per month-of-year present in any input, ascending.
    pub rows: Vec<PivotRow>,
    /// Non-fatal diagnostics from both the historical and forecast series.
    pub warnings: Vec<UmsatzError>,
}

impl Umsatz {
    /// Fetch all-years history plus the forecast series and pivot them into
    /// one month-of-year comparison table.
    ///
    /// Both requests are joined before merging; the forecast always lands in
    /// its own column and never overwrites a historical year. Unplaceable
    /// records on either side are dropped and diagnosed, not fatal.
    ///
    /// # Errors
    /// Same taxonomy as [`Umsatz::dashboard`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), err)
    )]
    pub async fn forecast_overlay(
        &self,
        method: ForecastMethod,
    ) -> Result<ForecastSnapshot, UmsatzError> {
        let summary = self.summary_provider()?;
        let forecast = self.forecast_provider()?;

        let epoch = self.forecast_epochs.begin();
        let batch = async {
            futures::try_join!(summary.sales_summary_all_years(), forecast.forecast(method))
        };
        let (all_years, raw_forecast) = self.with_deadline(Endpoint::Forecast, batch).await?;
        self.forecast_epochs.guard(epoch)?;

        let history = build_series(&all_years);
        let fc = build_forecast_series(&raw_forecast, method);
        let mut warnings = history.warnings;
        warnings.extend(fc.warnings);

        let rows = merge_pivot(&group_by_year(&history.points), Some(&fc.points));
        Ok(ForecastSnapshot {
            epoch,
            method,
            rows,
            warnings,
        })
    }

    /// [`forecast_overlay`](Self::forecast_overlay) with the configured
    /// default method.
    ///
    /// # Errors
    /// Same taxonomy as [`Umsatz::dashboard`].
    pub async fn forecast_overlay_default(&self) -> Result<ForecastSnapshot, UmsatzError> {
        self.forecast_overlay(self.cfg.default_forecast_method).await
    }
}
