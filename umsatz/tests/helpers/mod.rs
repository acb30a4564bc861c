// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;

use umsatz::connector::{
    SalesConnector, SummaryProvider, TopCountriesProvider, TopCustomersProvider,
    TopProductsProvider,
};
use umsatz_core::{RawAggregate, SalesFilter, TableRecord, UmsatzError};

/// Connector that advertises no endpoints at all.
pub struct NoopConnector;

impl SalesConnector for NoopConnector {
    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Connector whose summary payload carries records with unplaceable period
/// keys, to exercise the drop-and-diagnose path end to end.
pub struct DirtySummaryConnector;

impl SalesConnector for DirtySummaryConnector {
    fn name(&self) -> &'static str {
        "dirty-summary"
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self)
    }
    fn as_top_countries_provider(&self) -> Option<&dyn TopCountriesProvider> {
        Some(self)
    }
    fn as_top_products_provider(&self) -> Option<&dyn TopProductsProvider> {
        Some(self)
    }
    fn as_top_customers_provider(&self) -> Option<&dyn TopCustomersProvider> {
        Some(self)
    }
}

#[async_trait]
impl SummaryProvider for DirtySummaryConnector {
    async fn sales_summary(&self, _filter: &SalesFilter) -> Result<Vec<RawAggregate>, UmsatzError> {
        Ok(vec![
            RawAggregate {
                period_key: "02.2025".to_owned(),
                amount: json!("2.000,00 €"),
                dimension: None,
            },
            RawAggregate {
                period_key: "2025-01".to_owned(), // ISO form does not belong here
                amount: json!("1.000,00 €"),
                dimension: None,
            },
            RawAggregate {
                period_key: "01.2025".to_owned(),
                amount: json!("broken"),
                dimension: None,
            },
        ])
    }

    async fn sales_summary_all_years(&self) -> Result<Vec<RawAggregate>, UmsatzError> {
        self.sales_summary(&SalesFilter::default()).await
    }
}

#[async_trait]
impl TopCountriesProvider for DirtySummaryConnector {
    async fn top_countries(&self, _filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Ok(vec![])
    }
}

#[async_trait]
impl TopProductsProvider for DirtySummaryConnector {
    async fn top_products(&self, _filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Ok(vec![])
    }
}

#[async_trait]
impl TopCustomersProvider for DirtySummaryConnector {
    async fn top_customers(&self, _filter: &SalesFilter) -> Result<Vec<TableRecord>, UmsatzError> {
        Ok(vec![])
    }
}
