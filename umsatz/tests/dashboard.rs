mod helpers;

use std::sync::Arc;
use std::time::Duration;

use umsatz::{Umsatz, UmsatzError};
use umsatz_core::SalesFilter;
use umsatz_mock::MockConnector;

fn orchestrator() -> Umsatz {
    Umsatz::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn dashboard_batch_joins_and_normalizes_everything() {
    let u = orchestrator();
    let snap = u.dashboard(&SalesFilter::default()).await.unwrap();

    // Series is ascending and locale amounts were parsed.
    let months: Vec<String> = snap.sales_trend.iter().map(|p| p.month.to_string()).collect();
    assert_eq!(months, vec!["2025-01", "2025-02", "2025-03"]);
    assert_eq!(snap.sales_trend[0].value, 12_500.0);
    assert_eq!(snap.sales_trend[1].value, 14_250.75);

    assert!(!snap.top_countries.is_empty());
    assert!(!snap.top_products.is_empty());
    assert!(!snap.top_customers.is_empty());
    assert!(snap.warnings.is_empty());
}

#[tokio::test]
async fn server_side_filter_is_forwarded() {
    let u = orchestrator();
    let filter = SalesFilter {
        year: Some("2024".to_owned()),
        ..SalesFilter::default()
    };
    let snap = u.dashboard(&filter).await.unwrap();
    assert!(snap.sales_trend.iter().all(|p| p.month.year() == 2024));
}

#[tokio::test]
async fn one_failing_endpoint_fails_the_whole_batch() {
    let u = orchestrator();
    let filter = SalesFilter {
        country: Some("FAIL".to_owned()),
        ..SalesFilter::default()
    };
    let err = u.dashboard(&filter).await.unwrap_err();
    assert!(matches!(err, UmsatzError::Endpoint { .. }), "got {err:?}");
}

#[tokio::test]
async fn deadline_elapsing_maps_to_request_timeout() {
    let u = Umsatz::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .request_timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    let filter = SalesFilter {
        country: Some("SLOW".to_owned()),
        ..SalesFilter::default()
    };
    let err = u.dashboard(&filter).await.unwrap_err();
    assert!(
        matches!(err, UmsatzError::RequestTimeout { .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn missing_capability_is_reported_as_unsupported() {
    let u = Umsatz::builder()
        .with_connector(Arc::new(helpers::NoopConnector))
        .build()
        .unwrap();
    let err = u.dashboard(&SalesFilter::default()).await.unwrap_err();
    assert!(matches!(err, UmsatzError::Unsupported { .. }), "got {err:?}");
}

#[tokio::test]
async fn droppable_records_surface_as_warnings_not_errors() {
    let u = Umsatz::builder()
        .with_connector(Arc::new(helpers::DirtySummaryConnector))
        .build()
        .unwrap();
    let snap = u.dashboard(&SalesFilter::default()).await.unwrap();

    // The unplaceable record was dropped and diagnosed; the malformed
    // amount survived as 0.0.
    assert_eq!(snap.warnings.len(), 1);
    assert_eq!(snap.sales_trend.len(), 2);
    assert_eq!(snap.sales_trend[0].month.to_string(), "2025-01");
    assert_eq!(snap.sales_trend[0].value, 0.0);
    assert_eq!(snap.sales_trend[1].value, 2000.0);
}

#[test]
fn builder_without_connector_is_rejected() {
    let err = Umsatz::builder().build().err().unwrap();
    assert!(matches!(err, UmsatzError::InvalidArg(_)));
}
