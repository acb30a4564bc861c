use serde_json::json;
use umsatz_core::{ForecastMethod, RawForecast};

/// Forecast rows for the months after the last historical point, ISO-keyed
/// and tagged with the requested method.
pub fn forecast(method: ForecastMethod) -> Vec<RawForecast> {
    vec![
        row("2025-04", json!("14.900,00"), method),
        row("2025-05", json!(15420.5), method),
        row("2025-06", json!("15.980,25"), method),
    ]
}

fn row(month: &str, amount: serde_json::Value, method: ForecastMethod) -> RawForecast {
    RawForecast {
        forecast_month: month.to_owned(),
        amount,
        method: Some(method.as_str().to_owned()),
    }
}
