use serde_json::json;
use umsatz_core::TableRecord;

/// Per-country sales totals for the breakdown chart.
pub fn top_countries() -> Vec<TableRecord> {
    rows(vec![
        json!({"country": "Germany", "total_sales": "45.200,00 €"}),
        json!({"country": "France", "total_sales": "21.150,50 €"}),
        json!({"country": "Netherlands", "total_sales": "12.430,00 €"}),
    ])
}

/// Best-selling products.
pub fn top_products() -> Vec<TableRecord> {
    rows(vec![
        json!({"product_name": "Espresso Machine", "product_category_name": "Kitchen", "total_sales": "18.900,00 €"}),
        json!({"product_name": "Office Chair", "product_category_name": "Furniture", "total_sales": "15.250,00 €"}),
        json!({"product_name": "Desk Lamp", "product_category_name": "Lighting", "total_sales": "7.980,50 €"}),
    ])
}

/// Highest-revenue customers.
pub fn top_customers() -> Vec<TableRecord> {
    rows(vec![
        json!({"customer_name": "Müller GmbH", "total_spent": "22.340,00 €", "total_orders": 41}),
        json!({"customer_name": "Schmidt AG", "total_spent": "19.870,25 €", "total_orders": 35}),
        json!({"customer_name": "Keller & Co", "total_spent": "11.410,00 €", "total_orders": 18}),
    ])
}

/// The customer roster for selection controls.
pub fn customers() -> Vec<TableRecord> {
    rows(vec![
        json!({"customer_id": "C-001", "customer_name": "Müller GmbH", "country": "Germany"}),
        json!({"customer_id": "C-002", "customer_name": "Schmidt AG", "country": "Germany"}),
        json!({"customer_id": "C-003", "customer_name": "Dubois SARL", "country": "France"}),
    ])
}

/// Product purchase records for the selected customers; an empty selection
/// returns every record.
pub fn customer_products(customer_ids: &[String]) -> Vec<TableRecord> {
    let all = rows(vec![
        json!({"customer_id": "C-001", "product_name": "Espresso Machine", "quantity": 3, "total_spent": "2.940,00 €"}),
        json!({"customer_id": "C-001", "product_name": "Desk Lamp", "quantity": 12, "total_spent": "1.130,40 €"}),
        json!({"customer_id": "C-002", "product_name": "Office Chair", "quantity": 8, "total_spent": "3.560,00 €"}),
        json!({"customer_id": "C-003", "product_name": "Espresso Machine", "quantity": 1, "total_spent": "980,00 €"}),
    ]);
    if customer_ids.is_empty() {
        return all;
    }
    all.into_iter()
        .filter(|r| {
            r.get("customer_id")
                .and_then(serde_json::Value::as_str)
                .is_some_and(|id| customer_ids.iter().any(|want| want == id))
        })
        .collect()
}

/// Row-level invoice records for the data table view.
pub fn invoices() -> Vec<TableRecord> {
    rows(vec![
        json!({"invoice_id": 1001, "customer_name": "Müller GmbH", "country": "Germany", "amount": 1250.0, "invoice_date": "2025-01-14"}),
        json!({"invoice_id": 1002, "customer_name": "Schmidt AG", "country": "Germany", "amount": 830.5, "invoice_date": "2025-01-20"}),
        json!({"invoice_id": 1003, "customer_name": "Dubois SARL", "country": "France", "amount": 2140.0, "invoice_date": "2025-02-02"}),
        json!({"invoice_id": 1004, "customer_name": "Keller & Co", "country": "Germany", "amount": 830.5, "invoice_date": "2025-02-11"}),
    ])
}

fn rows(values: Vec<serde_json::Value>) -> Vec<TableRecord> {
    values
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}
