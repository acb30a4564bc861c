pub mod customers;
pub mod dashboard;
pub mod forecast;
pub mod invoices;
