pub mod forecast;
pub mod summary;
pub mod tables;
