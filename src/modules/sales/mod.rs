pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ArticleCategory, ArticleMarker, Collector, SaleInput, SaleRecord, SaleResult};
pub use services::SaleCalculator;
