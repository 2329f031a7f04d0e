pub mod article;
pub mod collector;
pub mod sale;

pub use article::{ArticleCategory, ArticleMarker};
pub use collector::Collector;
pub use sale::{SaleInput, SaleRecord, SaleResult};
