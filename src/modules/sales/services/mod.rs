pub mod sale_calculator;

pub use sale_calculator::SaleCalculator;
