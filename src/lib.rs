//! Ventas — sales calculation service
//!
//! A single-user sale form backend: one request carries the financial
//! parameters of one retail sale, the response carries the derived tax,
//! commission, cost and profit figures (or the same record rendered as
//! a one-row CSV for the operation's spreadsheet). Stateless end to
//! end: nothing is stored between requests.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::exports;
pub use modules::sales;
