pub mod sale_controller;

pub use sale_controller::configure_sale_routes;
