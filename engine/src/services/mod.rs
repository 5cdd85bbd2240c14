// Engine services: the per-selection pipeline used by the GUI and the report CLI
pub mod price_service;

pub use price_service::PriceService;
