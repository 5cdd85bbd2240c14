// GUI components module
pub mod chart;
pub mod dashboard;
pub mod error_banner;
pub mod forecast_panel;
pub mod gauges;
pub mod price_table;
pub mod sidebar;

pub use dashboard::Dashboard;
pub use error_banner::ErrorBanner;
pub use sidebar::Sidebar;
