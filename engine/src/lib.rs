// Engine library root
// Reads commodity workbooks, normalizes them into annotated price series and
// builds the view models the dashboard renders.

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod normalize;
pub mod services;
pub mod view;

pub use error::{EngineError, FailureKind};
pub use services::PriceService;
