pub mod settings;

pub use settings::{EngineSettings, ExclusionRule, ForecastSettings};
