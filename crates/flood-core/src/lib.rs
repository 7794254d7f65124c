pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod paths;
pub mod selector;
pub mod timeseries;
pub mod types;
pub mod villages;

pub use dataset::Dataset;
pub use error::{FloodError, Result};
pub use types::{AlertLevel, AlertReport, TimeSeriesRow};
