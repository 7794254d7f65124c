use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FloodError {
    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("time series is empty: at least one row is required")]
    EmptyTimeSeries,

    #[error("time series is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: cannot parse date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: water level must be a finite number, got '{value}'")]
    InvalidWaterLevel { line: u64, value: String },

    #[error("village file is not a GeoJSON FeatureCollection: {0}")]
    NotFeatureCollection(String),

    #[error("feature {index}: missing string property 'village_na'")]
    MissingVillageName { index: usize },

    #[error("feature {index}: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    #[error("hour must be non-negative, got {0}")]
    NegativeHour(String),

    #[error("hour must be an integer, got '{0}'")]
    InvalidHour(String),

    #[error("invalid alert level: {0}")]
    InvalidAlertLevel(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FloodError>;
