use crate::error::FloodError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// AlertLevel
// ---------------------------------------------------------------------------

/// Alert tier derived from the river water level, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    Normal,
    Warning,
    #[serde(rename = "High Alert")]
    HighAlert,
    #[serde(rename = "Severe Flood")]
    SevereFlood,
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 4] = [
        AlertLevel::Normal,
        AlertLevel::Warning,
        AlertLevel::HighAlert,
        AlertLevel::SevereFlood,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Normal => "Normal",
            AlertLevel::Warning => "Warning",
            AlertLevel::HighAlert => "High Alert",
            AlertLevel::SevereFlood => "Severe Flood",
        }
    }

    /// Number of leading villages flagged as affected at this tier.
    /// `None` means every village.
    pub fn village_cutoff(self) -> Option<usize> {
        match self {
            AlertLevel::Normal => Some(0),
            AlertLevel::Warning => Some(3),
            AlertLevel::HighAlert => Some(6),
            AlertLevel::SevereFlood => None,
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertLevel {
    type Err = FloodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(AlertLevel::Normal),
            "warning" => Ok(AlertLevel::Warning),
            "high alert" | "high_alert" | "high-alert" => Ok(AlertLevel::HighAlert),
            "severe flood" | "severe_flood" | "severe-flood" => Ok(AlertLevel::SevereFlood),
            _ => Err(FloodError::InvalidAlertLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// TimeSeriesRow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesRow {
    pub date: NaiveDate,
    /// Meters.
    pub water_level: f64,
}

// ---------------------------------------------------------------------------
// AlertReport
// ---------------------------------------------------------------------------

/// Alert state for one hour of the replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertReport {
    pub date: NaiveDate,
    pub alert_level: AlertLevel,
    pub affected_villages: Vec<String>,
}
