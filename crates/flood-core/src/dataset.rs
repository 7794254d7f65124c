use crate::classifier::classify;
use crate::config::Config;
use crate::error::Result;
use crate::selector::affected_villages;
use crate::timeseries::TimeSeries;
use crate::types::AlertReport;
use crate::villages::VillageStore;
use std::path::Path;

/// Both read-only stores, loaded together at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub timeseries: TimeSeries,
    pub villages: VillageStore,
}

impl Dataset {
    pub fn new(timeseries: TimeSeries, villages: VillageStore) -> Self {
        Self {
            timeseries,
            villages,
        }
    }

    /// Load the files named by `config`, resolved against `root`.
    pub fn load(root: &Path, config: &Config) -> Result<Self> {
        let timeseries = TimeSeries::load(&config.timeseries_path(root))?;
        let villages = VillageStore::load(&config.villages_path(root))?;
        tracing::info!(
            hours = timeseries.len(),
            villages = villages.len(),
            first = %timeseries.first_date(),
            last = %timeseries.last_date(),
            "dataset loaded"
        );
        Ok(Self::new(timeseries, villages))
    }

    /// Alert state at `hour`, holding at the last row past the end.
    pub fn alert_at(&self, hour: usize) -> AlertReport {
        let row = self.timeseries.row_at(hour);
        let alert_level = classify(row.water_level);
        AlertReport {
            date: row.date,
            alert_level,
            affected_villages: affected_villages(alert_level, self.villages.names()).to_vec(),
        }
    }
}
