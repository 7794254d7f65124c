use crate::output::print_json;
use anyhow::{anyhow, Context};
use flood_core::config::{Config, WarnLevel};
use flood_core::Dataset;
use std::path::Path;

/// Validate config and load both data files without serving.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load flood.yaml")?;
    let warnings = config.validate(root);
    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);

    let dataset = if has_errors {
        None
    } else {
        Some(Dataset::load(root, &config).context("failed to load flood data")?)
    };

    if json {
        let summary = dataset.as_ref().map(|d| {
            serde_json::json!({
                "hours": d.timeseries.len(),
                "first_date": d.timeseries.first_date(),
                "last_date": d.timeseries.last_date(),
                "villages": d.villages.len(),
            })
        });
        print_json(&serde_json::json!({
            "ok": !has_errors,
            "warnings": warnings,
            "dataset": summary,
        }))?;
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            eprintln!("{tag}: {}", w.message);
        }
        if let Some(d) = &dataset {
            println!(
                "ok: {} hour(s) from {} to {}, {} village(s)",
                d.timeseries.len(),
                d.timeseries.first_date(),
                d.timeseries.last_date(),
                d.villages.len()
            );
        }
    }

    if has_errors {
        return Err(anyhow!("configuration check failed"));
    }
    Ok(())
}
