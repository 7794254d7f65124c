use crate::output::{print_json, Table};
use flood_core::selector::affected_villages;
use flood_core::{AlertLevel, AlertReport};
use std::path::Path;

pub fn run(root: &Path, hour: usize, level: Option<AlertLevel>, json: bool) -> anyhow::Result<()> {
    let (_, dataset) = super::load(root)?;

    if let Some(level) = level {
        let names = affected_villages(level, dataset.villages.names());
        if json {
            return print_json(&serde_json::json!({
                "alert_level": level,
                "affected_villages": names,
            }));
        }
        print_affected(level, names);
        return Ok(());
    }

    let last = dataset.timeseries.len() - 1;
    if hour > last {
        tracing::info!(hour, last, "hour past end of replay, holding at last row");
    }
    let report = dataset.alert_at(hour);

    if json {
        return print_json(&report);
    }
    print_report(&report, dataset.timeseries.row_at(hour).water_level);
    Ok(())
}

fn print_report(report: &AlertReport, water_level: f64) {
    Table::new(&["DATE", "WATER LEVEL (m)", "ALERT"])
        .row([
            report.date.to_string(),
            format!("{water_level:.2}"),
            report.alert_level.to_string(),
        ])
        .print();
    println!();
    print_affected(report.alert_level, &report.affected_villages);
}

fn print_affected(level: AlertLevel, names: &[String]) {
    if names.is_empty() {
        println!("{level}: no villages affected");
        return;
    }
    println!("{level}: {} village(s) affected", names.len());
    for name in names {
        println!("  {name}");
    }
}
