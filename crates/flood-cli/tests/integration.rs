#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flood(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flood").unwrap();
    cmd.current_dir(dir.path()).env("FLOOD_ROOT", dir.path());
    cmd
}

fn write_data(dir: &TempDir) {
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::create_dir_all(dir.path().join("geo")).unwrap();
    std::fs::write(
        dir.path().join("data/flood_replay.csv"),
        "Date,Water_Level_m\n2024-01-01,524.0\n2024-01-02,526.0\n2024-01-03,530.0\n",
    )
    .unwrap();

    let features: Vec<serde_json::Value> = (1..=8)
        .map(|i| {
            serde_json::json!({
                "type": "Feature",
                "properties": { "village_na": format!("Village {i}") },
                "geometry": { "type": "Point", "coordinates": [74.2, 16.7] }
            })
        })
        .collect();
    std::fs::write(
        dir.path().join("geo/kolhapur.geojson"),
        serde_json::json!({ "type": "FeatureCollection", "features": features }).to_string(),
    )
    .unwrap();
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// flood alert
// ---------------------------------------------------------------------------

#[test]
fn alert_json_for_warning_hour() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    let json = stdout_json(flood(&dir).args(["alert", "--hour", "1", "--json"]));
    assert_eq!(json["date"], "2024-01-02");
    assert_eq!(json["alert_level"], "Warning");
    assert_eq!(
        json["affected_villages"],
        serde_json::json!(["village 1", "village 2", "village 3"])
    );
}

#[test]
fn alert_past_the_end_holds_at_last_row() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    let json = stdout_json(flood(&dir).args(["alert", "--hour", "99", "--json"]));
    assert_eq!(json["date"], "2024-01-03");
    assert_eq!(json["alert_level"], "Severe Flood");
    assert_eq!(json["affected_villages"].as_array().unwrap().len(), 8);
}

#[test]
fn alert_table_output() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    flood(&dir)
        .arg("alert")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("Normal: no villages affected"));
}

#[test]
fn alert_hour_beyond_integer_range_holds_at_last_row() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    let json = stdout_json(flood(&dir).args(["alert", "--hour", "99999999999999999999", "--json"]));
    assert_eq!(json["date"], "2024-01-03");
    assert_eq!(json["alert_level"], "Severe Flood");
}

#[test]
fn alert_by_level_lists_prefix() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    let json = stdout_json(flood(&dir).args(["alert", "--level", "high_alert", "--json"]));
    assert_eq!(json["alert_level"], "High Alert");
    assert_eq!(json["affected_villages"].as_array().unwrap().len(), 6);
}

#[test]
fn alert_rejects_unknown_level() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    flood(&dir)
        .args(["alert", "--level", "tsunami"])
        .assert()
        .failure();
}

#[test]
fn alert_rejects_negative_hour() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    flood(&dir)
        .args(["alert", "--hour=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn alert_fails_without_data() {
    let dir = TempDir::new().unwrap();

    flood(&dir)
        .arg("alert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load flood data"));
}

// ---------------------------------------------------------------------------
// flood villages
// ---------------------------------------------------------------------------

#[test]
fn villages_lists_lowercase_names_in_order() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    let json = stdout_json(flood(&dir).args(["villages", "--json"]));
    let names = json.as_array().unwrap();
    assert_eq!(names.len(), 8);
    assert_eq!(names[0], "village 1");
    assert_eq!(names[7], "village 8");
}

// ---------------------------------------------------------------------------
// flood check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_with_valid_data() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);

    flood(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 hour(s)"))
        .stdout(predicate::str::contains("8 village(s)"));
}

#[test]
fn check_honours_config_paths() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);
    std::fs::rename(
        dir.path().join("geo/kolhapur.geojson"),
        dir.path().join("villages.geojson"),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("flood.yaml"),
        "data:\n  villages: villages.geojson\n",
    )
    .unwrap();

    let json = stdout_json(flood(&dir).args(["check", "--json"]));
    assert_eq!(json["ok"], true);
    assert_eq!(json["dataset"]["villages"], 8);
}

#[test]
fn check_fails_on_missing_files() {
    let dir = TempDir::new().unwrap();

    flood(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn check_fails_on_bad_csv() {
    let dir = TempDir::new().unwrap();
    write_data(&dir);
    std::fs::write(
        dir.path().join("data/flood_replay.csv"),
        "Date,Water_Level_m\nnot-a-date,524.0\n",
    )
    .unwrap();

    flood(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse date"));
}
