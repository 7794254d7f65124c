//! Water-level time series replayed by hour index.
//!
//! The CSV is read once; row order in the file defines the hour index.

use crate::error::{FloodError, Result};
use crate::types::TimeSeriesRow;
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Read;
use std::num::IntErrorKind;
use std::path::Path;

pub const DATE_COLUMN: &str = "Date";
pub const WATER_LEVEL_COLUMN: &str = "Water_Level_m";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Non-empty, immutable sequence of daily water-level readings.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    rows: Vec<TimeSeriesRow>,
}

impl TimeSeries {
    pub fn new(rows: Vec<TimeSeriesRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(FloodError::EmptyTimeSeries);
        }
        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FloodError::MissingFile(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)?;
        let series = Self::from_reader(file)?;
        tracing::debug!(path = %path.display(), rows = series.len(), "loaded time series");
        Ok(series)
    }

    /// Parse CSV with a header row. Columns are matched by name and extra
    /// columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let date_idx = column_index(&headers, DATE_COLUMN)?;
        let level_idx = column_index(&headers, WATER_LEVEL_COLUMN)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let raw_date = record.get(date_idx).unwrap_or_default();
            let raw_level = record.get(level_idx).unwrap_or_default();

            let date = parse_date(raw_date).ok_or_else(|| FloodError::InvalidDate {
                line,
                value: raw_date.to_string(),
            })?;
            let water_level = raw_level
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FloodError::InvalidWaterLevel {
                    line,
                    value: raw_level.to_string(),
                })?;

            rows.push(TimeSeriesRow { date, water_level });
        }

        Self::new(rows)
    }

    /// Row for `hour`. Hours past the end hold at the last row.
    pub fn row_at(&self, hour: usize) -> &TimeSeriesRow {
        let idx = hour.min(self.rows.len() - 1);
        &self.rows[idx]
    }

    pub fn rows(&self) -> &[TimeSeriesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.rows[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.rows[self.rows.len() - 1].date
    }
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(FloodError::MissingColumn(name))
}

/// Parse an hour index. Integers too large for `usize` saturate to
/// `usize::MAX`, which `row_at` holds at the last row.
pub fn parse_hour(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FloodError::InvalidHour(raw.to_string()));
    }
    if negative {
        if digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        return Err(FloodError::NegativeHour(raw.to_string()));
    }
    match digits.parse::<usize>() {
        Ok(hour) => Ok(hour),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(FloodError::InvalidHour(raw.to_string())),
    }
}

/// Accepts plain dates and date-times; only the calendar day is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SAMPLE: &str = "\
Date,Water_Level_m,Rainfall_mm
2024-01-01,524.0,3
2024-01-02,526.0,10
2024-01-03,530.0,42
";

    #[test]
    fn parses_rows_in_file_order() {
        let ts = TimeSeries::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.row_at(0).date, day(2024, 1, 1));
        assert_eq!(ts.row_at(1).water_level, 526.0);
        assert_eq!(ts.first_date(), day(2024, 1, 1));
        assert_eq!(ts.last_date(), day(2024, 1, 3));
    }

    #[test]
    fn hours_past_the_end_clamp_to_last_row() {
        let ts = TimeSeries::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ts.row_at(3), ts.row_at(2));
        assert_eq!(ts.row_at(99), ts.row_at(2));
        assert_eq!(ts.row_at(usize::MAX), ts.row_at(2));
    }

    #[test]
    fn columns_are_matched_by_name() {
        let csv = "Water_Level_m,Station,Date\n527.5,KOP,2024-07-01\n";
        let ts = TimeSeries::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ts.row_at(0).date, day(2024, 7, 1));
        assert_eq!(ts.row_at(0).water_level, 527.5);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Date,Level\n2024-01-01,524.0\n";
        let err = TimeSeries::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FloodError::MissingColumn("Water_Level_m")));
    }

    #[test]
    fn empty_series_is_an_error() {
        let csv = "Date,Water_Level_m\n";
        let err = TimeSeries::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FloodError::EmptyTimeSeries));
    }

    #[test]
    fn bad_date_reports_line() {
        let csv = "Date,Water_Level_m\n2024-01-01,524.0\nyesterday,526.0\n";
        let err = TimeSeries::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            FloodError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_water_level_is_rejected() {
        for bad in ["NaN", "inf", "", "high"] {
            let csv = format!("Date,Water_Level_m\n2024-01-01,{bad}\n");
            let err = TimeSeries::from_reader(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(err, FloodError::InvalidWaterLevel { .. }),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn hour_parses_plain_integers() {
        assert_eq!(parse_hour("0").unwrap(), 0);
        assert_eq!(parse_hour(" 42 ").unwrap(), 42);
        assert_eq!(parse_hour("+7").unwrap(), 7);
        assert_eq!(parse_hour("-0").unwrap(), 0);
    }

    #[test]
    fn oversized_hour_saturates_and_clamps() {
        let hour = parse_hour("99999999999999999999999999").unwrap();
        assert_eq!(hour, usize::MAX);
        let ts = TimeSeries::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ts.row_at(hour), ts.row_at(2));
    }

    #[test]
    fn hour_rejects_negative_and_non_integer() {
        assert!(matches!(parse_hour("-1"), Err(FloodError::NegativeHour(_))));
        assert!(matches!(
            parse_hour("-99999999999999999999"),
            Err(FloodError::NegativeHour(_))
        ));
        for bad in ["", "-", "abc", "1.5", "1e3", "0x10"] {
            assert!(
                matches!(parse_hour(bad), Err(FloodError::InvalidHour(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn accepts_common_date_layouts() {
        assert_eq!(parse_date("2024-08-15"), Some(day(2024, 8, 15)));
        assert_eq!(parse_date("2024/08/15"), Some(day(2024, 8, 15)));
        assert_eq!(parse_date("08/15/2024"), Some(day(2024, 8, 15)));
        assert_eq!(parse_date("2024-08-15 06:00:00"), Some(day(2024, 8, 15)));
        assert_eq!(parse_date("2024-08-15T06:00"), Some(day(2024, 8, 15)));
        assert_eq!(parse_date("15 Aug"), None);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = TimeSeries::load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, FloodError::MissingFile(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("replay.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let ts = TimeSeries::load(&path).unwrap();
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
    }
}
