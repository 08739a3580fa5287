use std::fmt;

use crate::models::record::DailyRecord;
use crate::stats::{Direction, Summary};
use crate::util::{format_price, format_volume};

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Increase => write!(f, "increase"),
            Direction::Decrease => write!(f, "decrease"),
        }
    }
}

/// Human-readable summary, one line per aggregate.
pub fn summary_lines(code: &str, summary: &Summary) -> Vec<String> {
    vec![
        format!("Dataset: {} ({} records)", code, summary.records),
        format!(
            "Opening price: min {} / max {}",
            format_price(summary.open_range.min),
            format_price(summary.open_range.max)
        ),
        format!(
            "Largest intraday change: {}",
            format_price(summary.max_intraday_change)
        ),
        format!(
            "Largest change between two days: {} of {}",
            summary.max_close_change.direction,
            format_price(summary.max_close_change.magnitude)
        ),
        format!("Average daily volume: {}", format_volume(summary.mean_volume)),
        format!("Median daily volume: {}", format_volume(summary.median_volume)),
    ]
}

pub fn record_header() -> String {
    format!(
        "{:<10} {:<10} {:<10} {:<10} {:<10} {:<15}",
        "Date", "Open", "High", "Low", "Close", "Volume"
    )
}

// 空值显示为 "-"
pub fn record_line(record: &DailyRecord) -> String {
    let price = |v: Option<f64>| v.map(format_price).unwrap_or_else(|| "-".to_string());
    let volume = record
        .traded_volume
        .map(format_volume)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<10} {:<10} {:<10} {:<10} {:<10} {:<15}",
        record.date.to_string(),
        price(record.open),
        price(record.high),
        price(record.low),
        price(record.close),
        volume
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{CloseChange, OpenRange};
    use chrono::NaiveDate;

    #[test]
    fn renders_prices_with_two_decimals_and_volume_without() {
        let summary = Summary {
            records: 255,
            open_range: OpenRange { min: 34.0, max: 53.11 },
            max_intraday_change: 2.81,
            max_close_change: CloseChange {
                magnitude: 2.56,
                direction: Direction::Decrease,
            },
            mean_volume: 89124.337,
            median_volume: 76286.0,
        };

        let lines = summary_lines("FSE/AFX_X", &summary);
        assert_eq!(lines[0], "Dataset: FSE/AFX_X (255 records)");
        assert_eq!(lines[1], "Opening price: min 34.00 / max 53.11");
        assert_eq!(lines[2], "Largest intraday change: 2.81");
        assert_eq!(lines[3], "Largest change between two days: decrease of 2.56");
        assert_eq!(lines[4], "Average daily volume: 89124");
        assert_eq!(lines[5], "Median daily volume: 76286");
    }

    #[test]
    fn record_line_marks_missing_values() {
        let record = DailyRecord {
            close: Some(51.76),
            ..DailyRecord::empty(NaiveDate::from_ymd_opt(2017, 12, 29).unwrap())
        };
        let line = record_line(&record);
        assert!(line.starts_with("2017-12-29 -"));
        assert!(line.contains("51.76"));
    }
}
