use chrono::NaiveDate;
use crate::errors::{Result, StatsError};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// 日期转换工具
pub fn parse_iso_date(date_str: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date_str.trim(), ISO_DATE_FORMAT)?)
}

/// First and last calendar day of `year`.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| StatsError::ConfigError(format!("Invalid year: {}", year)))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| StatsError::ConfigError(format!("Invalid year: {}", year)))?;
    Ok((start, end))
}

// 价格保留两位小数
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

// 成交量取整显示
pub fn format_volume(value: f64) -> String {
    format!("{:.0}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_iso_date("2017-12-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 12, 29).unwrap());
        assert!(parse_iso_date("20171229").is_err());
        assert!(parse_iso_date("2017-02-30").is_err());
    }

    #[test]
    fn year_bounds_cover_the_calendar_year() {
        let (start, end) = year_bounds(2017).unwrap();
        assert_eq!(start.to_string(), "2017-01-01");
        assert_eq!(end.to_string(), "2017-12-31");
    }

    #[test]
    fn formats_prices_and_volumes() {
        assert_eq!(format_price(53.1100000001), "53.11");
        assert_eq!(format_price(2.8), "2.80");
        assert_eq!(format_volume(89124.33), "89124");
    }
}
