use chrono::NaiveDate;

use crate::errors::{Result, StatsError};
use crate::util;

pub const DEFAULT_BASE_URL: &str = "https://data.nasdaq.com/api/v3";
pub const API_KEY_ENV: &str = "NASDAQ_DATA_LINK_API_KEY";

pub struct Config {
    pub database: String,
    pub dataset: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            database: "FSE".to_string(),
            dataset: "AFX_X".to_string(),
            start_date: None,
            end_date: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    pub fn with_dataset(mut self, dataset: &str) -> Self {
        self.dataset = dataset.to_string();
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    // 整个自然年: 1月1日 ~ 12月31日
    pub fn date_range_for_year(self, year: i32) -> Result<Self> {
        let (start, end) = util::year_bounds(year)?;
        Ok(self.with_date_range(Some(start), Some(end)))
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() || self.dataset.trim().is_empty() {
            return Err(StatsError::ConfigError(
                "database and dataset must not be empty".to_string(),
            ));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(StatsError::ConfigError(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
