use crate::config::Config;
use crate::errors::Result;
use crate::models::dataset::DatasetData;
use async_trait::async_trait;
use chrono::NaiveDate;

/// What to fetch: one dataset, optionally bounded by an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetQuery {
    pub database: String,
    pub dataset: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DatasetQuery {
    pub fn from_config(config: &Config) -> Self {
        Self {
            database: config.database.clone(),
            dataset: config.dataset.clone(),
            start_date: config.start_date,
            end_date: config.end_date,
        }
    }

    /// `FSE/AFX_X` style code
    pub fn code(&self) -> String {
        format!("{}/{}", self.database, self.dataset)
    }
}

/// Base trait for dataset sources
#[async_trait]
pub trait DatasetSource {
    /// Short name used in logs
    fn source_name(&self) -> &'static str;

    /// Fetch the column schema and raw rows for `query`
    async fn fetch_dataset(&self, query: &DatasetQuery) -> Result<DatasetData>;
}
