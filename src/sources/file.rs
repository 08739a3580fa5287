use crate::errors::Result;
use crate::models::dataset::{DatasetData, DatasetResponse};
use crate::sources::base::{DatasetQuery, DatasetSource};
use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;

/// Reads a previously saved `data.json` response from disk.
///
/// The payload is returned as-is: the query's date range is not applied.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    async fn fetch_dataset(&self, query: &DatasetQuery) -> Result<DatasetData> {
        info!("Reading dataset {} from {}", query.code(), self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        let parsed: DatasetResponse = serde_json::from_str(&text)?;
        debug!("Read {} rows", parsed.dataset_data.data.len());
        Ok(parsed.dataset_data)
    }
}
