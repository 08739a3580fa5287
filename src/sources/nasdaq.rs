use crate::config::Config;
use crate::errors::{Result, StatsError};
use crate::models::dataset::{DatasetData, DatasetResponse};
use crate::sources::base::{DatasetQuery, DatasetSource};
use crate::util::ISO_DATE_FORMAT;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

/// Nasdaq Data Link (原 Quandl) 数据集接口
pub struct NasdaqDataLinkSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NasdaqDataLinkSource {
    /// 创建新的数据源，需要配置中提供 api_key
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| StatsError::ConfigError("api_key is required".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(StatsError::RequestError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn endpoint(&self, query: &DatasetQuery) -> String {
        format!(
            "{}/datasets/{}/{}/data.json",
            self.base_url, query.database, query.dataset
        )
    }

    pub fn query_params(&self, query: &DatasetQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("api_key", self.api_key.clone())];
        if let Some(start) = query.start_date {
            params.push(("start_date", start.format(ISO_DATE_FORMAT).to_string()));
        }
        if let Some(end) = query.end_date {
            params.push(("end_date", end.format(ISO_DATE_FORMAT).to_string()));
        }
        params
    }
}

#[async_trait]
impl DatasetSource for NasdaqDataLinkSource {
    fn source_name(&self) -> &'static str {
        "nasdaq-data-link"
    }

    async fn fetch_dataset(&self, query: &DatasetQuery) -> Result<DatasetData> {
        info!("Fetching dataset {} ({:?} ~ {:?})", query.code(), query.start_date, query.end_date);

        let response = self
            .client
            .get(self.endpoint(query))
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(StatsError::FetchFailure(format!(
                "HTTP status {}: {}",
                status, text
            )));
        }
        debug!("Received response, {} bytes", text.len());

        let parsed: DatasetResponse = serde_json::from_str(&text)?;
        debug!("Got {} rows", parsed.dataset_data.data.len());

        Ok(parsed.dataset_data)
    }
}
