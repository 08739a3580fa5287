use crate::config::Config;
use crate::errors::Result;
use crate::loader;
use crate::models::record::RecordSeries;
use crate::sources::base::{DatasetQuery, DatasetSource};
use crate::stats::Summary;
use log::{info, warn};
use std::sync::Arc;

/// 分析服务: 抓取 -> 整理 -> 统计
pub struct AnalysisService {
    config: Config,
    source: Arc<dyn DatasetSource + Send + Sync>,
}

impl AnalysisService {
    pub fn new(config: Config, source: Arc<dyn DatasetSource + Send + Sync>) -> Self {
        Self { config, source }
    }

    /// 获取并整理日线数据
    pub async fn load_series(&self) -> Result<RecordSeries> {
        self.config.validate()?;
        let query = DatasetQuery::from_config(&self.config);

        info!("Fetching {} from {}", query.code(), self.source.source_name());
        let dataset = self.source.fetch_dataset(&query).await?;

        let series = loader::load_dataset(&dataset)?;
        if series.is_empty() {
            warn!("No records returned for {}", query.code());
        }
        Ok(series)
    }

    /// 计算全部统计指标
    pub async fn analyze(&self) -> Result<Summary> {
        let series = self.load_series().await?;
        let summary = Summary::compute(&series)?;
        info!("Analysed {} records", summary.records);
        Ok(summary)
    }
}
