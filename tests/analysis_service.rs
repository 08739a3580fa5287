use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::{Arc, Mutex};

use tickerstats::config::Config;
use tickerstats::services::analysis_service::AnalysisService;
use tickerstats::sources::base::{DatasetQuery, DatasetSource};
use tickerstats::{DatasetData, Direction, StatsError};

struct StubSource {
    data: DatasetData,
    queries: Mutex<Vec<DatasetQuery>>,
}

impl StubSource {
    fn new(data: DatasetData) -> Arc<Self> {
        Arc::new(Self {
            data,
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl DatasetSource for StubSource {
    fn source_name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_dataset(&self, query: &DatasetQuery) -> tickerstats::Result<DatasetData> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.data.clone())
    }
}

struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    fn source_name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_dataset(&self, _query: &DatasetQuery) -> tickerstats::Result<DatasetData> {
        Err(StatsError::FetchFailure("HTTP status 403 Forbidden".to_string()))
    }
}

// Newest first, the way the API returns FSE rows.
fn afx_sample() -> DatasetData {
    serde_json::from_value(json!({
        "column_names": [
            "Date", "Open", "High", "Low", "Close", "Change", "Traded Volume",
            "Turnover", "Last Price of the Day", "Daily Traded Units", "Daily Turnover"
        ],
        "data": [
            ["2017-01-06", 35.02, 35.2, 34.73, 35.04, null, 27507.0, 964046.0, null, null, null],
            ["2017-01-05", 35.02, 35.2, 34.66, 35.19, null, 48412.0, 1692326.0, null, null, null],
            ["2017-01-04", 35.48, 35.51, 34.75, 35.19, null, 54408.0, 1906810.0, null, null, null],
            ["2017-01-03", 35.9, 35.93, 35.34, 35.48, null, 70618.0, 2515473.0, null, null, null],
            ["2017-01-02", 34.99, 35.94, 34.99, 35.8, null, 44700.0, 1590561.0, null, null, null]
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn analyze_computes_every_aggregate() {
    let source = StubSource::new(afx_sample());
    let service = AnalysisService::new(Config::new(), source.clone());

    let summary = service.analyze().await.unwrap();

    assert_eq!(summary.records, 5);
    assert_eq!(summary.open_range.min, 34.99);
    assert_eq!(summary.open_range.max, 35.9);
    assert!((summary.max_intraday_change - 0.95).abs() < 1e-9);
    // deltas in row order: +0.15, 0.0, +0.29, +0.32
    assert_eq!(summary.max_close_change.direction, Direction::Increase);
    assert!((summary.max_close_change.magnitude - 0.32).abs() < 1e-9);
    assert!((summary.mean_volume - 49129.0).abs() < 1e-9);
    assert_eq!(summary.median_volume, 48412.0);
}

#[tokio::test]
async fn query_carries_configured_dataset_and_range() {
    let source = StubSource::new(afx_sample());
    let config = Config::new()
        .with_database("WIKI")
        .with_dataset("AAPL")
        .date_range_for_year(2017)
        .unwrap();
    let service = AnalysisService::new(config, source.clone());

    service.load_series().await.unwrap();

    let queries = source.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].code(), "WIKI/AAPL");
    assert_eq!(queries[0].start_date, NaiveDate::from_ymd_opt(2017, 1, 1));
    assert_eq!(queries[0].end_date, NaiveDate::from_ymd_opt(2017, 12, 31));
}

#[tokio::test]
async fn fetch_failure_is_surfaced_unchanged() {
    let service = AnalysisService::new(Config::new(), Arc::new(FailingSource));

    match service.analyze().await {
        Err(StatsError::FetchFailure(msg)) => assert!(msg.contains("403")),
        other => panic!("expected FetchFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_row_aborts_the_load() {
    let mut data = afx_sample();
    data.data[2][0] = serde_json::Value::Null;
    let service = AnalysisService::new(Config::new(), StubSource::new(data));

    assert!(matches!(
        service.analyze().await,
        Err(StatsError::MalformedRecord { row: 2, .. })
    ));
}

#[tokio::test]
async fn all_null_opens_report_empty_series() {
    let mut data = afx_sample();
    for row in data.data.iter_mut() {
        row[1] = serde_json::Value::Null;
    }
    let service = AnalysisService::new(Config::new(), StubSource::new(data));

    assert!(matches!(
        service.analyze().await,
        Err(StatsError::EmptySeries { aggregate: "open_extrema" })
    ));
}

#[tokio::test]
async fn invalid_config_is_rejected_before_fetching() {
    let source = StubSource::new(afx_sample());
    let config = Config::new().with_date_range(
        NaiveDate::from_ymd_opt(2018, 1, 1),
        NaiveDate::from_ymd_opt(2017, 1, 1),
    );
    let service = AnalysisService::new(config, source.clone());

    assert!(matches!(
        service.analyze().await,
        Err(StatsError::ConfigError(_))
    ));
    assert!(source.queries.lock().unwrap().is_empty());
}
