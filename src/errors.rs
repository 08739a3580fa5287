use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("No usable values for {aggregate}")]
    EmptySeries { aggregate: &'static str },

    #[error("Fetch failure: {0}")]
    FetchFailure(String),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        StatsError::MalformedRecord {
            row,
            reason: reason.into(),
        }
    }
}
