use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by the dataset `data.json` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetResponse {
    pub dataset_data: DatasetData,
}

/// Column schema plus raw rows, one row per trading day.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatasetData {
    pub column_names: Vec<String>,
    pub data: Vec<Vec<Value>>,
}
