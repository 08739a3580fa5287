// 公开导出的模块，供外部使用
pub mod models;
pub mod loader;
pub mod stats;
pub mod errors;
pub mod config;
pub mod sources;
pub mod services;
pub mod report;

#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use models::record::{DailyRecord, Field, RecordSeries};
pub use models::dataset::{DatasetData, DatasetResponse};
pub use stats::{CloseChange, Direction, OpenRange, Summary};
pub use errors::{Result, StatsError};
