use log::{debug, info, warn};
use serde_json::Value;

use crate::errors::{Result, StatsError};
use crate::models::dataset::DatasetData;
use crate::models::record::{DailyRecord, Field, RecordSeries};
use crate::util;

pub const DATE_COLUMN: &str = "Date";

/// Column positions resolved once per payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    width: usize,
    date_index: Option<usize>,
    fields: Vec<(Field, usize)>,
}

impl ColumnSchema {
    pub fn from_column_names(column_names: &[String]) -> Self {
        let mut date_index = None;
        let mut fields = Vec::new();

        for (i, name) in column_names.iter().enumerate() {
            if name.trim().eq_ignore_ascii_case(DATE_COLUMN) {
                date_index.get_or_insert(i);
            } else if let Some(field) = Field::from_column_name(name) {
                // 重复列名以第一次出现为准
                if !fields.iter().any(|(f, _)| *f == field) {
                    fields.push((field, i));
                }
            } else {
                debug!("Ignoring unknown column: {}", name);
            }
        }

        if date_index.is_none() {
            warn!("No {} column in {:?}", DATE_COLUMN, column_names);
        }

        Self {
            width: column_names.len(),
            date_index,
            fields,
        }
    }

    /// Resolve one raw row into a record. `row_index` is only used for error reporting.
    pub fn record_from_row(&self, row_index: usize, row: &[Value]) -> Result<DailyRecord> {
        if row.len() < self.width {
            return Err(StatsError::malformed(
                row_index,
                format!("row has {} cells, expected {}", row.len(), self.width),
            ));
        }

        // 没有日期列时每一行都缺少日期
        let date_index = self
            .date_index
            .ok_or_else(|| StatsError::malformed(row_index, "missing Date"))?;

        let date = match &row[date_index] {
            Value::String(s) => util::parse_iso_date(s).map_err(|e| {
                StatsError::malformed(row_index, format!("invalid date {:?}: {}", s, e))
            })?,
            Value::Null => return Err(StatsError::malformed(row_index, "missing Date")),
            other => {
                return Err(StatsError::malformed(
                    row_index,
                    format!("Date is not a string: {}", other),
                ))
            }
        };

        let mut record = DailyRecord::empty(date);
        for &(field, i) in &self.fields {
            let value = match &row[i] {
                Value::Null => None,
                Value::Number(n) => n.as_f64(),
                other => {
                    return Err(StatsError::malformed(
                        row_index,
                        format!("{} is not numeric: {}", field.column_name(), other),
                    ))
                }
            };
            record.set(field, value);
        }

        if let (Some(high), Some(low)) = (record.high, record.low) {
            if high < low {
                warn!("{}: High {} is below Low {}", record.date, high, low);
            }
        }

        Ok(record)
    }
}

/// 将原始行数据按列名映射为日线记录，保持输入顺序
pub fn load(column_names: &[String], rows: &[Vec<Value>]) -> Result<RecordSeries> {
    let schema = ColumnSchema::from_column_names(column_names);
    debug!("Column mapping: {:?}", schema);

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| schema.record_from_row(i, row))
        .collect::<Result<Vec<_>>>()?;

    info!("Loaded {} daily records", records.len());
    Ok(RecordSeries::new(records))
}

pub fn load_dataset(dataset: &DatasetData) -> Result<RecordSeries> {
    load(&dataset.column_names, &dataset.data)
}
