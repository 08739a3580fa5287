use chrono::NaiveDate;
use serde::Serialize;

/// Numeric attributes of a daily record, keyed by their API column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    Change,
    TradedVolume,
    Turnover,
    LastPriceOfDay,
    DailyTradedUnits,
    DailyTurnover,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Open,
        Field::High,
        Field::Low,
        Field::Close,
        Field::Change,
        Field::TradedVolume,
        Field::Turnover,
        Field::LastPriceOfDay,
        Field::DailyTradedUnits,
        Field::DailyTurnover,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            Field::Open => "Open",
            Field::High => "High",
            Field::Low => "Low",
            Field::Close => "Close",
            Field::Change => "Change",
            Field::TradedVolume => "Traded Volume",
            Field::Turnover => "Turnover",
            Field::LastPriceOfDay => "Last Price of the Day",
            Field::DailyTradedUnits => "Daily Traded Units",
            Field::DailyTurnover => "Daily Turnover",
        }
    }

    /// 按列名查找字段，忽略大小写和首尾空白
    pub fn from_column_name(name: &str) -> Option<Field> {
        let name = name.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.column_name().eq_ignore_ascii_case(name))
    }
}

/// 日线记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub change: Option<f64>,
    pub traded_volume: Option<f64>,
    pub turnover: Option<f64>,
    pub last_price_of_day: Option<f64>,
    pub daily_traded_units: Option<f64>,
    pub daily_turnover: Option<f64>,
}

impl DailyRecord {
    /// A record for `date` with every numeric field absent.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close: None,
            change: None,
            traded_volume: None,
            turnover: None,
            last_price_of_day: None,
            daily_traded_units: None,
            daily_turnover: None,
        }
    }

    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Open => self.open,
            Field::High => self.high,
            Field::Low => self.low,
            Field::Close => self.close,
            Field::Change => self.change,
            Field::TradedVolume => self.traded_volume,
            Field::Turnover => self.turnover,
            Field::LastPriceOfDay => self.last_price_of_day,
            Field::DailyTradedUnits => self.daily_traded_units,
            Field::DailyTurnover => self.daily_turnover,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Open => &mut self.open,
            Field::High => &mut self.high,
            Field::Low => &mut self.low,
            Field::Close => &mut self.close,
            Field::Change => &mut self.change,
            Field::TradedVolume => &mut self.traded_volume,
            Field::Turnover => &mut self.turnover,
            Field::LastPriceOfDay => &mut self.last_price_of_day,
            Field::DailyTradedUnits => &mut self.daily_traded_units,
            Field::DailyTurnover => &mut self.daily_turnover,
        };
        *slot = value;
    }
}

/// Records in the order the source returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordSeries {
    records: Vec<DailyRecord>,
}

impl RecordSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[DailyRecord] {
        &self.records
    }
}

impl From<Vec<DailyRecord>> for RecordSeries {
    fn from(records: Vec<DailyRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordSeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
