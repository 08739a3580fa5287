use serde::Serialize;

use crate::errors::{Result, StatsError};
use crate::models::record::{Field, RecordSeries};

/// Minimum and maximum opening price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpenRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Largest move between positionally adjacent closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloseChange {
    pub magnitude: f64,
    pub direction: Direction,
}

/// Non-null values of `field`, in series order. Nulls are skipped, never read as zero.
pub fn values(series: &RecordSeries, field: Field) -> impl Iterator<Item = f64> + '_ {
    series.iter().filter_map(move |record| record.value(field))
}

fn fold_max(iter: impl Iterator<Item = f64>) -> Option<f64> {
    iter.fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

fn fold_min(iter: impl Iterator<Item = f64>) -> Option<f64> {
    iter.fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
}

pub fn open_extrema(series: &RecordSeries) -> Result<OpenRange> {
    let empty = || StatsError::EmptySeries { aggregate: "open_extrema" };
    let min = fold_min(values(series, Field::Open)).ok_or_else(empty)?;
    let max = fold_max(values(series, Field::Open)).ok_or_else(empty)?;
    Ok(OpenRange { min, max })
}

/// Largest `high - low` among records carrying both prices.
///
/// An inverted high/low pair yields a negative range and is passed through
/// unchanged.
pub fn max_intraday_change(series: &RecordSeries) -> Result<f64> {
    let ranges = series
        .iter()
        .filter_map(|r| Some(r.value(Field::High)? - r.value(Field::Low)?));
    fold_max(ranges).ok_or(StatsError::EmptySeries {
        aggregate: "max_intraday_change",
    })
}

/// Largest close-to-close move between adjacent records, in the order given.
///
/// A pair is skipped when either close is null; the records on either side
/// of a gap are not treated as adjacent. When the biggest drop and the
/// biggest rise have equal magnitude the rise is reported.
pub fn max_adjacent_close_change(series: &RecordSeries) -> Result<CloseChange> {
    let deltas: Vec<f64> = series
        .as_slice()
        .windows(2)
        .filter_map(|pair| Some(pair[1].value(Field::Close)? - pair[0].value(Field::Close)?))
        .collect();

    let neg_max = fold_min(deltas.iter().copied()).ok_or(StatsError::EmptySeries {
        aggregate: "max_adjacent_close_change",
    })?;
    let pos_max = deltas
        .iter()
        .copied()
        .filter(|d| *d > 0.0)
        .fold(f64::MIN, f64::max);

    // TODO: confirm whether a tie should really favour Increase (`>` vs `>=`).
    if neg_max.abs() > pos_max {
        Ok(CloseChange {
            magnitude: neg_max.abs(),
            direction: Direction::Decrease,
        })
    } else {
        Ok(CloseChange {
            magnitude: pos_max,
            direction: Direction::Increase,
        })
    }
}

pub fn mean_volume(series: &RecordSeries) -> Result<f64> {
    let (sum, count) = values(series, Field::TradedVolume)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(StatsError::EmptySeries { aggregate: "mean_volume" });
    }
    Ok(sum / count as f64)
}

pub fn median_volume(series: &RecordSeries) -> Result<f64> {
    let mut volumes: Vec<f64> = values(series, Field::TradedVolume).collect();
    if volumes.is_empty() {
        return Err(StatsError::EmptySeries { aggregate: "median_volume" });
    }
    volumes.sort_by(|a, b| a.total_cmp(b));

    let mid = volumes.len() / 2;
    if volumes.len() % 2 == 1 {
        Ok(volumes[mid])
    } else {
        Ok((volumes[mid - 1] + volumes[mid]) / 2.0)
    }
}

/// All five aggregates for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub open_range: OpenRange,
    pub max_intraday_change: f64,
    pub max_close_change: CloseChange,
    pub mean_volume: f64,
    pub median_volume: f64,
}

impl Summary {
    pub fn compute(series: &RecordSeries) -> Result<Self> {
        Ok(Self {
            records: series.len(),
            open_range: open_extrema(series)?,
            max_intraday_change: max_intraday_change(series)?,
            max_close_change: max_adjacent_close_change(series)?,
            mean_volume: mean_volume(series)?,
            median_volume: median_volume(series)?,
        })
    }
}
