//! Candle regrouping.
//!
//! Each output candle takes the first member's time and open, the last member's
//! close, the extreme high and low of the group and the summed volume.

use crate::models::Candle;
use chrono::{Datelike, Timelike};
use tracing::warn;

/// Merge every `group_size` consecutive candles into one. A trailing partial
/// group is still emitted.
pub fn aggregate_candles(candles: &[Candle], group_size: usize) -> Vec<Candle> {
    candles
        .chunks(group_size.max(1))
        .filter_map(merge_group)
        .collect()
}

/// Merge candles that fall in the same `block_hours`-hour block of a UTC day.
///
/// The block key is `(year, month, day, hour / block_hours)`. Input is expected
/// in non-decreasing time order, so equal keys are always adjacent.
pub fn aggregate_utc_blocks(candles: &[Candle], block_hours: u32) -> Vec<Candle> {
    let block_hours = block_hours.max(1);
    let mut result = Vec::new();
    let mut current: Option<(BlockKey, Candle)> = None;

    for candle in candles {
        let Some(key) = block_key(candle, block_hours) else {
            warn!(time = candle.time, "skipping candle with unrepresentable timestamp");
            continue;
        };

        if let Some((current_key, bucket)) = current.as_mut() {
            if *current_key == key {
                extend(bucket, candle);
                continue;
            }
        }
        if let Some((_, bucket)) = current.replace((key, *candle)) {
            result.push(bucket);
        }
    }

    if let Some((_, bucket)) = current {
        result.push(bucket);
    }
    result
}

type BlockKey = (i32, u32, u32, u32);

fn block_key(candle: &Candle, block_hours: u32) -> Option<BlockKey> {
    let dt = candle.datetime()?;
    Some((dt.year(), dt.month(), dt.day(), dt.hour() / block_hours))
}

fn merge_group(group: &[Candle]) -> Option<Candle> {
    let (first, rest) = group.split_first()?;
    let mut merged = *first;
    for candle in rest {
        extend(&mut merged, candle);
    }
    Some(merged)
}

fn extend(bucket: &mut Candle, candle: &Candle) {
    bucket.high = bucket.high.max(candle.high);
    bucket.low = bucket.low.min(candle.low);
    bucket.close = candle.close;
    bucket.volume += candle.volume;
}
