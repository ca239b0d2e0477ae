// File: crates/tufte-core/src/time.rs
// Summary: Time-axis ticks for time-series plots; nice ticks over epoch seconds mapped back to timestamps.

use chrono::{DateTime, NaiveDateTime, TimeDelta};

use crate::error::{Result, TufteError};
use crate::ticks::{generate_ticks_with, TickOptions};

fn to_seconds(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64 / 1000.0
}

fn from_seconds(secs: f64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| TufteError::invalid(format!("timestamp {secs}s out of range")))
}

/// Ticks between two timestamps, endpoints included exactly (millisecond resolution).
pub fn time_ticks(start: NaiveDateTime, end: NaiveDateTime, opts: &TickOptions) -> Result<Vec<NaiveDateTime>> {
    if start > end {
        return Err(TufteError::invalid(format!("start {start} is after end {end}")));
    }
    // snapping is meaningless for epoch offsets
    let opts = TickOptions { snap_tolerance: 0.0, ..*opts };
    let secs = generate_ticks_with(to_seconds(start), to_seconds(end), &opts)?;
    let last = secs.len() - 1;
    secs.into_iter()
        .enumerate()
        .map(|(i, s)| match i {
            0 => Ok(start),
            i if i == last => Ok(end),
            _ => from_seconds(s),
        })
        .collect()
}

/// Label a time tick with the coarsest precision that still separates ticks over `span`.
pub fn format_time_tick(t: NaiveDateTime, span: TimeDelta) -> String {
    let fmt = if span >= TimeDelta::days(2) {
        "%Y-%m-%d"
    } else if span >= TimeDelta::hours(1) {
        "%Y-%m-%d %H:%M"
    } else {
        "%H:%M:%S"
    };
    t.format(fmt).to_string()
}
