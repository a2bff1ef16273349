// Interval helpers shared by the presence tables

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Calendar moment every interval is measured from: `Date(1, 1, 1)`, i.e.
/// 1 February 1901 at midnight. Only its time-of-day matters to callers.
fn interval_base() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1901, 2, 1)?.and_hms_opt(0, 0, 0)
}

/// Converts a seconds offset into a calendar value whose hour, minute and
/// second fields give the time of day `value` seconds after midnight.
///
/// The offset is applied in whole milliseconds (truncated toward zero), so
/// overflow past 24h lands in the date part, which callers ignore. Returns
/// `None` for non-finite input or when the result leaves chrono's range.
pub fn parse_interval(value: f64) -> Option<NaiveDateTime> {
    let millis = (value * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(millis as i64)?;
    interval_base()?.checked_add_signed(delta)
}

pub fn format_interval(value: f64) -> String {
    match parse_interval(value) {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}
