use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_HOUR: u32 = 60;

pub trait NaiveTimeExt {
    /// Whole minutes since midnight; seconds are dropped.
    fn minutes_from_midnight(&self) -> u32;
}

impl NaiveTimeExt for NaiveTime {
    fn minutes_from_midnight(&self) -> u32 {
        self.hour() * MINUTES_PER_HOUR + self.minute()
    }
}

/// Split a minutes-since-midnight offset into `(hour, minute)`.
pub fn split_offset(offset: u32) -> (u32, u32) {
    (offset / MINUTES_PER_HOUR, offset % MINUTES_PER_HOUR)
}

/// Render an offset the way windows and placements print it, e.g. `9:05`.
pub fn format_offset(offset: u32) -> String {
    let (h, m) = split_offset(offset);
    format!("{h}:{m:02}")
}
