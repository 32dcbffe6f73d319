use crate::core::types::TimeFormat;
use crate::errors::{Error, Result};
use crate::extensions::chrono::{MINUTES_PER_HOUR, NaiveTimeExt, format_offset};
use crate::extensions::string::BlankExt;
use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const MAX_HOUR: u32 = 23;
pub const MAX_MINUTE: u32 = 59;
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;

// ==========
// TimeWindow
// ==========

/// A half-open `[start, end)` stretch of one day during which the owner is
/// free. Always satisfies `end_offset() > start_offset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
}

impl TimeWindow {
    pub fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Result<Self> {
        if start_hour > MAX_HOUR {
            return Err(Error::validation(format!(
                "start_hour must be 0-23, got {start_hour}"
            )));
        }
        if end_hour > MAX_HOUR {
            return Err(Error::validation(format!(
                "end_hour must be 0-23, got {end_hour}"
            )));
        }
        if start_minute > MAX_MINUTE {
            return Err(Error::validation(format!(
                "start_minute must be 0-59, got {start_minute}"
            )));
        }
        if end_minute > MAX_MINUTE {
            return Err(Error::validation(format!(
                "end_minute must be 0-59, got {end_minute}"
            )));
        }

        let window = Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        };
        if window.end_offset() <= window.start_offset() {
            return Err(Error::validation(format!(
                "end time ({}) must be after start time ({})",
                format_offset(window.end_offset()),
                format_offset(window.start_offset())
            )));
        }
        Ok(window)
    }

    /// Parse `"H:MM-H:MM"` (24-hour clock), e.g. `"6:00-8:30"`.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid time window format: '{s}'. Expected format: '<start>-<end>'."
            ))
        })?;
        let start = Self::parse_token_as_time(start)?;
        let end = Self::parse_token_as_time(end)?;

        Self::from_offsets(start.minutes_from_midnight(), end.minutes_from_midnight())
    }

    fn parse_token_as_time(raw: &str) -> Result<NaiveTime> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, TimeFormat::Clock24.as_ref()).map_err(|_| {
            Error::Parse(format!(
                "Invalid time: '{raw}'. Expected 24-hour 'H:MM', e.g. '6:00' or '17:45'."
            ))
        })
    }

    fn from_offsets(start: u32, end: u32) -> Result<Self> {
        Self::new(
            start / MINUTES_PER_HOUR,
            start % MINUTES_PER_HOUR,
            end / MINUTES_PER_HOUR,
            end % MINUTES_PER_HOUR,
        )
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }
    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }
    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    /// Minutes from midnight to the window's start.
    pub fn start_offset(&self) -> u32 {
        self.start_hour * MINUTES_PER_HOUR + self.start_minute
    }

    /// Minutes from midnight to the window's (exclusive) end.
    pub fn end_offset(&self) -> u32 {
        self.end_hour * MINUTES_PER_HOUR + self.end_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_offset() - self.start_offset()
    }

    /// Half-open intersection test; windows that only touch do not overlap.
    pub fn overlaps_with(&self, other: &TimeWindow) -> bool {
        self.start_offset() < other.end_offset() && other.start_offset() < self.end_offset()
    }

    pub fn to_display_string(&self) -> String {
        format!(
            "{}-{}",
            format_offset(self.start_offset()),
            format_offset(self.end_offset())
        )
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl Serialize for TimeWindow {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_display_string())
    }
}

impl<'de> Deserialize<'de> for TimeWindow {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<TimeWindow, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        TimeWindow::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ====
// Task
// ====

/// A unit of pet care. `priority` runs 1..=5 with 5 the most urgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    title: String,
    duration_minutes: u32,
    priority: u8,
}

impl Task {
    pub fn new(title: impl Into<String>, duration_minutes: u32, priority: u8) -> Result<Self> {
        let title = title.into();
        if title.is_blank() {
            return Err(Error::validation("title cannot be empty"));
        }
        if duration_minutes == 0 {
            return Err(Error::validation(format!(
                "duration_minutes must be positive, got {duration_minutes}"
            )));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(Error::validation(format!(
                "priority must be 1-5, got {priority}"
            )));
        }
        Ok(Self {
            title,
            duration_minutes,
            priority,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
    pub fn priority(&self) -> u8 {
        self.priority
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(title='{}', duration={} min, priority={})",
            self.title, self.duration_minutes, self.priority
        )
    }
}

// ===
// Pet
// ===

/// Carried through to the explanation text; has no effect on placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    name: String,
    species: String,
}

impl Pet {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let species = species.into();
        if name.is_blank() {
            return Err(Error::validation("Pet name cannot be empty"));
        }
        if species.is_blank() {
            return Err(Error::validation("Pet species cannot be empty"));
        }
        Ok(Self { name, species })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn species(&self) -> &str {
        &self.species
    }
}

// =====
// Owner
// =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    name: String,
    windows: Vec<TimeWindow>,
}

impl Owner {
    /// Windows keep the given order; that order defines window indices.
    /// Fails if any pair overlaps.
    pub fn new(name: impl Into<String>, windows: Vec<TimeWindow>) -> Result<Self> {
        let name = name.into();
        if name.is_blank() {
            return Err(Error::validation("Owner name cannot be empty"));
        }

        for (i, a) in windows.iter().enumerate() {
            if let Some(b) = windows[i + 1..].iter().find(|b| a.overlaps_with(b)) {
                return Err(Error::validation(format!(
                    "Availability windows overlap: {a} and {b}"
                )));
            }
        }

        Ok(Self { name, windows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    pub fn total_available_minutes(&self) -> u32 {
        self.windows.iter().map(TimeWindow::duration_minutes).sum()
    }
}
