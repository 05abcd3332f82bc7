//! The fixed weekly teaching grid: five weekdays and nine intra-day slots.

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static CLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// Raised when a clock string is not a valid 24-hour `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed clock time: {input:?}")]
pub struct MalformedTimeError {
    pub input: String,
}

/// A weekday on the teaching grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Index of the day on the grid (Monday = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Returns the grid day for an index, or `None` for weekends and garbage.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// One teaching interval. Times are minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub index: u8,
    pub start: u16,
    pub end: u16,
}

impl TimeSlot {
    const fn new(index: u8, start: u16, end: u16) -> Self {
        Self { index, start, end }
    }

    /// Label such as `08:40-09:30`.
    pub fn label(&self) -> String {
        format!("{}-{}", format_minutes(self.start), format_minutes(self.end))
    }
}

/// The nine slots of a teaching day, in ascending order. Slots are separated
/// by ten-minute breaks.
pub const TIME_SLOTS: [TimeSlot; 9] = [
    TimeSlot::new(0, 8 * 60 + 40, 9 * 60 + 30),
    TimeSlot::new(1, 9 * 60 + 40, 10 * 60 + 30),
    TimeSlot::new(2, 10 * 60 + 40, 11 * 60 + 30),
    TimeSlot::new(3, 11 * 60 + 40, 12 * 60 + 30),
    TimeSlot::new(4, 12 * 60 + 40, 13 * 60 + 30),
    TimeSlot::new(5, 13 * 60 + 40, 14 * 60 + 30),
    TimeSlot::new(6, 14 * 60 + 40, 15 * 60 + 30),
    TimeSlot::new(7, 15 * 60 + 40, 16 * 60 + 30),
    TimeSlot::new(8, 16 * 60 + 40, 17 * 60 + 30),
];

fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A validated 24-hour wall clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn minutes(&self) -> u16 {
        (self.0.num_seconds_from_midnight() / 60) as u16
    }
}

impl FromStr for ClockTime {
    type Err = MalformedTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedTimeError {
            input: s.to_string(),
        };

        let caps = CLOCK_REGEX.captures(s.trim()).ok_or_else(malformed)?;
        let hour: u32 = caps[1].parse().map_err(|_| malformed())?;
        let minute: u32 = caps[2].parse().map_err(|_| malformed())?;

        // from_hms_opt enforces hour < 24 and minute < 60
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(ClockTime)
            .ok_or_else(malformed)
    }
}

/// Parses a `HH:MM` string into minutes since midnight.
pub fn minutes_since_midnight(clock: &str) -> Result<u16, MalformedTimeError> {
    clock.parse::<ClockTime>().map(|t| t.minutes())
}

/// Indices of every slot lying entirely inside `[start, end]`.
///
/// Partial overlap does not count: a meeting ending mid-slot does not
/// require that slot.
pub fn slots_fully_containing(start: &str, end: &str) -> Result<Vec<u8>, MalformedTimeError> {
    let start = minutes_since_midnight(start)?;
    let end = minutes_since_midnight(end)?;
    Ok(slots_within(start, end))
}

/// Same as [`slots_fully_containing`] for already-parsed minute values.
pub fn slots_within(start: u16, end: u16) -> Vec<u8> {
    TIME_SLOTS
        .iter()
        .filter(|slot| slot.start >= start && slot.end <= end)
        .map(|slot| slot.index)
        .collect()
}
