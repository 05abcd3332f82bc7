//! Day designators on meeting times and weekday name normalization.

use crate::grid::Weekday;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Placeholder the catalog uses for meetings that have no schedule yet.
pub const UNSCHEDULED_TEXT: &str = "No Timestamp Added Yet";

// Both variants of the placeholder seen in catalog data start this way
static UNSCHEDULED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)no timestamp").unwrap());

/// Maps a weekday name or abbreviation to its day index.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Weekend
/// days resolve to 5 and 6; they exist on the calendar but never on the
/// teaching grid, so they can never satisfy an availability.
pub fn normalize_day_name(text: &str) -> Option<u8> {
    let index = match text.trim().to_lowercase().as_str() {
        "monday" | "mon" => 0,
        "tuesday" | "tue" | "tues" => 1,
        "wednesday" | "wed" => 2,
        "thursday" | "thu" | "thur" | "thurs" => 3,
        "friday" | "fri" => 4,
        "saturday" | "sat" => 5,
        "sunday" | "sun" => 6,
        _ => return None,
    };
    Some(index)
}

/// The day a meeting takes place on, as recorded in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDay", into = "RawDay")]
pub enum DayDesignator {
    /// Canonical day index.
    Weekday(u8),
    /// Free-text day name that still needs normalizing.
    RawDayName(String),
    /// Placeholder: the department has not published a time yet. Holds the
    /// placeholder text as the catalog wrote it.
    Unscheduled(String),
}

impl DayDesignator {
    pub fn is_unscheduled(&self) -> bool {
        matches!(self, DayDesignator::Unscheduled(_))
    }

    /// Resolves to a day index. `None` for unrecognized names and for
    /// unscheduled placeholders.
    pub fn resolve(&self) -> Option<u8> {
        match self {
            DayDesignator::Weekday(index) => Some(*index),
            DayDesignator::RawDayName(name) => normalize_day_name(name),
            DayDesignator::Unscheduled(_) => None,
        }
    }

    /// Text shown for this day on a course card.
    pub fn label(&self) -> String {
        match self {
            DayDesignator::Weekday(index) => Weekday::from_index(*index)
                .map(|d| d.label().to_string())
                .unwrap_or_else(|| index.to_string()),
            DayDesignator::RawDayName(name) | DayDesignator::Unscheduled(name) => name.clone(),
        }
    }
}

/// Wire form of the `day` field: either a number or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDay {
    Index(i64),
    Text(String),
}

impl From<RawDay> for DayDesignator {
    fn from(raw: RawDay) -> Self {
        match raw {
            RawDay::Index(n) => match u8::try_from(n) {
                Ok(index) => DayDesignator::Weekday(index),
                Err(_) => DayDesignator::RawDayName(n.to_string()),
            },
            RawDay::Text(text) if UNSCHEDULED_REGEX.is_match(&text) => DayDesignator::Unscheduled(text),
            RawDay::Text(text) => DayDesignator::RawDayName(text),
        }
    }
}

impl From<DayDesignator> for RawDay {
    fn from(day: DayDesignator) -> Self {
        match day {
            DayDesignator::Weekday(index) => RawDay::Index(index as i64),
            DayDesignator::RawDayName(name) | DayDesignator::Unscheduled(name) => RawDay::Text(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_names() {
        assert_eq!(normalize_day_name("monday"), Some(0));
        assert_eq!(normalize_day_name("Tuesday"), Some(1));
        assert_eq!(normalize_day_name("  WEDNESDAY "), Some(2));
        assert_eq!(normalize_day_name("Thursday"), Some(3));
        assert_eq!(normalize_day_name("Friday"), Some(4));
    }

    #[test]
    fn test_normalize_abbreviations() {
        assert_eq!(normalize_day_name("Mon"), Some(0));
        assert_eq!(normalize_day_name("tues"), Some(1));
        assert_eq!(normalize_day_name("Thurs"), Some(3));
        assert_eq!(normalize_day_name("fri"), Some(4));
    }

    #[test]
    fn test_normalize_weekend_and_unknown() {
        assert_eq!(normalize_day_name("Saturday"), Some(5));
        assert_eq!(normalize_day_name("sun"), Some(6));
        assert_eq!(normalize_day_name("xyz"), None);
        assert_eq!(normalize_day_name("mo"), None);
        assert_eq!(normalize_day_name(""), None);
    }

    #[test]
    fn test_decode_day_designator() {
        let day: DayDesignator = serde_json::from_str("2").unwrap();
        assert_eq!(day, DayDesignator::Weekday(2));

        let day: DayDesignator = serde_json::from_str("\"Tuesday\"").unwrap();
        assert_eq!(day, DayDesignator::RawDayName("Tuesday".to_string()));

        let day: DayDesignator = serde_json::from_str(
            "\"No Timestamp Added Yet, Please Check Announcements Of The Department.\"",
        )
        .unwrap();
        assert!(day.is_unscheduled());

        let day: DayDesignator = serde_json::from_str("-1").unwrap();
        assert_eq!(day.resolve(), None);
    }

    #[test]
    fn test_unscheduled_encodes_as_placeholder() {
        let json = serde_json::to_string(&DayDesignator::Unscheduled(UNSCHEDULED_TEXT.into())).unwrap();
        assert_eq!(json, format!("\"{UNSCHEDULED_TEXT}\""));
        let json = serde_json::to_string(&DayDesignator::Weekday(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(DayDesignator::Weekday(0).label(), "Monday");
        assert_eq!(DayDesignator::Weekday(6).label(), "6");
        assert_eq!(DayDesignator::RawDayName("Fri".into()).label(), "Fri");
        assert_eq!(DayDesignator::Unscheduled(UNSCHEDULED_TEXT.into()).label(), UNSCHEDULED_TEXT);
    }

    #[test]
    fn test_long_placeholder_text_is_preserved() {
        let text = "No Timestamp Added Yet, Please Check Announcements Of The Department.";
        let day: DayDesignator = serde_json::from_str(&format!("\"{text}\"")).unwrap();
        assert_eq!(day, DayDesignator::Unscheduled(text.to_string()));
        assert_eq!(day.label(), text);
        assert_eq!(serde_json::to_string(&day).unwrap(), format!("\"{text}\""));
    }
}
