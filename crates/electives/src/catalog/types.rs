/// Types for the elective course catalog
use crate::day::{DayDesignator, UNSCHEDULED_TEXT};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Instructor placeholder used when no instructor has been assigned
pub const STAFF_PLACEHOLDER: &str = "STAFF";

/// Structured course code (e.g., departmental "PHIL", numeric "1001")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCode {
    pub departmental: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub numeric: String,

    /// How the scraper matched this course to its code, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<String>,
}

/// Credit value; most catalogs use numbers, some use text such as "3(3-0)"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credits {
    Number(f64),
    Text(String),
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credits::Number(n) => write!(f, "{n}"),
            Credits::Text(t) => f.write_str(t),
        }
    }
}

/// Section identifier as it appears in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionId::Number(n) => write!(f, "{n}"),
            SectionId::Text(t) => f.write_str(t),
        }
    }
}

/// One weekly meeting of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingTime {
    pub day: DayDesignator,

    /// Start clock time ("HH:MM"), kept raw until compatibility checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl MeetingTime {
    /// A meeting with no published time yet, using the short placeholder
    pub fn unscheduled() -> Self {
        Self {
            day: DayDesignator::Unscheduled(UNSCHEDULED_TEXT.to_string()),
            start: None,
            end: None,
            room: None,
        }
    }

    pub fn is_unscheduled(&self) -> bool {
        self.day.is_unscheduled()
    }
}

/// An enrollable offering of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub section_id: SectionId,

    #[serde(rename = "times", default, deserialize_with = "null_as_empty")]
    pub meetings: Vec<MeetingTime>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructors: Vec<String>,
}

impl Section {
    /// True if the section has no meetings, or only placeholder meetings
    pub fn is_unscheduled(&self) -> bool {
        self.meetings.iter().all(MeetingTime::is_unscheduled)
    }

    /// Instructor names to show, without the staff placeholder
    pub fn display_instructors(&self) -> Vec<&str> {
        self.instructors
            .iter()
            .map(String::as_str)
            .filter(|name| !name.trim().eq_ignore_ascii_case(STAFF_PLACEHOLDER))
            .collect()
    }
}

/// A course in the elective catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    pub credits: Credits,
    pub sections: Vec<Section>,
}

/// Accepts `"1001"`, `1001`, or `null` for fields the scraper emits loosely
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Treats an explicit `null` list the same as a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
