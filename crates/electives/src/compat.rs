//! Compatibility of sections and courses with a student's availability.

use crate::availability::{Availability, DaySlots};
use crate::catalog::{Course, MeetingTime, Section};
use crate::grid::{slots_fully_containing, MalformedTimeError};

/// Checks a single meeting against the availability.
///
/// Placeholder meetings carry no constraint. A meeting on a day the student
/// did not select fails, as does one whose day cannot be recognized. On an
/// all-day selection the clock times are irrelevant. Otherwise every slot
/// lying fully inside the meeting must be selected; missing or malformed
/// clock times make the meeting unsatisfiable.
fn is_meeting_compatible(meeting: &MeetingTime, availability: &Availability) -> bool {
    if meeting.is_unscheduled() {
        return true;
    }

    let Some(day) = meeting.day.resolve() else {
        return false;
    };

    match availability.get(day) {
        None => false,
        Some(DaySlots::AllDay) => true,
        Some(free) => match required_slots(meeting) {
            Ok(required) => required.iter().all(|&slot| free.allows(slot)),
            Err(_) => false,
        },
    }
}

fn required_slots(meeting: &MeetingTime) -> Result<Vec<u8>, MalformedTimeError> {
    let start = meeting.start.as_deref().unwrap_or_default();
    let end = meeting.end.as_deref().unwrap_or_default();
    slots_fully_containing(start, end)
}

/// True if every meeting of the section fits the availability.
///
/// A section without meetings passes vacuously; whether unscheduled sections
/// are shown is decided by the catalog filter.
pub fn is_section_compatible(section: &Section, availability: &Availability) -> bool {
    section
        .meetings
        .iter()
        .all(|meeting| is_meeting_compatible(meeting, availability))
}

/// True if no day is selected, or at least one section of the course fits.
pub fn is_course_compatible(course: &Course, availability: &Availability) -> bool {
    availability.is_empty()
        || course
            .sections
            .iter()
            .any(|section| is_section_compatible(section, availability))
}
