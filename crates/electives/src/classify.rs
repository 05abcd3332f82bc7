//! Detecting courses that lack real timing data.
//!
//! These two predicates are not complements: a course with one scheduled and
//! one unscheduled section satisfies both.

use crate::catalog::Course;

/// True if any section has no meetings, or only placeholder meetings.
pub fn has_unscheduled_section(course: &Course) -> bool {
    course.sections.iter().any(|section| section.is_unscheduled())
}

/// True if any section has at least one meeting with real timing data.
pub fn has_valid_schedule(course: &Course) -> bool {
    course
        .sections
        .iter()
        .flat_map(|section| &section.meetings)
        .any(|meeting| !meeting.is_unscheduled())
}
