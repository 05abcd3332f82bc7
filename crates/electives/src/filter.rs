//! The catalog filter pipeline: text search, then the unscheduled-visibility
//! policy combined with availability compatibility.
//!
//! Every function here is a pure function of its arguments and borrows the
//! catalog; results keep catalog order.

use crate::availability::Availability;
use crate::catalog::{Course, Section};
use crate::classify::{has_unscheduled_section, has_valid_schedule};
use crate::compat::{is_course_compatible, is_section_compatible};

/// Inputs chosen by the student for one recomputation.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: String,
    pub hide_unscheduled: bool,
    pub availability: Availability,
}

/// An included course together with the sections to display for it.
#[derive(Debug, Clone)]
pub struct CourseView<'c> {
    pub course: &'c Course,
    pub sections: Vec<&'c Section>,
}

/// Case-insensitive substring match on departmental code, numeric code, or
/// name. An empty term matches everything.
pub fn matches_search(course: &Course, term: &str) -> bool {
    let term = term.to_lowercase();
    [&course.code.departmental, &course.code.numeric, &course.name]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Whether a course that matched the search is kept.
///
/// With `hide_unscheduled`, a course needs real timing data somewhere and a
/// compatible section. Without it, any unscheduled section lets the course
/// through regardless of availability.
fn passes_schedule_policy(course: &Course, hide_unscheduled: bool, availability: &Availability) -> bool {
    if hide_unscheduled {
        has_valid_schedule(course) && is_course_compatible(course, availability)
    } else {
        has_unscheduled_section(course) || is_course_compatible(course, availability)
    }
}

/// Filters the catalog down to the courses to display, in catalog order.
pub fn filter_catalog<'c>(
    catalog: &'c [Course],
    search: &str,
    hide_unscheduled: bool,
    availability: &Availability,
) -> Vec<&'c Course> {
    catalog
        .iter()
        .filter(|course| matches_search(course, search))
        .filter(|course| passes_schedule_policy(course, hide_unscheduled, availability))
        .collect()
}

/// Sections of an included course to display: all of them when no day is
/// selected, otherwise only the individually compatible ones.
pub fn visible_sections<'c>(course: &'c Course, availability: &Availability) -> Vec<&'c Section> {
    course
        .sections
        .iter()
        .filter(|section| availability.is_empty() || is_section_compatible(section, availability))
        .collect()
}

/// Runs the whole pipeline and pairs each course with its visible sections.
pub fn filter_catalog_views<'c>(catalog: &'c [Course], query: &CatalogQuery) -> Vec<CourseView<'c>> {
    filter_catalog(catalog, &query.search, query.hide_unscheduled, &query.availability)
        .into_iter()
        .map(|course| CourseView {
            course,
            sections: visible_sections(course, &query.availability),
        })
        .collect()
}
