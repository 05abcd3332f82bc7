/// Plain-text course cards for the terminal
use crate::catalog::{MeetingTime, Section};
use crate::filter::CourseView;
use std::fmt::Write;

fn render_meeting(out: &mut String, meeting: &MeetingTime) {
    if meeting.is_unscheduled() {
        let _ = writeln!(out, "    {}", meeting.day.label());
        return;
    }

    let _ = write!(
        out,
        "    {} {} - {}",
        meeting.day.label(),
        meeting.start.as_deref().unwrap_or("?"),
        meeting.end.as_deref().unwrap_or("?"),
    );
    if let Some(room) = meeting.room.as_deref().filter(|r| !r.is_empty()) {
        let _ = write!(out, "  Room: {room}");
    }
    out.push('\n');
}

fn render_section(out: &mut String, section: &Section) {
    let _ = writeln!(out, "  Section {}", section.section_id);
    for meeting in &section.meetings {
        render_meeting(out, meeting);
    }

    let instructors = section.display_instructors();
    if !instructors.is_empty() {
        let _ = writeln!(out, "    Instructors: {}", instructors.join(" • "));
    }
}

/// Renders one course with the sections chosen for display
pub fn course_card(view: &CourseView<'_>) -> String {
    let course = view.course;
    let mut out = String::new();

    let _ = writeln!(out, "{}", course.code.departmental);
    let _ = writeln!(out, "  Code: {}", course.code.numeric);
    let _ = writeln!(out, "  {}", course.name);
    let _ = writeln!(out, "  Credits: {}", course.credits);
    for section in &view.sections {
        render_section(&mut out, section);
    }

    out
}

/// Renders every card followed by the course count
pub fn summary(views: &[CourseView<'_>]) -> String {
    let mut out = String::new();
    for view in views {
        out.push_str(&course_card(view));
        out.push('\n');
    }
    let _ = writeln!(out, "Total Courses: {}", views.len());
    out
}
