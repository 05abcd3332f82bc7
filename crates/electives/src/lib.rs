//! Elective course catalog with weekly availability filtering.
//!
//! The core (`grid`, `day`, `availability`, `compat`, `classify`, `filter`)
//! is synchronous and pure: it borrows a read-only catalog snapshot and
//! returns new derived sequences. `catalog` loads snapshots; `render` and
//! `server` are thin presentation surfaces on top.

pub mod availability;
pub mod catalog;
pub mod classify;
pub mod compat;
pub mod config;
pub mod day;
pub mod filter;
pub mod grid;
pub mod render;
pub mod server;
pub mod types;

pub use availability::{Availability, AvailabilityError, DaySelection, DaySlots};
pub use catalog::{Catalog, CatalogError, CatalogSource, Course, MeetingTime, Section};
pub use classify::{has_unscheduled_section, has_valid_schedule};
pub use compat::{is_course_compatible, is_section_compatible};
pub use day::{normalize_day_name, DayDesignator};
pub use filter::{filter_catalog, filter_catalog_views, visible_sections, CatalogQuery, CourseView};
pub use grid::{minutes_since_midnight, slots_fully_containing, MalformedTimeError, TimeSlot, Weekday};
