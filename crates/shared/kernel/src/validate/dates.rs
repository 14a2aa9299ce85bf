use crate::format::parse_date;
use chrono::Local;

/// A project may start today or later; a start date strictly in the past is
/// rejected. Unparseable input is rejected.
#[must_use]
pub fn is_valid_project_start_date(date: &str) -> bool {
    parse_date(date).is_some_and(|d| d.date_naive() >= Local::now().date_naive())
}

/// A task due date must lie strictly after the current instant.
#[must_use]
pub fn is_valid_task_due_date(date: &str) -> bool {
    parse_date(date).is_some_and(|d| d > Local::now())
}
