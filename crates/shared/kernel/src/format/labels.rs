use pmt_domain::codes::{NotificationType, TaskPriority, TaskStatusCode, UserRole};

/// Display label for a task status code, matched case-insensitively. Codes
/// outside the table pass through unchanged, original casing preserved.
#[must_use]
pub fn format_task_status(status: &str) -> String {
    status
        .parse::<TaskStatusCode>()
        .map_or_else(|_| status.to_owned(), |code| code.label().to_owned())
}

/// Display label for a task priority code; unknown codes pass through.
#[must_use]
pub fn format_task_priority(priority: &str) -> String {
    priority
        .parse::<TaskPriority>()
        .map_or_else(|_| priority.to_owned(), |code| code.label().to_owned())
}

/// Display label for a user role code; unknown codes pass through.
#[must_use]
pub fn format_user_role(role: &str) -> String {
    role.parse::<UserRole>().map_or_else(|_| role.to_owned(), |code| code.label().to_owned())
}

/// Display label for a notification type code; unknown codes pass through.
#[must_use]
pub fn format_notification_type(kind: &str) -> String {
    kind.parse::<NotificationType>()
        .map_or_else(|_| kind.to_owned(), |code| code.label().to_owned())
}
