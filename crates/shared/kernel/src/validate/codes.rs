use pmt_domain::codes::{NotificationType, TaskPriority, TaskStatusCode, UserRole};

/// Case-insensitive membership in the task status enumeration.
#[must_use]
pub fn is_valid_task_status(status: &str) -> bool {
    status.parse::<TaskStatusCode>().is_ok()
}

/// Case-insensitive membership in the task priority enumeration.
#[must_use]
pub fn is_valid_task_priority(priority: &str) -> bool {
    priority.parse::<TaskPriority>().is_ok()
}

/// Case-insensitive membership in the user role enumeration.
#[must_use]
pub fn is_valid_user_role(role: &str) -> bool {
    role.parse::<UserRole>().is_ok()
}

/// Case-insensitive membership in the notification type enumeration.
#[must_use]
pub fn is_valid_notification_type(kind: &str) -> bool {
    kind.parse::<NotificationType>().is_ok()
}
