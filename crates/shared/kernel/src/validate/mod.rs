//! Form-field validation predicates.
//!
//! Pure boolean checks used to gate a submission before any network call is
//! made. None of these raises or allocates an error value: invalid input is
//! simply `false`, and what that means for user-facing messaging is the
//! caller's concern.

mod account;
mod codes;
mod dates;
mod fields;

pub use account::{is_strong_password, is_valid_email, is_valid_password, is_valid_username};
pub use codes::{
    is_valid_notification_type, is_valid_task_priority, is_valid_task_status, is_valid_user_role,
};
pub use dates::{is_valid_project_start_date, is_valid_task_due_date};
pub use fields::{
    has_valid_length, is_in_range, is_not_empty, is_positive_number, is_valid_description,
    is_valid_id, is_valid_project_name, is_valid_title,
};
