//! Display formatting for the fixed application locale (French).
//!
//! Every function here is total: absent, `NaN`, or malformed input maps to a
//! defined fallback (empty string, zero-equivalent, or identity) instead of an
//! error. There is no error channel in this module.

mod date;
mod labels;
mod number;
mod text;

pub use date::{
    DateInput, days_difference, format_date, format_date_time, is_future, is_past, is_today,
    is_valid_date, parse_date,
};
pub use labels::{
    format_notification_type, format_task_priority, format_task_status, format_user_role,
};
pub use number::{format_duration, format_file_size, format_number, format_percentage};
pub use text::{
    DESCRIPTION_PREVIEW_LEN, FILE_NAME_DISPLAY_LEN, format_description, format_file_name,
    format_full_name, format_project_name, format_task_title, format_username, mask_email,
};
