//! Convenience re-exports for downstream crates.

pub use crate::format::*;
pub use crate::validate::*;
pub use pmt_domain::codes::{NotificationType, TaskPriority, TaskStatusCode, UserRole};
