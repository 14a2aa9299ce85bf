use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Lifecycle state of a task.
///
/// Wire codes are SCREAMING_SNAKE_CASE (`TODO`, `IN_PROGRESS`, ...) and parse
/// case-insensitively; [`TaskStatusCode::label`] returns the fixed display label.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TaskStatusCode {
    #[default]
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl TaskStatusCode {
    /// Fixed display label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "À faire",
            Self::InProgress => "En cours",
            Self::Done => "Terminé",
            Self::Cancelled => "Annulé",
        }
    }
}

/// Urgency of a task. New tasks default to [`TaskPriority::Medium`].
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Fixed display label for this priority.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Faible",
            Self::Medium => "Moyenne",
            Self::High => "Élevée",
            Self::Urgent => "Urgente",
        }
    }
}

/// Role a user holds inside a project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum UserRole {
    Admin,
    Member,
    Observer,
}

impl UserRole {
    /// Fixed display label for this role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrateur",
            Self::Member => "Membre",
            Self::Observer => "Observateur",
        }
    }
}

/// Severity of an inbox notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum NotificationType {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationType {
    /// Fixed display label for this notification type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Information",
            Self::Warning => "Avertissement",
            Self::Error => "Erreur",
            Self::Success => "Succès",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_codes_are_screaming_snake_case() {
        assert_eq!(TaskStatusCode::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(TaskPriority::Urgent.to_string(), "URGENT");
        assert_eq!(UserRole::Observer.to_string(), "OBSERVER");
        assert_eq!(NotificationType::Success.to_string(), "SUCCESS");
    }

    #[test]
    fn parsing_ignores_ascii_case() {
        assert_eq!(TaskStatusCode::from_str("in_progress").unwrap(), TaskStatusCode::InProgress);
        assert_eq!(TaskPriority::from_str("Urgent").unwrap(), TaskPriority::Urgent);
        assert!(UserRole::from_str("SUPERUSER").is_err());
    }

    #[test]
    fn defaults_match_the_backend() {
        assert_eq!(TaskStatusCode::default(), TaskStatusCode::Todo);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }
}
