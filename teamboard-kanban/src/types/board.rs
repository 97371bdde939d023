//! Board-level types: Status, Column

use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A task's workflow stage. Doubles as the identifier of its column.
///
/// The set is fixed and ordered left-to-right; columns are never created or
/// destroyed at runtime.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl Status {
    /// All statuses in column order
    pub const ALL: [Status; 4] = [
        Status::Todo,
        Status::InProgress,
        Status::Review,
        Status::Done,
    ];

    /// The column identifier (`todo`, `in-progress`, `review`, `done`)
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Review => "review",
            Status::Done => "done",
        }
    }

    /// Look up a column identifier. Returns `None` for anything else,
    /// including task identifiers.
    pub fn from_column_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// Zero-based left-to-right position of this column
    pub fn column_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_column_id(s).ok_or_else(|| KanbanError::ColumnNotFound { id: s.to_string() })
    }
}

/// A column defines a workflow stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: Status,
    pub title: String,
    /// Display accent; carries no behavior
    pub accent: String,
}

impl Column {
    /// Create a column for the given status
    pub fn new(id: Status, title: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            accent: accent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new(Status::Review, "Review", "yellow");
        assert_eq!(col.id.as_str(), "review");
        assert_eq!(col.accent, "yellow");
    }

    #[test]
    fn test_column_id_lookup() {
        assert_eq!(Status::from_column_id("in-progress"), Some(Status::InProgress));
        assert_eq!(Status::from_column_id("In Progress"), None);
        assert_eq!(Status::from_column_id("1"), None);
    }

    #[test]
    fn test_from_str_rejects_unknown_column() {
        let err = "backlog".parse::<Status>().unwrap_err();
        assert!(matches!(err, KanbanError::ColumnNotFound { .. }));
        assert_eq!("review".parse::<Status>().unwrap(), Status::Review);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: Status = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, Status::Done);
        assert!(serde_json::from_str::<Status>("\"blocked\"").is_err());
    }
}
