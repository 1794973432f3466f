//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Kind of record a log entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Preset,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Preset => write!(f, "Preset"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Display ID of the affected record
    pub entity_id: String,

    /// Expense description or preset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Record before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Record after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Field-level change summary for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn with_operation(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly created record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry =
            Self::with_operation(Operation::Create, entity_type, entity_id.into(), entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for an edited record
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        let mut entry =
            Self::with_operation(Operation::Update, entity_type, entity_id.into(), entity_name);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.diff_summary = diff_summary;
        entry
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry =
            Self::with_operation(Operation::Delete, entity_type, entity_id.into(), entity_name);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// One-line rendering used by `expenses history --plain`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Preset.to_string(), "Preset");
    }

    #[test]
    fn test_create_entry_has_only_after() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-1234abcd",
            Some("Groceries".to_string()),
            &json!({"amount": 4200}),
        );
        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!({"amount": 4200})));
    }

    #[test]
    fn test_update_entry_keeps_both_sides() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "exp-1234abcd",
            None,
            &json!({"amount": 100}),
            &json!({"amount": 250}),
            Some("amount: $1.00 -> $2.50".to_string()),
        );
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.diff_summary.as_deref(), Some("amount: $1.00 -> $2.50"));
    }

    #[test]
    fn test_delete_entry_has_only_before() {
        let entry = AuditEntry::delete(EntityType::Preset, "pre-0000aaaa", None, &json!({}));
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialized_form_is_lowercase() {
        let entry = AuditEntry::create(EntityType::Expense, "exp-1", None, &json!({}));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"create\""));
        assert!(line.contains("\"entity_type\":\"expense\""));
        assert!(!line.contains("diff_summary"));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "exp-1234abcd",
            Some("Lunch".to_string()),
            &json!({}),
            &json!({}),
            Some("category: Food -> Other".to_string()),
        );
        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Expense exp-1234abcd (Lunch)"));
        assert!(formatted.contains("Changes: category: Food -> Other"));
    }
}
