//! Audit history formatting

use tabled::Tabled;

use super::render_table;
use crate::audit::AuditEntry;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Type")]
    entity_type: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Changes")]
    changes: String,
}

/// Format audit entries as a table, newest last
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.".to_string();
    }

    let rows: Vec<_> = entries
        .iter()
        .map(|entry| HistoryRow {
            when: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            action: entry.operation.to_string(),
            entity_type: entry.entity_type.to_string(),
            id: entry.entity_id.clone(),
            name: entry.entity_name.clone().unwrap_or_default(),
            changes: entry.diff_summary.clone().unwrap_or_default(),
        })
        .collect();

    render_table(rows, &[])
}
