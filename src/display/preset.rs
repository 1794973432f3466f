//! Filter preset display formatting

use tabled::Tabled;

use super::render_table;
use crate::models::FilterPreset;

#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Filters")]
    filters: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Format presets as a table
pub fn format_preset_list(presets: &[FilterPreset]) -> String {
    if presets.is_empty() {
        return "No saved presets.".to_string();
    }

    let rows: Vec<_> = presets
        .iter()
        .map(|p| PresetRow {
            id: p.id.to_string(),
            name: p.name.clone(),
            filters: p.filters.describe(),
            created: p.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    render_table(rows, &[])
}

/// Format a single preset's details
pub fn format_preset_details(preset: &FilterPreset) -> String {
    let filters = &preset.filters;
    let mut output = String::new();

    output.push_str(&format!("Preset: {}\n", preset.name));
    output.push_str(&format!("  ID:          {}\n", preset.id));
    output.push_str(&format!(
        "  Created:     {}\n",
        preset.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if filters.is_empty() {
        output.push_str("  Filters:     none\n");
        return output;
    }

    if !filters.categories.is_empty() {
        let names: Vec<_> = filters.categories.iter().map(|c| c.name()).collect();
        output.push_str(&format!("  Categories:  {}\n", names.join(", ")));
    }
    if let Some(preset) = filters.date_preset {
        output.push_str(&format!("  Date preset: {}\n", preset.label()));
    }
    if let Some(start) = filters.start_date {
        output.push_str(&format!("  From:        {}\n", start));
    }
    if let Some(end) = filters.end_date {
        output.push_str(&format!("  Until:       {}\n", end));
    }
    if let Some(min) = filters.min_amount {
        output.push_str(&format!("  Min amount:  {}\n", min));
    }
    if let Some(max) = filters.max_amount {
        output.push_str(&format!("  Max amount:  {}\n", max));
    }
    if let Some(query) = filters.search_query() {
        output.push_str(&format!("  Search:      \"{}\"\n", query));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DatePreset, FilterSpec, Money};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_preset_list(&[]), "No saved presets.");
    }

    #[test]
    fn test_list_describes_filters() {
        let preset = FilterPreset::new(
            "Cheap food",
            FilterSpec::new()
                .categories([Category::Food])
                .amount_range(None, Some(Money::from_cents(1000))),
        );
        let output = format_preset_list(&[preset]);
        assert!(output.contains("Cheap food"));
        assert!(output.contains("categories: Food"));
        assert!(output.contains("amount: <= $10.00"));
    }

    #[test]
    fn test_details() {
        let preset = FilterPreset::new(
            "Recent",
            FilterSpec::new().preset(DatePreset::Last3Months).search("  taxi "),
        );
        let output = format_preset_details(&preset);
        assert!(output.contains("Preset: Recent"));
        assert!(output.contains("Date preset: Last 3 Months"));
        assert!(output.contains("Search:      \"taxi\""));
        assert!(!output.contains("Categories"));
    }
}
