//! Expense categories
//!
//! The category set is closed. Everything that needs one slot per category
//! (totals, parsing, display order) goes through [`Category::ALL`] and the
//! lookup table below, so adding a category means touching this file only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// One of the six fixed expense categories
///
/// Variant order is the enumeration order used for tie-breaking and for
/// ordered maps keyed by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

/// Name and accepted aliases for each category
struct CategoryInfo {
    category: Category,
    name: &'static str,
    aliases: &'static [&'static str],
}

static CATEGORY_TABLE: [CategoryInfo; 6] = [
    CategoryInfo {
        category: Category::Food,
        name: "Food",
        aliases: &["groceries", "dining"],
    },
    CategoryInfo {
        category: Category::Transportation,
        name: "Transportation",
        aliases: &["transport", "travel"],
    },
    CategoryInfo {
        category: Category::Entertainment,
        name: "Entertainment",
        aliases: &["fun"],
    },
    CategoryInfo {
        category: Category::Shopping,
        name: "Shopping",
        aliases: &[],
    },
    CategoryInfo {
        category: Category::Bills,
        name: "Bills",
        aliases: &["utilities"],
    },
    CategoryInfo {
        category: Category::Other,
        name: "Other",
        aliases: &["misc"],
    },
];

impl Category {
    /// All categories in enumeration order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    fn info(&self) -> &'static CategoryInfo {
        // The table is indexed in enumeration order.
        &CATEGORY_TABLE[*self as usize]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|info| {
                info.name.to_lowercase() == needle || info.aliases.contains(&needle.as_str())
            })
            .map(|info| info.category)
            .ok_or_else(|| {
                let names: Vec<_> = CATEGORY_TABLE.iter().map(|info| info.name).collect();
                ExpenseError::Validation(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    s.trim(),
                    names.join(", ")
                ))
            })
    }
}
