use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_TYPE: &str = "Todo";
pub const DEFAULT_LIST_COLOR: &str = "#3b82f6";
pub const DEFAULT_ITEM_CATEGORY: &str = "Geral";
pub const DEFAULT_ITEM_PRIORITY: i32 = 1;

/// A named collection of items. Items are owned exclusively by their list and
/// kept in insertion order; any presentation ordering is a client concern.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Category tag ("Todo", "Shopping", "Notes", ...). Free-form, not an enum.
    #[serde(rename = "type")]
    pub kind: String,
    /// Hex color for UI display.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    /// Non-null exactly while `is_completed` is true.
    pub completed_at: Option<DateTime<Utc>>,
    pub category: String,
    /// 1 = low, 2 = medium, 3 = high. Out-of-range values pass through
    /// uninterpreted.
    pub priority: i32,
}

/// Partial update for an item. `None` means "leave the field alone", which
/// keeps an omitted field distinct from one explicitly set to an empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
    pub category: Option<String>,
    pub priority: Option<i32>,
}
