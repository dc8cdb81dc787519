use serde_json::Value;
use crate::models::responses::{localized_str, number_field};

pub const UNKNOWN_ITEM_NAME: &str = "Desconhecido";

/// The handful of item fields the item card shows.
///
/// Items are kept as opaque JSON on the wire; this is read leniently with
/// defaults for anything missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSummary {
    pub id: Option<u64>,
    pub name: String,
    pub level: Option<i64>,
    pub price: i64,
    pub has_recipe: bool,
}

impl ItemSummary {
    pub fn from_value(item: &Value, language: &str) -> Self {
        Self {
            id: item.get("id").and_then(Value::as_u64),
            name: localized_str(item, "name", language)
                .unwrap_or(UNKNOWN_ITEM_NAME)
                .to_string(),
            level: number_field(item, "level"),
            price: number_field(item, "price").unwrap_or(0),
            has_recipe: item.get("hasRecipe").and_then(Value::as_bool).unwrap_or(false),
        }
    }

    /// Whether a recipe lookup makes sense for this item
    pub fn is_craftable(&self) -> bool {
        self.has_recipe && self.id.is_some_and(|id| id != 0)
    }
}
