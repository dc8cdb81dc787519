use serde::Deserialize;
use serde_json::Value;

// API Response wrappers
#[derive(Debug, Deserialize)]
pub struct RecipesResponse {
    #[serde(default)]
    pub data: Vec<crate::models::Recipe>,
}

/// First entry of the `data` array of a list response, if any
pub fn first_data_entry(body: &Value) -> Option<Value> {
    body.get("data")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .cloned()
}

/// Localized text field, e.g. `name.pt`
pub fn localized_str<'a>(value: &'a Value, field: &str, language: &str) -> Option<&'a str> {
    value.get(field)
        .and_then(|translations| translations.get(language))
        .and_then(Value::as_str)
}

/// Integer field that may come back as a float
pub fn number_field(value: &Value, field: &str) -> Option<i64> {
    let raw = value.get(field)?;
    raw.as_i64().or_else(|| raw.as_f64().map(|n| n.round() as i64))
}
