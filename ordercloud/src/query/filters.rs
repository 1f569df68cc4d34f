//! Field filters for list operations.

use serde_json::Value;

/// Value of a single filter: one expression, or several that are ORed by
/// repeating the key.
///
/// Operator prefixes (`!`, `>`, `<`, `>=`, `<=`), `*` wildcards and `|`
/// alternation are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::One(value.to_string())
    }
}

/// Ordered map from model field name to filter value.
///
/// Keys are model field names and may be dotted paths into extended
/// properties (`xp.Color`). They are not checked against any model; the API
/// rejects unknown fields itself.
///
/// ## Examples
///
/// ```rust
/// use ordercloud::query::{FilterValue, Filters};
///
/// let filters = Filters::new()
///     .with("Status", "!Completed")
///     .with("xp.Region", vec!["EU", "US"]);
///
/// assert_eq!(filters.len(), 2);
///
/// let nested = Filters::from_json(&serde_json::json!({ "xp": { "Color": "red" } }));
/// assert_eq!(nested.get("xp.Color"), Some(&FilterValue::from("red")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    /// Creates an empty filter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, returning the map for chaining.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a filter, replacing any existing value for the same field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Looks up the filter for a field.
    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over fields and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds filters from a JSON object, flattening nested objects into
    /// dotted keys.
    ///
    /// Arrays become multi-valued filters and `null` leaves are skipped.
    /// Anything other than an object yields an empty map.
    pub fn from_json(value: &Value) -> Self {
        let mut filters = Self::new();
        if let Value::Object(map) = value {
            for (key, child) in map {
                filters.flatten(key.clone(), child);
            }
        }
        filters
    }

    fn flatten(&mut self, key: String, value: &Value) {
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (child_key, child) in map {
                    self.flatten(format!("{key}.{child_key}"), child);
                }
            }
            Value::Array(items) => {
                let values = items.iter().filter_map(scalar_text).collect::<Vec<_>>();
                self.insert(key, FilterValue::Many(values));
            }
            scalar => {
                if let Some(text) = scalar_text(scalar) {
                    self.insert(key, FilterValue::One(text));
                }
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operators_pass_through_verbatim() {
        let filters = Filters::new()
            .with("Total", ">=100")
            .with("Name", "Acme*|Globex*")
            .with("Status", "!Completed");
        assert_eq!(filters.get("Total"), Some(&FilterValue::One(">=100".into())));
        assert_eq!(filters.get("Name"), Some(&FilterValue::One("Acme*|Globex*".into())));
    }

    #[test]
    fn flattens_nested_objects() {
        let filters = Filters::from_json(&json!({
            "Status": "Open",
            "xp": { "Color": "red", "Size": { "Code": 42 } },
            "IsSubmitted": true,
            "ID": ["a", "b"],
            "Ignored": null
        }));

        let keys: Vec<_> = filters.iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&"xp.Color"));
        assert!(keys.contains(&"xp.Size.Code"));
        assert!(!keys.contains(&"Ignored"));
        assert_eq!(filters.get("xp.Size.Code"), Some(&FilterValue::One("42".into())));
        assert_eq!(filters.get("IsSubmitted"), Some(&FilterValue::One("true".into())));
        assert_eq!(filters.get("ID"), Some(&FilterValue::from(vec!["a", "b"])));
    }

    #[test]
    fn non_object_json_is_empty() {
        assert!(Filters::from_json(&json!("Status")).is_empty());
        assert!(Filters::from_json(&json!([1, 2])).is_empty());
    }

    #[test]
    fn insert_replaces_existing_field() {
        let mut filters = Filters::new().with("Status", "Open");
        filters.insert("Status", "Completed");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get("Status"), Some(&FilterValue::One("Completed".into())));
    }
}
