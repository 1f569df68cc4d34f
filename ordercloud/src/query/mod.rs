//! Query-string encoding for list operations.
//!
//! Options structs implement [`EncodeQuery`], producing an ordered
//! [`QueryParams`] set. The set keeps list values intact; the wire rendering
//! in [`QueryParams::to_pairs`] decides how each list is spelled.

mod endpoint;
mod filters;
mod list_options;

pub use endpoint::{AssignmentScope, MessageSenderAssignmentListOptions, OrderListOptions};
pub use filters::{FilterValue, Filters};
pub use list_options::{ListOptions, SortBy};

/// Parameters rendered as one comma-separated value instead of repeated keys.
const COMMA_JOINED: [&str; 2] = ["searchOn", "sortBy"];

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Plain string value.
    Text(String),
    /// Integer value (`page`, `pageSize`).
    Number(i64),
    /// Multiple values for one key.
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<&FilterValue> for QueryValue {
    fn from(value: &FilterValue) -> Self {
        match value {
            FilterValue::One(v) => Self::Text(v.clone()),
            FilterValue::Many(vs) => Self::List(vs.clone()),
        }
    }
}

/// Ordered query parameter set with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets `key` only if it is not already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value.into()));
        true
    }

    /// Sets `key` when `value` is present.
    pub fn insert_opt<V: Into<QueryValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Looks up a value.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the set as `key=value` pairs for the request URL.
    ///
    /// `searchOn` and `sortBy` lists become one comma-joined value; every
    /// other list repeats its key once per item. Empty lists are dropped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                QueryValue::Text(text) => pairs.push((key.clone(), text.clone())),
                QueryValue::Number(n) => pairs.push((key.clone(), n.to_string())),
                QueryValue::List(items) if items.is_empty() => {}
                QueryValue::List(items) if COMMA_JOINED.contains(&key.as_str()) => {
                    pairs.push((key.clone(), items.join(",")));
                }
                QueryValue::List(items) => {
                    pairs.extend(items.iter().map(|item| (key.clone(), item.clone())));
                }
            }
        }
        pairs
    }
}

/// Types that contribute query parameters to a request.
pub trait EncodeQuery {
    /// Produces the parameter set for this value.
    fn encode_query(&self) -> QueryParams;
}

impl EncodeQuery for QueryParams {
    fn encode_query(&self) -> QueryParams {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = QueryParams::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&QueryValue::Text("3".into())));
    }

    #[test]
    fn insert_if_absent_keeps_first_value() {
        let mut params = QueryParams::new();
        params.insert("page", 2u32);
        assert!(!params.insert_if_absent("page", "99"));
        assert!(params.insert_if_absent("Status", "Open"));
        assert_eq!(params.get("page"), Some(&QueryValue::Number(2)));
    }

    #[test]
    fn pairs_join_reserved_lists_and_repeat_filters() {
        let mut params = QueryParams::new();
        params.insert("searchOn", vec!["ID".to_string(), "Name".to_string()]);
        params.insert("sortBy", vec!["!DateCreated".to_string()]);
        params.insert("Status", vec!["Open".to_string(), "Completed".to_string()]);
        params.insert("empty", Vec::<String>::new());
        params.insert("pageSize", 10u32);

        assert_eq!(
            params.to_pairs(),
            vec![
                ("searchOn".to_string(), "ID,Name".to_string()),
                ("sortBy".to_string(), "!DateCreated".to_string()),
                ("Status".to_string(), "Open".to_string()),
                ("Status".to_string(), "Completed".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }
}
