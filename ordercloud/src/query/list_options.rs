//! Common list options: search, sort, paging and filters.

use std::fmt;

use super::{EncodeQuery, Filters, QueryParams};

/// A sort key. Descending keys are sent with a `!` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortBy {
    Asc(String),
    Desc(String),
}

impl SortBy {
    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::Asc(field.into())
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::Desc(field.into())
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc(field) => f.write_str(field),
            Self::Desc(field) => write!(f, "!{field}"),
        }
    }
}

impl From<SortBy> for String {
    fn from(sort: SortBy) -> Self {
        sort.to_string()
    }
}

/// Search, sort, paging and filter options accepted by every list operation.
///
/// Unset fields are left out of the query entirely, so the API applies its
/// own defaults (page 1, 20 items per page).
///
/// ## Examples
///
/// ```rust
/// use ordercloud::query::{EncodeQuery, ListOptions, QueryValue, SortBy};
///
/// let options = ListOptions::new()
///     .search("widget")
///     .search_on(["ID", "Name"])
///     .sort(SortBy::desc("DateCreated"))
///     .page(2)
///     .page_size(10)
///     .filter("Status", "!Completed");
///
/// let query = options.encode_query();
/// assert_eq!(query.get("page"), Some(&QueryValue::Number(2)));
/// assert_eq!(query.get("Status"), Some(&QueryValue::Text("!Completed".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub search: Option<String>,
    pub search_on: Vec<String>,
    pub sort_by: Vec<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub filters: Filters,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Word or phrase to search for.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Fields to search on.
    pub fn search_on<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_on = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a raw sort key (`Name` or `!Name`).
    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by.push(key.into());
        self
    }

    /// Appends a typed sort key.
    pub fn sort(self, sort: SortBy) -> Self {
        self.sort_by(sort)
    }

    /// Page of results to return (1-based).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Number of results per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Adds a field filter.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<super::FilterValue>) -> Self {
        self.filters.insert(field, value);
        self
    }

    /// Replaces all filters.
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Writes these options into an existing parameter set.
    ///
    /// Reserved parameters are written first; a filter whose key is already
    /// present in `params` is skipped.
    pub(crate) fn encode_into(&self, params: &mut QueryParams) {
        params.insert_opt("search", self.search.clone());
        if !self.search_on.is_empty() {
            params.insert("searchOn", self.search_on.clone());
        }
        if !self.sort_by.is_empty() {
            params.insert("sortBy", self.sort_by.clone());
        }
        params.insert_opt("page", self.page);
        params.insert_opt("pageSize", self.page_size);

        for (field, value) in self.filters.iter() {
            params.insert_if_absent(field, value);
        }
    }
}

impl EncodeQuery for ListOptions {
    fn encode_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.encode_into(&mut params);
        params
    }
}
