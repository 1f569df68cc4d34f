//! Paginated list responses.

use serde::{Deserialize, Serialize};

/// Paging metadata returned with every list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Meta {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    /// First and last item numbers on this page (1-based).
    pub item_range: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_key: Option<String>,
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPage<T> {
    #[serde(default)]
    pub meta: Meta,
    pub items: Vec<T>,
}

impl<T> ListPage<T> {
    /// Returns `true` if a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.meta.page < self.meta.total_pages
    }
}

impl<T> IntoIterator for ListPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
