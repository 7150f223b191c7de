use serde::{Deserialize, Serialize};

/// Pagination metadata computed by the backend. The client never recomputes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total_records: u64,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PaginationMeta {
    /// Page to request for a "previous" control, if the backend allows one.
    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous_page.then(|| self.page.saturating_sub(1).max(1))
    }

    /// Page to request for a "next" control, if the backend allows one.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page {
            self.page.checked_add(1)
        } else {
            None
        }
    }
}

/// The `{data, meta}` envelope returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: T,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}
