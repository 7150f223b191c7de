//! Render-facing fetch state and the branches a view draws from it.

use comedor_api::types::{Paginated, PaginationMeta};
use comedor_api::ApiError;

/// Snapshot of one fetch: at most one of `data` and `error` is set, and
/// neither is set while `loading`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> ApiState<T> {
    /// State right after a fetch was started.
    pub fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: ApiError) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    pub(crate) fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(e) => Self::failed(e),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl<T> Default for ApiState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T: HasRows> ApiState<T> {
    /// Which branch to render. `Failed` and `Empty` never overlap: an error
    /// is always `Failed`, and `Empty` needs data that arrived with no rows.
    pub fn phase(&self) -> Phase<'_, T> {
        if let Some(error) = &self.error {
            return Phase::Failed(error);
        }
        match &self.data {
            _ if self.loading => Phase::Loading,
            Some(data) if data.has_rows() => Phase::Ready(data),
            Some(_) => Phase::Empty,
            None => Phase::Loading,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Phase<'a, T> {
    Loading,
    /// Error display with a retry action.
    Failed(&'a ApiError),
    /// Inline "no data" notice.
    Empty,
    Ready(&'a T),
}

/// Data that can be empty without being an error.
pub trait HasRows {
    fn has_rows(&self) -> bool;
}

impl<T> HasRows for Vec<T> {
    fn has_rows(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: HasRows> HasRows for Paginated<T> {
    fn has_rows(&self) -> bool {
        self.data.has_rows()
    }
}

/// "Page X of Y (N records)" caption. An empty result still reads as one page.
pub fn page_summary(meta: &PaginationMeta) -> String {
    format!(
        "Page {} of {} ({} records)",
        meta.page,
        meta.total_pages.max(1),
        meta.total_records
    )
}
