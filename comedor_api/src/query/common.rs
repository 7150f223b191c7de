//! Shared query infrastructure: the [`Query`] and [`PagedQuery`] traits,
//! [`QueryCommon`] fields, [`QueryPairs`] and [`SortDirection`].

use std::fmt;
use std::str::FromStr;

use url::{form_urlencoded, Url};

use crate::types::Id;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Ordered key/value pairs of every filter that is set.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// A query with no set filters leaves the URL untouched (no dangling `?`).
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    /// Form-urlencoded query string without the leading `?`.
    fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs().iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// `path` followed by `?` and the query string, or just `path` when no
    /// filter is set.
    fn to_endpoint(&self, path: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        }
    }
}

/// Query builders for paginated list endpoints. Provides the shared builder
/// methods for pagination and sorting.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed). Zero is treated as unset.
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page. Zero is treated as unset.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the column to sort by. Passed through verbatim.
    fn with_sort_by(mut self, sort_by: impl fmt::Display) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_by = Some(sort_by.to_string());
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = Some(sort_direction);
        self
    }
}

/// Sort order for list results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all list queries: pagination and sorting. Everything is
/// optional; unset fields never reach the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCommon {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl QueryCommon {
    /// Pushes `page` and `limit`. Always the first keys of a list query.
    pub fn add_paging(&self, pairs: &mut QueryPairs) {
        pairs.push_count("page", self.page);
        pairs.push_count("limit", self.limit);
    }

    /// Pushes `sortBy` and `sortDir`. Always the last keys of a list query.
    pub fn add_sorting(&self, pairs: &mut QueryPairs) {
        pairs.push_text("sortBy", self.sort_by.as_deref());
        pairs.push_value("sortDir", self.sort_direction);
    }
}

/// Ordered query pair accumulator that drops falsy values.
#[derive(Debug, Default)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strings are sent unless absent or empty.
    pub fn push_text(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.push((key, value.to_string()));
        }
    }

    /// Counts (page, limit) are sent unless absent or zero.
    pub fn push_count(&mut self, key: &'static str, value: Option<u32>) {
        if let Some(value) = value.filter(|v| *v != 0) {
            self.0.push((key, value.to_string()));
        }
    }

    /// Identifiers are sent unless absent, zero or empty.
    pub fn push_id(&mut self, key: &'static str, value: Option<&Id>) {
        if let Some(value) = value.filter(|v| !v.is_blank()) {
            self.0.push((key, value.to_string()));
        }
    }

    /// Any other value is sent whenever it is present, zero included.
    pub fn push_value<T: fmt::Display>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
    }

    pub fn into_vec(self) -> Vec<(&'static str, String)> {
        self.0
    }
}
