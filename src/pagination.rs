//! Cursor pagination.
//!
//! Forward-only, Relay-style pagination over the gateway's
//! `productsCursor(after, first)` connection. The gateway alone decides
//! ordering; a [`Cursor`] is an opaque token marking the position after the
//! last item of a page, and an absent cursor means "start of list".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the UI supplies none.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the listing accepts by default.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Opaque position token issued by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw cursor token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Page size errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageSizeError {
    /// A page must hold at least one item
    #[error("page size must be at least 1")]
    Zero,

    /// The requested size exceeds the configured maximum
    #[error("page size {requested} exceeds the maximum of {maximum}")]
    AboveMaximum {
        /// Requested size
        requested: u32,

        /// Configured maximum
        maximum: u32,
    },
}

/// Number of items requested per page, always within `1..=maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageSize(u32);

impl PageSize {
    /// Build a page size, rejecting values outside `1..=maximum`.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeError`] when `value` is zero or above `maximum`.
    pub fn new(value: u32, maximum: u32) -> Result<Self, PageSizeError> {
        if value == 0 {
            return Err(PageSizeError::Zero);
        }

        if value > maximum {
            return Err(PageSizeError::AboveMaximum {
                requested: value,
                maximum,
            });
        }

        Ok(Self(value))
    }

    /// Clamp a raw UI value into `1..=maximum`.
    #[must_use]
    pub fn clamped(value: i64, maximum: u32) -> Self {
        let maximum = maximum.max(1);
        let value = u32::try_from(value.max(1)).unwrap_or(maximum);

        Self(value.min(maximum))
    }

    /// The size as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// The `(after, first)` window sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Fetch items strictly after this cursor; `None` starts at the beginning.
    pub after: Option<Cursor>,

    /// Maximum number of items to return.
    pub first: PageSize,
}

impl PageRequest {
    /// Request the first page.
    #[must_use]
    pub const fn first_page(first: PageSize) -> Self {
        Self { after: None, first }
    }

    /// Request the page following `cursor`.
    #[must_use]
    pub const fn after(cursor: Cursor, first: PageSize) -> Self {
        Self {
            after: Some(cursor),
            first,
        }
    }
}

/// Connection wire shape (`edges`, `pageInfo`, `totalCount`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Items with their individual cursors
    pub edges: Vec<Edge<T>>,

    /// Position information for the page
    pub page_info: PageInfo,

    /// Size of the whole collection, when the gateway reports it
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// A node and its cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Position of this node
    pub cursor: Cursor,

    /// The item itself
    pub node: T,
}

/// Page position information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page follows
    pub has_next_page: bool,

    /// Cursor of the last item in the page
    #[serde(default)]
    pub end_cursor: Option<Cursor>,
}

/// A fetched page, flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in gateway order
    pub items: Vec<T>,

    /// Cursor to pass as `after` for the next page
    pub end_cursor: Option<Cursor>,

    /// Whether another page follows
    pub has_next_page: bool,

    /// Size of the whole collection, when known
    pub total_count: Option<i64>,
}

impl<T> Page<T> {
    /// Convert every item, keeping the position information.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            end_cursor: self.end_cursor,
            has_next_page: self.has_next_page,
            total_count: self.total_count,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            end_cursor: None,
            has_next_page: false,
            total_count: None,
        }
    }
}

impl<T> From<Connection<T>> for Page<T> {
    fn from(connection: Connection<T>) -> Self {
        Self {
            items: connection.edges.into_iter().map(|edge| edge.node).collect(),
            end_cursor: connection.page_info.end_cursor,
            has_next_page: connection.page_info.has_next_page,
            total_count: connection.total_count,
        }
    }
}
