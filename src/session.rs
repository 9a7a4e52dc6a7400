//! Per-session portal state.
//!
//! The state is threaded explicitly through every listing and selection
//! operation: it comes in with the request and goes back out with the
//! response. Nothing here is shared between sessions.

use serde::{Deserialize, Serialize};

use crate::{
    pagination::{Cursor, Page, PageRequest, PageSize},
    products::{ProductId, ProductRow},
};

/// Cursor, cached rows and selection for one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Position after the last fetched page; `None` is the start of the list.
    #[serde(default)]
    pub cursor: Option<Cursor>,

    /// Rows of the most recently displayed page.
    #[serde(default)]
    pub rows: Vec<ProductRow>,

    /// Whether the gateway reported a page after the current one.
    #[serde(default)]
    pub has_next_page: bool,

    /// Most recently selected product.
    #[serde(default)]
    pub selected_id: Option<ProductId>,
}

/// Outcome of a selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The selected id changed; its details must be fetched.
    Changed(ProductId),

    /// The id was already selected.
    Unchanged(ProductId),

    /// Stale or empty selection; nothing is selected and nothing is fetched.
    Rejected,
}

impl Selection {
    /// The selected id, if the selection was accepted.
    #[must_use]
    pub fn id(&self) -> Option<&ProductId> {
        match self {
            Self::Changed(id) | Self::Unchanged(id) => Some(id),
            Self::Rejected => None,
        }
    }

    /// The id whose details must be fetched, if any.
    #[must_use]
    pub fn fetch_target(&self) -> Option<&ProductId> {
        match self {
            Self::Changed(id) => Some(id),
            Self::Unchanged(_) | Self::Rejected => None,
        }
    }
}

impl SessionState {
    /// Start pagination over and request the first page.
    pub fn restart(&mut self, first: PageSize) -> PageRequest {
        self.cursor = None;
        self.has_next_page = false;

        PageRequest::first_page(first)
    }

    /// Request the page after the current cursor.
    #[must_use]
    pub fn next_request(&self, first: PageSize) -> PageRequest {
        match &self.cursor {
            Some(cursor) => PageRequest::after(cursor.clone(), first),
            None => PageRequest::first_page(first),
        }
    }

    /// Record a successfully fetched page.
    ///
    /// The cursor only moves when the gateway returns an end cursor, so an
    /// empty trailing page never sends the next request back to the start.
    pub fn apply_page(&mut self, page: Page<ProductRow>) {
        if let Some(end_cursor) = page.end_cursor {
            self.cursor = Some(end_cursor);
        }

        self.rows = page.items;
        self.has_next_page = page.has_next_page;
    }

    /// Record a failed fetch: the cursor stays put and no rows are shown.
    pub fn apply_failure(&mut self) {
        self.rows.clear();
    }

    /// Select the row at `index` of the cached page.
    pub fn select_row(&mut self, index: usize) -> Selection {
        let Some(row) = self.rows.get(index) else {
            return Selection::Rejected;
        };

        let id = row.id.clone();

        self.select_id(id)
    }

    /// Select a product by id, e.g. one typed in by hand.
    pub fn select_id(&mut self, id: ProductId) -> Selection {
        if id.as_str().trim().is_empty() {
            return Selection::Rejected;
        }

        if self.selected_id.as_ref() == Some(&id) {
            return Selection::Unchanged(id);
        }

        self.selected_id = Some(id.clone());

        Selection::Changed(id)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use crate::pagination::MAX_PAGE_SIZE;

    use super::*;

    fn row(id: &str) -> ProductRow {
        ProductRow {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: dec!(1),
        }
    }

    fn page(ids: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> Page<ProductRow> {
        Page {
            items: ids.iter().map(|id| row(id)).collect(),
            end_cursor: end_cursor.map(Cursor::new),
            has_next_page,
            total_count: None,
        }
    }

    fn size(value: u32) -> PageSize {
        PageSize::clamped(i64::from(value), MAX_PAGE_SIZE)
    }

    #[test]
    fn restart_requests_the_first_page() {
        let mut state = SessionState {
            cursor: Some(Cursor::new("abc")),
            ..SessionState::default()
        };

        let request = state.restart(size(2));

        assert_eq!(request, PageRequest::first_page(size(2)));
        assert!(state.cursor.is_none(), "restart should reset the cursor");
    }

    #[test]
    fn next_request_uses_the_stored_cursor() {
        let state = SessionState {
            cursor: Some(Cursor::new("abc")),
            ..SessionState::default()
        };

        assert_eq!(
            state.next_request(size(3)),
            PageRequest::after(Cursor::new("abc"), size(3))
        );
    }

    #[test]
    fn apply_page_replaces_cursor_and_rows() {
        let mut state = SessionState::default();

        state.apply_page(page(&["a", "b"], Some("c-b"), true));

        assert_eq!(state.cursor, Some(Cursor::new("c-b")));
        assert_eq!(state.rows.len(), 2);
        assert!(state.has_next_page);
    }

    #[test]
    fn empty_trailing_page_keeps_cursor() {
        let mut state = SessionState {
            cursor: Some(Cursor::new("c-e")),
            ..SessionState::default()
        };

        state.apply_page(page(&[], None, false));

        assert_eq!(state.cursor, Some(Cursor::new("c-e")));
        assert!(state.rows.is_empty());
    }

    #[test]
    fn failure_clears_rows_without_moving_cursor() {
        let mut state = SessionState::default();

        state.apply_page(page(&["a"], Some("c-a"), true));
        state.apply_failure();

        assert_eq!(state.cursor, Some(Cursor::new("c-a")));
        assert!(state.rows.is_empty());
    }

    #[test]
    fn select_row_on_empty_page_is_rejected() {
        let mut state = SessionState::default();

        assert_eq!(state.select_row(0), Selection::Rejected);
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn select_row_out_of_range_is_rejected() {
        let mut state = SessionState::default();

        state.apply_page(page(&["a", "b"], Some("c-b"), false));

        let selection = state.select_row(2);

        assert_eq!(selection, Selection::Rejected);
        assert!(selection.id().is_none());
        assert!(selection.fetch_target().is_none());
    }

    #[test]
    fn select_row_returns_first_column_id() {
        let mut state = SessionState::default();

        state.apply_page(page(&["a", "b"], Some("c-b"), false));

        assert_eq!(state.select_row(1), Selection::Changed(ProductId::new("b")));
        assert_eq!(state.selected_id, Some(ProductId::new("b")));
    }

    #[test]
    fn reselecting_the_same_row_does_not_refetch() {
        let mut state = SessionState::default();

        state.apply_page(page(&["a"], Some("c-a"), false));
        state.select_row(0);

        let selection = state.select_row(0);

        assert_eq!(selection, Selection::Unchanged(ProductId::new("a")));
        assert!(selection.fetch_target().is_none());
    }

    #[test]
    fn typed_id_change_triggers_fetch() {
        let mut state = SessionState::default();

        let selection = state.select_id(ProductId::new("typed"));

        assert_eq!(selection.fetch_target(), Some(&ProductId::new("typed")));
    }

    #[test]
    fn blank_typed_id_is_rejected() {
        let mut state = SessionState::default();

        assert_eq!(state.select_id(ProductId::new("  ")), Selection::Rejected);
    }
}
