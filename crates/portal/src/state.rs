//! State

use std::sync::Arc;

use storefront::pagination::PageSize;
use storefront_app::context::AppContext;

use crate::config::listing::ListingConfig;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) listing: ListingConfig,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, listing: ListingConfig) -> Self {
        Self { app, listing }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, listing: ListingConfig) -> Arc<Self> {
        Arc::new(Self::new(app, listing))
    }

    /// Clamp a raw page size from the UI into the configured bounds.
    #[must_use]
    pub(crate) fn page_size(&self, requested: Option<i64>) -> PageSize {
        let requested = requested.unwrap_or_else(|| i64::from(self.listing.default_page_size));

        PageSize::clamped(requested, self.listing.max_page_size)
    }
}
