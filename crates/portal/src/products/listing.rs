//! Page fetching shared by the load and next-page actions.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront::{pagination::PageRequest, products::ProductRow, session::SessionState};

use crate::{outcome::settle, products::session::SessionPayload, state::State};

/// Product page plus the updated session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ListingResponse {
    /// Updated session; its rows are the page to display
    pub session: SessionPayload,

    /// Size of the whole catalog, when the gateway reports it
    pub total_count: Option<i64>,

    /// Error message; the page is empty whenever this is set
    pub message: Option<String>,
}

/// Fetch `request` and fold the outcome into `session`.
///
/// A failure leaves the cursor where it was and empties the page.
pub(crate) async fn fetch_page(
    state: &State,
    action: &'static str,
    mut session: SessionState,
    request: PageRequest,
) -> ListingResponse {
    let result = settle(
        action,
        state.app.products.list_products_page(request).await,
    );

    match result {
        Ok(page) => {
            let total_count = page.total_count;

            session.apply_page(page.map(ProductRow::from));

            ListingResponse {
                session: session.into(),
                total_count,
                message: None,
            }
        }
        Err(message) => {
            session.apply_failure();

            ListingResponse {
                session: session.into(),
                total_count: None,
                message: Some(message),
            }
        }
    }
}
