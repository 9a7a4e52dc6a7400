//! Next Page Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::session::SessionState;

use crate::{
    extensions::*,
    products::{
        listing::{ListingResponse, fetch_page},
        session::SessionPayload,
    },
};

/// Next Page Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct NextPageRequest {
    /// Session returned by the previous load or next-page call
    #[serde(default)]
    pub session: SessionPayload,

    /// Requested page size; clamped into the configured bounds
    #[serde(default)]
    pub page_size: Option<i64>,
}

/// Next Page Handler
///
/// Returns the page after the session cursor. Without a cursor this is the
/// first page.
#[endpoint(tags("products"), summary = "Next Page of Products")]
pub(crate) async fn handler(
    json: JsonBody<NextPageRequest>,
    depot: &mut Depot,
) -> Result<Json<ListingResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();

    let session = SessionState::try_from(request.session).or_400("invalid session")?;
    let page_request = session.next_request(state.page_size(request.page_size));

    Ok(Json(
        fetch_page(state, "next_products_page", session, page_request).await,
    ))
}
