//! Load Products Handler

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

/// Load Products Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoadProductsRequest {
    /// Current session, if any
    #[serde(default)]
    pub session: SessionPayload,

    /// Requested page size; clamped into the configured bounds
    #[serde(default)]
    pub page_size: Option<i64>,
}

/// Load Products Handler
///
/// Restarts pagination and returns the first page.
#[endpoint(tags("products"), summary = "Load Products")]
pub(crate) async fn handler(
    json: JsonBody<LoadProductsRequest>,
    depot: &mut Depot,
) -> Result<Json<ListingResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();

    let mut session = SessionState::try_from(request.session).or_400("invalid session")?;
    let page_request = session.restart(state.page_size(request.page_size));

    Ok(Json(
        fetch_page(state, "load_products", session, page_request).await,
    ))
}
