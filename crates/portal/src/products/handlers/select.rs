//! Select Product Row Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::session::{Selection, SessionState};

use crate::{
    extensions::*,
    products::{
        selection::{SelectionResponse, fetch_details},
        session::SessionPayload,
    },
};

/// Select Row Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct SelectRowRequest {
    /// Session holding the displayed page
    #[serde(default)]
    pub session: SessionPayload,

    /// Zero-based row index within the displayed page
    pub index: i64,
}

/// Select Product Row Handler
///
/// Details are only fetched when the selection moves to a different product.
/// Stale indexes select nothing.
#[endpoint(tags("products"), summary = "Select Product Row")]
pub(crate) async fn handler(
    json: JsonBody<SelectRowRequest>,
    depot: &mut Depot,
) -> Result<Json<SelectionResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();

    let mut session = SessionState::try_from(request.session).or_400("invalid session")?;

    let selection = match usize::try_from(request.index) {
        Ok(index) => session.select_row(index),
        Err(_negative) => Selection::Rejected,
    };

    let selected = selection.id().cloned();
    let target = selection.fetch_target().cloned();

    Ok(Json(fetch_details(state, session, selected, target).await))
}
