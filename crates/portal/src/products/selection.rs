//! Detail fetching shared by row selection and view-by-id.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront::{products::ProductId, session::SessionState};

use crate::{
    outcome::settle,
    products::{session::SessionPayload, views},
    state::State,
};

/// Selection result plus the updated session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SelectionResponse {
    /// Updated session
    pub session: SessionPayload,

    /// Selected product, if the selection was accepted
    pub selected_id: Option<String>,

    /// Product details; only set when they were fetched
    pub details: Option<String>,

    /// Error or notice in place of the details
    pub message: Option<String>,
}

/// Fetch the details of `target` (if any) and build the response.
pub(crate) async fn fetch_details(
    state: &State,
    session: SessionState,
    selected: Option<ProductId>,
    target: Option<ProductId>,
) -> SelectionResponse {
    let (details, message) = match target {
        Some(id) => match settle("get_product", state.app.products.get_product(id).await) {
            Ok(product) => (Some(views::details(&product)), None),
            Err(message) => (None, Some(message)),
        },
        None => (None, None),
    };

    SelectionResponse {
        session: session.into(),
        selected_id: selected.map(ProductId::into_string),
        details,
        message,
    }
}
