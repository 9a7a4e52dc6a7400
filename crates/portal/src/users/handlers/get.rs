//! Get User Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
    users::views,
};

/// Get User Handler
///
/// Returns a formatted summary of one user (admin).
#[endpoint(tags("users"), summary = "Get User")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;

    let result = settle(
        "get_user",
        state.app.users.get_user(id.into_inner().into()).await,
    );

    Ok(Json(message(result, |user| views::summary(&user)).into()))
}
