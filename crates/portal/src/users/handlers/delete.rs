//! Delete User Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
};

/// Delete User Handler
#[endpoint(tags("users"), summary = "Delete User")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let id = id.into_inner();

    let result = settle(
        "delete_user",
        state.app.users.delete_user(id.as_str().into()).await,
    );

    Ok(Json(
        message(result, |deleted| {
            if deleted {
                format!("User {id} deleted.")
            } else {
                format!("User {id} was not deleted.")
            }
        })
        .into(),
    ))
}
