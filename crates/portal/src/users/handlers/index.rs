//! User Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, outcome::settle, users::views::UserRow};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    /// User table rows; empty when the listing failed
    pub users: Vec<UserRow>,

    /// Error message, if the listing failed
    pub message: Option<String>,
}

/// User Index Handler
///
/// Lists every user (admin).
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UsersResponse>, StatusError> {
    let state = depot.state()?;

    let response = match settle("list_users", state.app.users.list_users().await) {
        Ok(users) => UsersResponse {
            users: users.into_iter().map(Into::into).collect(),
            message: None,
        },
        Err(message) => UsersResponse {
            users: Vec::new(),
            message: Some(message),
        },
    };

    Ok(Json(response))
}
