//! Update User Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::users::{UserId, UserUpdate};

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
    users::views::{self, RoleField},
};

/// Update User Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    /// New display name
    pub name: Option<String>,

    /// New email
    pub email: Option<String>,

    /// New role
    pub role: Option<RoleField>,

    /// New enabled flag
    pub active: Option<bool>,
}

impl UpdateUserRequest {
    fn into_update(self, id: UserId) -> UserUpdate {
        UserUpdate {
            id,
            name: self.name,
            email: self.email,
            role: self.role.map(Into::into),
            active: self.active,
        }
    }
}

/// Update User Handler
#[endpoint(tags("users"), summary = "Update User")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let update = json.into_inner().into_update(id.into_inner().into());

    let result = settle("update_user", state.app.users.update_user(update).await);

    Ok(Json(
        message(result, |user| format!("User updated.\n{}", views::summary(&user))).into(),
    ))
}
