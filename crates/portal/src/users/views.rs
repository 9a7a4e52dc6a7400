//! User views

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront::users::{Role, User};

/// Account role as exchanged with the portal page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum RoleField {
    /// Store administrator
    Admin,

    /// Shopper
    #[default]
    Customer,
}

impl From<RoleField> for Role {
    fn from(role: RoleField) -> Self {
        match role {
            RoleField::Admin => Role::Admin,
            RoleField::Customer => Role::Customer,
        }
    }
}

impl From<Role> for RoleField {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleField::Admin,
            Role::Customer => RoleField::Customer,
        }
    }
}

/// User table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserRow {
    /// User identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Account role
    pub role: RoleField,

    /// Whether the account is enabled
    pub active: bool,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_string(),
            name: user.name,
            email: user.email,
            role: user.role.into(),
            active: user.active,
        }
    }
}

pub(crate) fn summary(user: &User) -> String {
    format!(
        "ID: {}\nName: {}\nEmail: {}\nRole: {}\nActive: {}",
        user.id, user.name, user.email, user.role, user.active
    )
}

#[cfg(test)]
pub(crate) fn make_user(id: &str, name: &str) -> User {
    User {
        id: id.into(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: Role::Customer,
        active: true,
    }
}
