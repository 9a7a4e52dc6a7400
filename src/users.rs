//! Users

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<User>;

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Store administrator
    Admin,

    /// Shopper
    #[default]
    Customer,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Admin => f.write_str("ADMIN"),
            Self::Customer => f.write_str("CUSTOMER"),
        }
    }
}

/// User, as resolved by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Gateway-assigned identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Whether the account is enabled
    pub active: bool,
}

/// New user payload (`CreateUserInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Plain-text password, hashed by the gateway
    pub password: String,

    /// Account role
    pub role: Role,

    /// Whether the account starts enabled
    pub active: bool,
}

/// Partial user update (`UpdateUserInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// User to update
    pub id: UserId,

    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// New enabled flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
