//! Users service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;

use storefront::users::{NewUser, User, UserId, UserUpdate};

use crate::{
    domain::users::operations::{CREATE_USER, DELETE_USER, UPDATE_USER, USER, USERS},
    gateway::{GatewayClient, GatewayError},
};

#[derive(Debug, Clone)]
pub struct GatewayUsersService {
    gateway: GatewayClient,
}

impl GatewayUsersService {
    #[must_use]
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UsersService for GatewayUsersService {
    async fn create_user(&self, user: NewUser) -> Result<User, GatewayError> {
        self.gateway
            .execute(&CREATE_USER, json!({ "input": user }))
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, GatewayError> {
        self.gateway.execute(&USERS, json!({})).await
    }

    async fn get_user(&self, user: UserId) -> Result<User, GatewayError> {
        self.gateway.execute(&USER, json!({ "id": user })).await
    }

    async fn update_user(&self, update: UserUpdate) -> Result<User, GatewayError> {
        self.gateway
            .execute(&UPDATE_USER, json!({ "input": update }))
            .await
    }

    async fn delete_user(&self, user: UserId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(&DELETE_USER, json!({ "id": user }))
            .await
    }
}

#[automock]
#[async_trait]
/// User account operations.
pub trait UsersService: Send + Sync {
    /// Registers a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, GatewayError>;

    /// Lists every user (admin).
    async fn list_users(&self) -> Result<Vec<User>, GatewayError>;

    /// Retrieve a single user (admin).
    async fn get_user(&self, user: UserId) -> Result<User, GatewayError>;

    /// Applies a partial update to a user.
    async fn update_user(&self, update: UserUpdate) -> Result<User, GatewayError>;

    /// Deletes a user; `true` when the gateway removed it.
    async fn delete_user(&self, user: UserId) -> Result<bool, GatewayError>;
}
