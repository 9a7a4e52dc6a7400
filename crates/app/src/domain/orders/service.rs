//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;

use storefront::{
    orders::{NewOrder, Order, OrderDeletion, OrderId, OrderUpdate, QuantityChange, StatusChange},
    users::UserId,
};

use crate::{
    domain::orders::operations::{
        CHANGE_ORDER_QUANTITY, CREATE_ORDER, DELETE_ORDER, ORDER, ORDERS, ORDERS_BY_USER,
        SET_ORDER_STATUS, UPDATE_ORDER,
    },
    gateway::{GatewayClient, GatewayError},
};

#[derive(Debug, Clone)]
pub struct GatewayOrdersService {
    gateway: GatewayClient,
}

impl GatewayOrdersService {
    #[must_use]
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl OrdersService for GatewayOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, GatewayError> {
        self.gateway
            .execute(&CREATE_ORDER, json!({ "input": order }))
            .await
    }

    async fn orders_for_user(&self, user: UserId) -> Result<Vec<Order>, GatewayError> {
        self.gateway
            .execute(&ORDERS_BY_USER, json!({ "id": user }))
            .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        self.gateway.execute(&ORDERS, json!({})).await
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, GatewayError> {
        self.gateway.execute(&ORDER, json!({ "id": order })).await
    }

    async fn update_order(&self, update: OrderUpdate) -> Result<Order, GatewayError> {
        self.gateway
            .execute(&UPDATE_ORDER, json!({ "input": update }))
            .await
    }

    async fn delete_order(&self, deletion: OrderDeletion) -> Result<bool, GatewayError> {
        self.gateway
            .execute(&DELETE_ORDER, json!({ "input": deletion }))
            .await
    }

    async fn set_order_status(&self, change: StatusChange) -> Result<Order, GatewayError> {
        self.gateway
            .execute(&SET_ORDER_STATUS, json!({ "input": change }))
            .await
    }

    async fn change_order_quantity(&self, change: QuantityChange) -> Result<Order, GatewayError> {
        self.gateway
            .execute(&CHANGE_ORDER_QUANTITY, json!({ "input": change }))
            .await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places a new order (customer).
    async fn create_order(&self, order: NewOrder) -> Result<Order, GatewayError>;

    /// Lists the orders placed by `user` (customer).
    async fn orders_for_user(&self, user: UserId) -> Result<Vec<Order>, GatewayError>;

    /// Lists every order (admin).
    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError>;

    /// Retrieve a single order (admin).
    async fn get_order(&self, order: OrderId) -> Result<Order, GatewayError>;

    /// Applies a partial update to an order (admin).
    async fn update_order(&self, update: OrderUpdate) -> Result<Order, GatewayError>;

    /// Deletes an order (admin); `true` when the gateway removed it.
    async fn delete_order(&self, deletion: OrderDeletion) -> Result<bool, GatewayError>;

    /// Moves an order to a new status (admin).
    async fn set_order_status(&self, change: StatusChange) -> Result<Order, GatewayError>;

    /// Changes the quantity of an order (admin).
    async fn change_order_quantity(&self, change: QuantityChange) -> Result<Order, GatewayError>;
}
