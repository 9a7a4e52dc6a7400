//! Orders

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, products::ProductId, users::UserId};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Product reference embedded in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// Product identifier
    pub id: ProductId,

    /// Product name at the time of resolution
    pub name: String,
}

/// Order, as resolved by the gateway
///
/// `createOrder` does not select the order id, so it is optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Gateway-assigned identifier
    #[serde(default)]
    pub id: Option<OrderId>,

    /// Ordering user
    pub user_id: UserId,

    /// Units ordered
    pub quantity: i64,

    /// Order total
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    /// Free-form status, e.g. `PENDING`
    pub status: String,

    /// Creation time as rendered by the gateway
    #[serde(default)]
    pub created_at: Option<String>,

    /// Ordered products
    #[serde(default)]
    pub products: Vec<OrderProduct>,
}

/// New order payload (`CreateOrderInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Ordering user
    pub user_id: UserId,

    /// Products in the order
    pub product_ids: Vec<ProductId>,

    /// Units ordered
    pub quantity: i64,

    /// Order total
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    /// Initial status
    pub status: String,
}

/// Partial order update (`UpdateOrderInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    /// Order to update
    pub order_id: OrderId,

    /// New quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// New total
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<Decimal>,

    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Order deletion (`DeleteOrderInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDeletion {
    /// Order to delete
    pub order_id: OrderId,

    /// Owner of the order
    pub user_id: UserId,
}

/// Status change (`SetOrderStatusInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// Order to change
    pub order_id: OrderId,

    /// New status
    pub status: String,
}

/// Quantity change (`ChangeOrderQuantityInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityChange {
    /// Order to change
    pub order_id: OrderId,

    /// New quantity
    pub quantity: i64,
}

impl Order {
    /// Comma-separated product names.
    #[must_use]
    pub fn product_names(&self) -> String {
        self.products
            .iter()
            .map(|product| product.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
