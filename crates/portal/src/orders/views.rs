//! Order views

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use storefront::{orders::Order, products::format_price};

use crate::extensions::*;

/// Order table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderRow {
    /// Order identifier
    pub id: Option<String>,

    /// Ordering user
    pub user_id: String,

    /// Comma-separated product names
    pub products: String,

    /// Units ordered
    pub quantity: i64,

    /// Total with two decimal places
    pub total_price: String,

    /// Order status
    pub status: String,

    /// Creation time as rendered by the gateway
    pub created_at: Option<String>,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        Self {
            products: order.product_names(),
            id: order.id.map(|id| id.into_string()),
            user_id: order.user_id.into_string(),
            quantity: order.quantity,
            total_price: format_price(order.total_price),
            status: order.status,
            created_at: order.created_at,
        }
    }
}

/// Orders table plus an optional error message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Order table rows; empty when the listing failed
    pub orders: Vec<OrderRow>,

    /// Error message, if the listing failed
    pub message: Option<String>,
}

impl From<Result<Vec<Order>, String>> for OrdersResponse {
    fn from(result: Result<Vec<Order>, String>) -> Self {
        match result {
            Ok(orders) => Self {
                orders: orders.into_iter().map(Into::into).collect(),
                message: None,
            },
            Err(message) => Self {
                orders: Vec::new(),
                message: Some(message),
            },
        }
    }
}

pub(crate) fn summary(order: &Order) -> String {
    format!(
        "Order ID: {}\nUser ID: {}\nProducts: {}\nQuantity: {}\nTotal: {}\nStatus: {}\nCreated: {}",
        order.id.as_ref().map_or("-", |id| id.as_str()),
        order.user_id,
        order.product_names(),
        order.quantity,
        format_price(order.total_price),
        order.status,
        order.created_at.as_deref().unwrap_or("-"),
    )
}

/// Convert a total typed into the page into a decimal amount.
pub(crate) fn parse_total(total: f64) -> Result<Decimal, StatusError> {
    Decimal::try_from(total).or_400("total price must be a finite number")
}

#[cfg(test)]
pub(crate) fn make_order(id: &str, user_id: &str) -> Order {
    use rust_decimal::dec;
    use storefront::orders::OrderProduct;

    Order {
        id: Some(id.into()),
        user_id: user_id.into(),
        quantity: 2,
        total_price: dec!(25),
        status: "PENDING".to_string(),
        created_at: Some("2025-10-01T12:00:00Z".to_string()),
        products: vec![OrderProduct {
            id: "p-001".into(),
            name: "Enamel Camp Mug".to_string(),
        }],
    }
}
