//! Create Order Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::orders::NewOrder;

use crate::{
    extensions::*,
    orders::views,
    outcome::{MessageResponse, message, settle},
};

/// Place Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Ordering user
    pub user_id: String,

    /// Products in the order; blank entries are dropped
    pub product_ids: Vec<String>,

    /// Units ordered
    pub quantity: i64,

    /// Order total
    pub total_price: f64,

    /// Initial status
    #[serde(default = "pending")]
    pub status: String,
}

fn pending() -> String {
    "PENDING".to_string()
}

impl CreateOrderRequest {
    fn into_new_order(self) -> Result<NewOrder, StatusError> {
        Ok(NewOrder {
            user_id: self.user_id.trim().into(),
            product_ids: self
                .product_ids
                .iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(Into::into)
                .collect(),
            quantity: self.quantity,
            total_price: views::parse_total(self.total_price)?,
            status: self.status,
        })
    }
}

/// Create Order Handler
#[endpoint(tags("orders"), summary = "Place Order")]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let order = json.into_inner().into_new_order()?;

    let result = settle("create_order", state.app.orders.create_order(order).await);

    Ok(Json(
        message(result, |order| {
            format!("Order created.\n{}", views::summary(&order))
        })
        .into(),
    ))
}
