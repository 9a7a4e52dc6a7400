//! Update Order Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::orders::{OrderId, OrderUpdate};

use crate::{
    extensions::*,
    orders::views,
    outcome::{MessageResponse, message, settle},
};

/// Update Order Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    /// New quantity
    pub quantity: Option<i64>,

    /// New total
    pub total_price: Option<f64>,

    /// New status
    pub status: Option<String>,
}

impl UpdateOrderRequest {
    fn into_update(self, order_id: OrderId) -> Result<OrderUpdate, StatusError> {
        Ok(OrderUpdate {
            order_id,
            quantity: self.quantity,
            total_price: self.total_price.map(views::parse_total).transpose()?,
            status: self.status,
        })
    }
}

/// Update Order Handler
#[endpoint(tags("orders"), summary = "Update Order")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let update = json.into_inner().into_update(id.into_inner().into())?;

    let result = settle("update_order", state.app.orders.update_order(update).await);

    Ok(Json(
        message(result, |order| {
            format!("Order updated.\n{}", views::summary(&order))
        })
        .into(),
    ))
}
