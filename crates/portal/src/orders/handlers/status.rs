//! Order Status Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::orders::StatusChange;

use crate::{
    extensions::*,
    orders::views,
    outcome::{MessageResponse, message, settle},
};

/// Status Change Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusChangeRequest {
    /// New status, e.g. `SHIPPED`
    pub status: String,
}

/// Order Status Handler
#[endpoint(tags("orders"), summary = "Set Order Status")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<StatusChangeRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;

    let change = StatusChange {
        order_id: id.into_inner().into(),
        status: json.into_inner().status,
    };

    let result = settle(
        "set_order_status",
        state.app.orders.set_order_status(change).await,
    );

    Ok(Json(
        message(result, |order| {
            format!("Order status updated.\n{}", views::summary(&order))
        })
        .into(),
    ))
}
