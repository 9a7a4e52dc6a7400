//! Delete Order Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use storefront::orders::OrderDeletion;

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
};

/// Delete Order Handler
///
/// The gateway requires the owning user alongside the order id.
#[endpoint(tags("orders"), summary = "Delete Order")]
pub(crate) async fn handler(
    id: PathParam<String>,
    user_id: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let id = id.into_inner();

    let deletion = OrderDeletion {
        order_id: id.as_str().into(),
        user_id: user_id.into_inner().into(),
    };

    let result = settle("delete_order", state.app.orders.delete_order(deletion).await);

    Ok(Json(
        message(result, |deleted| {
            if deleted {
                format!("Order {id} deleted.")
            } else {
                format!("Order {id} was not deleted.")
            }
        })
        .into(),
    ))
}
