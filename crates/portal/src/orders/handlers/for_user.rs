//! User Orders Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, orders::views::OrdersResponse, outcome::settle};

/// User Orders Handler
///
/// Lists the orders placed by one user.
#[endpoint(tags("orders"), summary = "List Orders For User")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.state()?;

    Ok(Json(
        settle(
            "orders_for_user",
            state.app.orders.orders_for_user(id.into_inner().into()).await,
        )
        .into(),
    ))
}
