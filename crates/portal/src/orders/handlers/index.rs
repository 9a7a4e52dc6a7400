//! Order Index Handler

use salvo::prelude::*;

use crate::{extensions::*, orders::views::OrdersResponse, outcome::settle};

/// Order Index Handler
///
/// Lists every order (admin).
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.state()?;

    Ok(Json(
        settle("list_orders", state.app.orders.list_orders().await).into(),
    ))
}
