//! Order Quantity Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::orders::QuantityChange;

use crate::{
    extensions::*,
    orders::views,
    outcome::{MessageResponse, message, settle},
};

/// Quantity Change Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuantityChangeRequest {
    /// New quantity
    pub quantity: i64,
}

/// Order Quantity Handler
#[endpoint(tags("orders"), summary = "Change Order Quantity")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<QuantityChangeRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;

    let change = QuantityChange {
        order_id: id.into_inner().into(),
        quantity: json.into_inner().quantity,
    };

    let result = settle(
        "change_order_quantity",
        state.app.orders.change_order_quantity(change).await,
    );

    Ok(Json(
        message(result, |order| {
            format!("Order quantity updated.\n{}", views::summary(&order))
        })
        .into(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront::orders::Order;
    use storefront_app::{domain::orders::MockOrdersService, gateway::GatewayError};

    use crate::{orders::views::make_order, test_helpers::orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(
            orders,
            Router::with_path("orders/{id}/quantity").put(handler),
        )
    }

    #[tokio::test]
    async fn test_change_quantity() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_change_order_quantity()
            .once()
            .withf(|change: &QuantityChange| change.order_id.as_str() == "o-1" && change.quantity == 5)
            .return_once(|_| {
                Ok(Order {
                    quantity: 5,
                    ..make_order("o-1", "u-1")
                })
            });

        let response: MessageResponse = TestClient::put("http://example.com/orders/o-1/quantity")
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert!(response.message.contains("Quantity: 5"));

        Ok(())
    }

    #[tokio::test]
    async fn test_change_quantity_failure_keeps_200() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_change_order_quantity()
            .once()
            .return_once(|_| Err(GatewayError::NoResponse));

        let res = TestClient::put("http://example.com/orders/o-1/quantity")
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
