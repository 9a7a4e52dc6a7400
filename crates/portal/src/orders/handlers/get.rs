//! Get Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::views,
    outcome::{MessageResponse, message, settle},
};

/// Get Order Handler
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;

    let result = settle(
        "get_order",
        state.app.orders.get_order(id.into_inner().into()).await,
    );

    Ok(Json(message(result, |order| views::summary(&order)).into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::{domain::orders::MockOrdersService, gateway::GatewayError};

    use crate::{orders::views::make_order, test_helpers::orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_order_returns_summary() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(|id| id.as_str() == "o-1")
            .return_once(|_| Ok(make_order("o-1", "u-1")));

        let response: MessageResponse = TestClient::get("http://example.com/orders/o-1")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert!(response.message.starts_with("Order ID: o-1\n"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_order_not_found() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(GatewayError::Application("order not found".into())));

        let response: MessageResponse = TestClient::get("http://example.com/orders/o-404")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "order not found");

        Ok(())
    }
}
