//! View Product Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::{
    products::ProductId,
    session::{Selection, SessionState},
};

use crate::{
    extensions::*,
    products::{
        selection::{SelectionResponse, fetch_details},
        session::SessionPayload,
    },
};

/// View Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ViewProductRequest {
    /// Current session, if any
    #[serde(default)]
    pub session: SessionPayload,

    /// Product id typed into the page
    pub product_id: String,
}

/// View Product Handler
///
/// Looks up a product by id. Unlike row selection this always fetches, so a
/// typed id can be refreshed on demand.
#[endpoint(tags("products"), summary = "View Product")]
pub(crate) async fn handler(
    json: JsonBody<ViewProductRequest>,
    depot: &mut Depot,
) -> Result<Json<SelectionResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();

    let mut session = SessionState::try_from(request.session).or_400("invalid session")?;

    let selection = session.select_id(ProductId::new(request.product_id.trim()));

    if selection == Selection::Rejected {
        return Ok(Json(SelectionResponse {
            session: session.into(),
            selected_id: None,
            details: None,
            message: Some("Enter a product id.".to_string()),
        }));
    }

    let selected = selection.id().cloned();

    Ok(Json(
        fetch_details(state, session, selected.clone(), selected).await,
    ))
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::{domain::products::MockProductsService, gateway::GatewayError};

    use crate::{products::views::make_product, test_helpers::products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/view").post(handler))
    }

    #[tokio::test]
    async fn test_view_trims_and_fetches() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| id.as_str() == "p-003")
            .return_once(|_| Ok(make_product("p-003", "Walnut Serving Board", dec!(45))));

        let response: SelectionResponse = TestClient::post("http://example.com/products/view")
            .json(&json!({ "product_id": "  p-003 " }))
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.selected_id.as_deref(), Some("p-003"));
        assert!(
            response
                .details
                .as_deref()
                .is_some_and(|details| details.starts_with("ID: p-003")),
            "expected details, got {:?}",
            response.details
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_view_refetches_current_selection() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Ok(make_product("p-003", "Walnut Serving Board", dec!(45))));

        let response: SelectionResponse = TestClient::post("http://example.com/products/view")
            .json(&json!({ "session": { "selected_id": "p-003" }, "product_id": "p-003" }))
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(response.details.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_view_blank_id_is_not_fetched() -> TestResult {
        let response: SelectionResponse = TestClient::post("http://example.com/products/view")
            .json(&json!({ "session": { "selected_id": "p-001" }, "product_id": "   " }))
            .send(&make_service(MockProductsService::new()))
            .await
            .take_json()
            .await?;

        assert!(response.selected_id.is_none());
        assert_eq!(response.session.selected_id.as_deref(), Some("p-001"));
        assert_eq!(response.message.as_deref(), Some("Enter a product id."));

        Ok(())
    }

    #[tokio::test]
    async fn test_view_unknown_product_shows_gateway_message() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(GatewayError::Application("product not found".into())));

        let response: SelectionResponse = TestClient::post("http://example.com/products/view")
            .json(&json!({ "product_id": "p-404" }))
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message.as_deref(), Some("product not found"));
        assert!(response.details.is_none());

        Ok(())
    }
}
