//! Delete Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
};

/// Delete Product Handler
#[endpoint(tags("products"), summary = "Delete Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let id = id.into_inner();

    let result = settle(
        "delete_product",
        state.app.products.delete_product(id.as_str().into()).await,
    );

    Ok(Json(
        message(result, |deleted| {
            if deleted {
                format!("Product {id} deleted.")
            } else {
                format!("Product {id} was not deleted.")
            }
        })
        .into(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::{domain::products::MockProductsService, gateway::GatewayError};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_reports_deletion() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| id.as_str() == "p-004")
            .return_once(|_| Ok(true));

        let response: MessageResponse = TestClient::delete("http://example.com/products/p-004")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "Product p-004 deleted.");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_shape_error() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_delete_product().once().return_once(|_| {
            Err(GatewayError::Shape {
                operation: "deleteProduct",
                payload: r#"{"data":{"deleteProduct":null}}"#.to_string(),
            })
        });

        let response: MessageResponse = TestClient::delete("http://example.com/products/p-004")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(
            response.message.starts_with("Error: unexpected response format for deleteProduct"),
            "got {}",
            response.message
        );

        Ok(())
    }
}
