//! Create Product Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::products::NewProduct;

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
    products::views,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Product name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Optional description; blank is treated as absent
    #[serde(default)]
    pub description: Option<String>,

    /// Initial stock level
    #[serde(default)]
    pub inventory: i64,
}

/// Create Product Handler
#[endpoint(tags("products"), summary = "Create Product")]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();

    let product = NewProduct {
        name: request.name,
        price: views::parse_price(request.price)?,
        description: request
            .description
            .filter(|description| !description.trim().is_empty()),
        inventory: request.inventory,
    };

    let result = settle(
        "create_product",
        state.app.products.create_product(product).await,
    );

    Ok(Json(
        message(result, |product| {
            format!("Product created.\n{}", views::details(&product))
        })
        .into(),
    ))
}
