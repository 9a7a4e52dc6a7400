//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::products::ProductUpdate;

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
    products::views,
};

/// Update Product Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// New name
    pub name: Option<String>,

    /// New unit price
    pub price: Option<f64>,

    /// New description
    pub description: Option<String>,

    /// New stock level
    pub inventory: Option<i64>,
}

impl UpdateProductRequest {
    fn into_update(self) -> Result<ProductUpdate, StatusError> {
        Ok(ProductUpdate {
            name: self.name,
            price: self.price.map(views::parse_price).transpose()?,
            description: self.description,
            inventory: self.inventory,
        })
    }
}

/// Update Product Handler
#[endpoint(tags("products"), summary = "Update Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;
    let update = json.into_inner().into_update()?;

    let result = settle(
        "update_product",
        state
            .app
            .products
            .update_product(id.into_inner().into(), update)
            .await,
    );

    Ok(Json(
        message(result, |product| {
            format!("Product updated.\n{}", views::details(&product))
        })
        .into(),
    ))
}
