//! Restock Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::products::Restock;

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
    products::views,
};

/// Restock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestockRequest {
    /// Units to add
    pub quantity: i64,
}

/// Restock Product Handler
#[endpoint(tags("products"), summary = "Restock Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<RestockRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;

    let restock = Restock {
        id: id.into_inner().into(),
        quantity: json.into_inner().quantity,
    };

    let result = settle(
        "restock_product",
        state.app.products.restock_product(restock).await,
    );

    Ok(Json(
        message(result, |product| {
            format!("Product restocked.\n{}", views::details(&product))
        })
        .into(),
    ))
}
