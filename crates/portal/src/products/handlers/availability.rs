//! Product Availability Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::products::AvailabilityChange;

use crate::{
    extensions::*,
    outcome::{MessageResponse, message, settle},
    products::views,
};

/// Availability Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AvailabilityRequest {
    /// Whether the product can be ordered
    pub available: bool,
}

/// Product Availability Handler
#[endpoint(tags("products"), summary = "Set Product Availability")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<AvailabilityRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.state()?;

    let change = AvailabilityChange {
        id: id.into_inner().into(),
        available: json.into_inner().available,
    };

    let result = settle(
        "set_product_availability",
        state.app.products.set_product_availability(change).await,
    );

    Ok(Json(
        message(result, |product| {
            format!("Availability updated.\n{}", views::details(&product))
        })
        .into(),
    ))
}
