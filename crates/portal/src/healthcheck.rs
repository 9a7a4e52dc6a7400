//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Resolved GraphQL endpoint the portal posts operations to
    pub gateway: String,
}

/// Healthcheck handler
///
/// Reports that the portal is up and which gateway it talks to. The gateway
/// itself is not contacted.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        gateway: state.app.gateway_url.clone(),
    }))
}
