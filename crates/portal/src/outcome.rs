//! Gateway outcome reporting.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::gateway::GatewayError;

use crate::observability::observe_gateway_outcome;

/// Plain-text result of a single-entity action.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Success summary or error message
    pub message: String,
}

impl From<String> for MessageResponse {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Record how a gateway-backed action ended and turn a failure into the
/// message shown in place of the result.
pub(crate) fn settle<T>(action: &'static str, result: Result<T, GatewayError>) -> Result<T, String> {
    match result {
        Ok(value) => {
            observe_gateway_outcome(action, "ok");

            Ok(value)
        }
        Err(error) => {
            observe_gateway_outcome(action, error.kind().as_str());

            Err(error_message(&error))
        }
    }
}

/// The user-facing message for a failed gateway operation.
///
/// Gateway-reported messages are passed through verbatim.
pub(crate) fn error_message(error: &GatewayError) -> String {
    match error {
        GatewayError::Application(message) => message.clone(),
        GatewayError::NoResponse => "Error: no response from server".to_string(),
        GatewayError::Shape { .. } | GatewayError::Transport(_) | GatewayError::InvalidBody(_) => {
            format!("Error: {error}")
        }
    }
}

/// Collapse a settled action into its summary or error message.
pub(crate) fn message<T>(result: Result<T, String>, summary: impl FnOnce(T) -> String) -> String {
    result.map_or_else(|error| error, summary)
}
