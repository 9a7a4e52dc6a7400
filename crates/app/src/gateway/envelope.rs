//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::gateway::errors::GatewayError;

/// A named GraphQL operation and the top-level field it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Field under `data` holding the result, e.g. `createUser`
    pub field: &'static str,

    /// Operation document text
    pub document: &'static str,
}

/// POST body sent to the gateway.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub(crate) query: &'a str,
    pub(crate) variables: Value,
}

/// Unwrap an operation result from a response payload.
///
/// Checks run in a fixed order so that each failure is reported distinctly:
/// an absent payload, then a gateway `errors` array, then a missing or
/// mistyped `data.<field>`.
pub(crate) fn decode<T: DeserializeOwned>(
    operation: &Operation,
    payload: Option<Value>,
) -> Result<T, GatewayError> {
    let Some(payload) = payload.filter(|payload| !payload.is_null()) else {
        return Err(GatewayError::NoResponse);
    };

    if let Some(message) = first_error_message(&payload) {
        return Err(GatewayError::Application(message));
    }

    let Some(value) = payload
        .get("data")
        .and_then(|data| data.get(operation.field))
        .filter(|value| !value.is_null())
    else {
        return Err(shape_error(operation, &payload));
    };

    T::deserialize(value).map_err(|_mismatch| shape_error(operation, &payload))
}

fn first_error_message(payload: &Value) -> Option<String> {
    let first = payload.get("errors")?.as_array()?.first()?;

    Some(
        first
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| first.to_string(), ToString::to_string),
    )
}

fn shape_error(operation: &Operation, payload: &Value) -> GatewayError {
    GatewayError::Shape {
        operation: operation.field,
        payload: payload.to_string(),
    }
}
