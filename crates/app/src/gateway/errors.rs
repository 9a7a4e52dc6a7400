//! Gateway errors.

use thiserror::Error;

/// Failure of a single gateway operation.
///
/// Every variant is terminal for the triggering action; nothing is retried.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection failure, non-2xx status, or unreadable body.
    #[error("GraphQL request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was present but was not JSON.
    #[error("GraphQL request failed: response is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The gateway answered with an empty or `null` body.
    #[error("no response from gateway")]
    NoResponse,

    /// The gateway reported an `errors` array; carries the first message.
    #[error("{0}")]
    Application(String),

    /// The response lacked the operation's field or it had the wrong shape.
    #[error("unexpected response format for {operation}: {payload}")]
    Shape {
        /// Top-level field the operation selects
        operation: &'static str,

        /// Raw response payload
        payload: String,
    },
}

/// Coarse classification used for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// Network or protocol failure
    Transport,

    /// Empty response
    NoResponse,

    /// Gateway-reported error
    Application,

    /// Malformed response
    Shape,
}

impl GatewayErrorKind {
    /// Stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::NoResponse => "no_response",
            Self::Application => "application",
            Self::Shape => "shape",
        }
    }
}

impl GatewayError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> GatewayErrorKind {
        match self {
            Self::Transport(_) | Self::InvalidBody(_) => GatewayErrorKind::Transport,
            Self::NoResponse => GatewayErrorKind::NoResponse,
            Self::Application(_) => GatewayErrorKind::Application,
            Self::Shape { .. } => GatewayErrorKind::Shape,
        }
    }
}
