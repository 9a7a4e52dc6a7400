//! HTTP client for the GraphQL gateway.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::gateway::{
    envelope::{self, GraphQlRequest, Operation},
    errors::GatewayError,
};

/// Gateway location, e.g. `gateway:4000` or `https://gw.example.com/graphql`.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host and port, or a full URL when a scheme is present
    pub endpoint: String,
}

impl GatewayConfig {
    /// Resolve the endpoint to the URL requests are posted to.
    ///
    /// A bare `host:port` maps to `http://host:port/query`; anything with a
    /// scheme is used verbatim.
    #[must_use]
    pub fn url(&self) -> String {
        let endpoint = self.endpoint.trim();

        if endpoint.contains("://") {
            endpoint.to_string()
        } else {
            format!("http://{}/query", endpoint.trim_end_matches('/'))
        }
    }
}

/// Errors raised while building a [`GatewayClient`].
#[derive(Debug, Error)]
pub enum GatewayClientError {
    /// The resolved endpoint is not a valid URL
    #[error("invalid gateway endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        /// Resolved endpoint
        endpoint: String,

        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be initialised
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Posts operations to the gateway and unwraps their results.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    url: Url,
    http: Client,
}

impl GatewayClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint does not resolve to a valid URL or
    /// the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayClientError> {
        let endpoint = config.url();

        let url = Url::parse(&endpoint)
            .map_err(|source| GatewayClientError::InvalidEndpoint { endpoint, source })?;

        let http = Client::builder()
            .user_agent(concat!("storefront-portal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { url, http })
    }

    /// The URL operations are posted to.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run `operation` with `variables` and unwrap `data.<field>` as `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] describing the transport, application or
    /// shape failure; errors are never retried.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<T, GatewayError> {
        debug!(operation = operation.field, "sending gateway operation");

        let result = self.send(operation, variables).await;

        if let Err(error) = &result {
            warn!(
                operation = operation.field,
                kind = error.kind().as_str(),
                "gateway operation failed: {error}"
            );
        }

        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .post(self.url.clone())
            .json(&GraphQlRequest {
                query: operation.document,
                variables,
            })
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;

        let payload = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(serde_json::from_slice::<Value>(&body).map_err(GatewayError::InvalidBody)?)
        };

        envelope::decode(operation, payload)
    }
}
