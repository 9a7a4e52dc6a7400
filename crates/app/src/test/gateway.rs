//! Mock GraphQL gateway backed by wiremock.

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, body_string_contains, method, path},
};

use crate::gateway::{GatewayClient, GatewayClientError, GatewayConfig};

/// A running mock gateway; expectations are verified when it is dropped.
pub(crate) struct TestGateway {
    server: MockServer,
}

impl TestGateway {
    pub(crate) async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client posting to this gateway's `/query` path.
    pub(crate) fn client(&self) -> Result<GatewayClient, GatewayClientError> {
        GatewayClient::new(&GatewayConfig {
            endpoint: format!("{}/query", self.server.uri()),
        })
    }

    /// Expect exactly one operation selecting `field` with `variables`, and
    /// answer it with `data`.
    pub(crate) async fn expect(&self, field: &str, variables: Value, data: Value) {
        Mock::given(method("POST"))
            .and(path("/query"))
            .and(body_string_contains(field))
            .and(body_partial_json(json!({ "variables": variables })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer any request with `body` as the whole response payload.
    pub(crate) async fn respond_raw(&self, body: Value) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
