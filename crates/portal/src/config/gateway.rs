//! Gateway Config

use clap::Args;

use storefront_app::gateway::GatewayConfig;

/// GraphQL gateway settings.
#[derive(Debug, Args)]
pub struct GatewaySettings {
    /// Gateway `host:port`, or a full URL used verbatim
    #[arg(long, env = "GRAPHQL_ENDPOINT", default_value = "gateway:4000")]
    pub graphql_endpoint: String,
}

impl GatewaySettings {
    /// Client configuration for the gateway.
    #[must_use]
    pub fn client_config(&self) -> GatewayConfig {
        GatewayConfig {
            endpoint: self.graphql_endpoint.clone(),
        }
    }
}
