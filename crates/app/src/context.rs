//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{
        orders::{GatewayOrdersService, OrdersService},
        products::{GatewayProductsService, ProductsService},
        users::{GatewayUsersService, UsersService},
    },
    gateway::{GatewayClient, GatewayClientError, GatewayConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to create gateway client")]
    Gateway(#[source] GatewayClientError),
}

#[derive(Clone)]
pub struct AppContext {
    /// URL every operation is posted to
    pub gateway_url: String,
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context around a single shared gateway client.
    ///
    /// # Errors
    ///
    /// Returns an error when the gateway client cannot be created.
    pub fn from_gateway(config: &GatewayConfig) -> Result<Self, AppInitError> {
        let gateway = GatewayClient::new(config).map_err(AppInitError::Gateway)?;

        Ok(Self {
            gateway_url: gateway.url().to_string(),
            users: Arc::new(GatewayUsersService::new(gateway.clone())),
            products: Arc::new(GatewayProductsService::new(gateway.clone())),
            orders: Arc::new(GatewayOrdersService::new(gateway)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_fails_initialisation() {
        let result = AppContext::from_gateway(&GatewayConfig {
            endpoint: "http://exa mple/query".to_string(),
        });

        assert!(matches!(result, Err(AppInitError::Gateway(_))));
    }

    #[test]
    fn default_endpoint_builds_context() {
        let result = AppContext::from_gateway(&GatewayConfig {
            endpoint: "gateway:4000".to_string(),
        });

        assert!(
            matches!(result, Ok(ref app) if app.gateway_url == "http://gateway:4000/query"),
            "expected resolved gateway url"
        );
    }
}
