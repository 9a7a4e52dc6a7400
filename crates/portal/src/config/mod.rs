//! Server configuration module

use clap::Parser;
use storefront::pagination::PageSizeError;
use thiserror::Error;

use crate::config::{
    gateway::GatewaySettings,
    listing::ListingConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod gateway;
pub(crate) mod listing;
pub(crate) mod observability;
pub(crate) mod server;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Flags or environment could not be parsed
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Listing page-size bounds are inconsistent
    #[error("invalid listing page sizes: {0}")]
    Listing(#[from] PageSizeError),
}

/// Storefront Portal Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-portal", about = "Storefront Portal Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// GraphQL gateway settings.
    #[command(flatten)]
    pub gateway: GatewaySettings,

    /// Product listing settings.
    #[command(flatten)]
    pub listing: ListingConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed or the listing
    /// bounds are inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()?.validated()
    }

    /// Reject settings that parse but cannot be served.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Listing`] when the default page size is zero
    /// or above the maximum.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.listing.validate()?;

        Ok(self)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
