//! GraphQL gateway client

mod client;
mod envelope;
mod errors;

pub use client::{GatewayClient, GatewayClientError, GatewayConfig};
pub use envelope::Operation;
pub use errors::{GatewayError, GatewayErrorKind};
