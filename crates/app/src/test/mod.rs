//! Test support for service-level tests.

mod gateway;

pub(crate) use gateway::TestGateway;
