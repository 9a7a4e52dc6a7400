//! Gateway client and domain services for the storefront portal.

pub mod context;
pub mod domain;
pub mod gateway;

#[cfg(test)]
mod test;
