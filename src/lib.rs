//! Storefront
//!
//! Domain types shared by the storefront portal: gateway entities, typed
//! ids, the cursor pagination contract and the per-session view state that
//! is threaded through every listing and selection.

pub mod fixtures;
pub mod ids;
pub mod orders;
pub mod pagination;
pub mod products;
pub mod session;
pub mod users;
