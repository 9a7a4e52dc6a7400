//! Orders

mod operations;
pub mod service;

pub use service::*;
