//! Orders

mod handlers;
mod views;

pub(crate) use handlers::*;
