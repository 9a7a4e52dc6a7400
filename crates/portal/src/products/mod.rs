//! Products

mod handlers;
mod listing;
mod selection;
mod session;
mod views;

pub(crate) use handlers::*;
