//! Order Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod for_user;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod quantity;
pub(crate) mod status;
pub(crate) mod update;
