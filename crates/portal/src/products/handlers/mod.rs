//! Product Handlers

pub(crate) mod availability;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod load;
pub(crate) mod next;
pub(crate) mod restock;
pub(crate) mod select;
pub(crate) mod update;
pub(crate) mod view;
