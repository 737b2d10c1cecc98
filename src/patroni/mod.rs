//! Module for the Patroni API client and its operations.
//!
mod structs;
mod functions;
mod api;

pub use structs::*;
pub use api::PatroniApi;
