//! Module for the cluster member descriptor, the address it resolves to,
//! and the member data Patroni reports about it.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
