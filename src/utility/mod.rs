//! Module for the option handling of the `patroni_ctl` binary.
//!
mod utility;

pub use utility::*;
