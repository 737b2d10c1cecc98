//! A client for the Patroni REST API.
//!
//! Patroni manages a highly available PostgreSQL cluster, and exposes an API on every member.
//! This crate translates a request for a single member into a call to that API,
//! and the answer back into a typed result or a [`PatroniError`].
//!
//! ```no_run
//! use patroni_client::{ClusterMember, Patroni, PatroniApi};
//!
//! let patroni = Patroni::new()?;
//! let member = ClusterMember::new("pg-0", "10.0.0.1");
//! if patroni.get_member_data(&member)?.pending_restart {
//!     patroni.restart(&member)?;
//! }
//! # Ok::<(), patroni_client::PatroniError>(())
//! ```
#[macro_use]
extern crate serde_derive;

use std::time::Duration;

pub mod error;
pub mod member;
pub mod transport;
pub mod patroni;

pub use error::{PatroniError, Result};
pub use member::{api_url, ClusterMember, MemberData, MemberDataPatroni};
pub use patroni::{Patroni, PatroniApi};

pub const FAILOVER_PATH: &str = "/failover";
pub const CONFIG_PATH: &str = "/config";
pub const STATUS_PATH: &str = "/patroni";
pub const RESTART_PATH: &str = "/restart";
/// The port the Patroni API listens on, on every member.
pub const API_PORT: u16 = 8008;
/// The request timeout of the default transport.
pub const TIMEOUT: Duration = Duration::from_secs(30);
