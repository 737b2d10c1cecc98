//! The structs
//!
use std::collections::BTreeMap;
use std::sync::Arc;
use crate::transport::HttpTransport;

/// The Patroni API client.
///
/// The client holds no state besides the transport, all calls are independent,
/// and a client can be shared between threads.
#[derive(Clone)]
pub struct Patroni {
    pub(crate) transport: Arc<dyn HttpTransport>,
}
/// The body of `POST /failover`.
///
/// ```text
/// {"leader":"pg-0","member":"pg-1"}
/// ```
#[derive(Serialize, Debug)]
pub struct SwitchoverRequest<'a> {
    pub leader: &'a str,
    pub member: &'a str,
}
/// The body of `PATCH /config` for setting PostgreSQL parameters.
///
/// ```text
/// {"postgresql":{"parameters":{"max_connections":"200"}}}
/// ```
#[derive(Serialize, Debug)]
pub struct PostgresParametersRequest<'a> {
    pub postgresql: PostgresParameters<'a>,
}
#[derive(Serialize, Debug)]
pub struct PostgresParameters<'a> {
    pub parameters: &'a BTreeMap<String, String>,
}
/// The body of `POST /restart`.
#[derive(Serialize, Debug)]
pub struct RestartRequest {
    pub restart_pending: bool,
}
