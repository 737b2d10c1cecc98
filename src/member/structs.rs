//! The structs
//!
/// A single PostgreSQL instance managed by Patroni.
///
/// The client does not keep members around: a member is handed in per call,
/// because the reported ip address can change between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterMember {
    /// The member name as Patroni knows it, used in payloads such as a switchover.
    pub name: String,
    /// The reported ip address, must be an IPv4 or IPv6 literal.
    pub ip: String,
}
/// The root struct for deserializing the status Patroni reports at `/`.
///
/// Patroni reports more than this, unknown fields are ignored,
/// and missing fields are left at their default.
///
/// ```text
/// {
///     "state": "running",
///     "role": "leader",
///     "server_version": 140002,
///     "pending_restart": false,
///     "cluster_unlocked": true,
///     "patroni": {
///         "version": "3.0",
///         "scope": "prod"
///     }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MemberData {
    pub state: String,
    pub role: String,
    pub server_version: i64,
    pub pending_restart: bool,
    pub cluster_unlocked: bool,
    pub patroni: MemberDataPatroni,
}
/// The `patroni` child element of [`MemberData`].
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MemberDataPatroni {
    pub version: String,
    pub scope: String,
}
