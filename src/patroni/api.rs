use std::collections::BTreeMap;
use serde_json::{Map, Value};
use crate::error::Result;
use crate::member::{ClusterMember, MemberData};

/// The operations an orchestrator can perform against a single cluster member.
///
/// None of the operations retry: a failed request is returned as the error of the call.
pub trait PatroniApi {
    /// Hand the leader role over from `leader` to the member named `candidate`.
    fn switchover(&self, leader: &ClusterMember, candidate: &str) -> Result<()>;
    /// Set PostgreSQL parameters in the dynamic configuration.
    fn set_postgres_parameters(&self, member: &ClusterMember, parameters: &BTreeMap<String, String>) -> Result<()>;
    /// Patch the dynamic configuration with `config` as is.
    fn set_config(&self, member: &ClusterMember, config: &Map<String, Value>) -> Result<()>;
    fn get_config(&self, member: &ClusterMember) -> Result<Map<String, Value>>;
    fn get_status(&self, member: &ClusterMember) -> Result<Map<String, Value>>;
    /// Restart PostgreSQL, only if the member reports a pending restart.
    fn restart(&self, member: &ClusterMember) -> Result<()>;
    fn get_member_data(&self, member: &ClusterMember) -> Result<MemberData>;
}
