//! The impls and functions
//!
use std::net::{IpAddr, SocketAddr};
use log::*;
use crate::error::{PatroniError, Result};
use crate::member::{ClusterMember, MemberData};
use crate::API_PORT;

impl ClusterMember {
    pub fn new(
        name: &str,
        ip: &str,
    ) -> Self
    {
        ClusterMember {
            name: name.to_string(),
            ip: ip.to_string(),
        }
    }
}

/// Turn the reported address of a member into the base url of its Patroni API,
/// for example `http://10.0.0.1:8008` or `http://[fd00::1]:8008`.
///
/// The address must be an ip literal, hostnames are not resolved.
/// This runs for every call: nothing is cached, so a stale or malformed address
/// is caught before a request is sent.
pub fn api_url(
    member: &ClusterMember,
) -> Result<String>
{
    let ip: IpAddr = member.ip.parse()
        .map_err(|_| PatroniError::InvalidAddress(member.ip.clone()))?;
    // an ipv4 mapped ipv6 address is used as the plain ipv4 address.
    let ip = match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        ip => ip,
    };
    let url = format!("http://{}", SocketAddr::new(ip, API_PORT));
    trace!("member {} resolved to {}", member.name, url);
    Ok(url)
}

impl MemberData {
    pub fn new() -> Self {
        Default::default()
    }
    /// Parse the status document Patroni returns at `/`.
    /// This is a separate function to allow the tests to use it.
    pub fn parse_member_data(
        http_data: &str,
    ) -> Result<MemberData>
    {
        Ok(serde_json::from_str(http_data)?)
    }
    /// Patroni reports the primary as `leader` (newer versions), `master` (older versions) or `primary`.
    pub fn is_leader(&self) -> bool {
        matches!(self.role.as_str(), "leader" | "master" | "primary")
    }
    pub fn is_running(&self) -> bool {
        self.state == "running"
    }
}
