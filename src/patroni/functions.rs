//! The impls and functions
//!
use std::collections::BTreeMap;
use std::sync::Arc;
use log::*;
use serde_json::{Map, Value};
use crate::error::{PatroniError, Result};
use crate::member::{api_url, ClusterMember, MemberData};
use crate::patroni::{Patroni, PatroniApi, PostgresParameters, PostgresParametersRequest, RestartRequest, SwitchoverRequest};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::{CONFIG_PATH, FAILOVER_PATH, RESTART_PATH, STATUS_PATH, TIMEOUT};

const HTTP_OK: u16 = 200;

impl Patroni {
    /// A client using a reqwest transport with the default timeout.
    pub fn new() -> Result<Self> {
        Ok(Patroni::with_transport(Arc::new(ReqwestTransport::new(TIMEOUT)?)))
    }
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Patroni { transport }
    }
    /// Send a POST or PATCH request.
    /// Any status other than 200 is an error carrying the body Patroni returned.
    fn http_post_or_patch(
        &self,
        method: HttpMethod,
        url: String,
        body: Vec<u8>,
    ) -> Result<()>
    {
        let mut response = self.send(HttpRequest::with_body(method, url, body))?;
        let outcome = if response.status != HTTP_OK {
            match response.read_text() {
                Ok(text) => Err(PatroniError::Remote { status: response.status, body: text }),
                Err(e) => Err(PatroniError::transport("could not read response", e)),
            }
        } else {
            Ok(())
        };
        PatroniError::merge_release(outcome, response.close())
    }
    /// Send a GET request, and return the status and the body.
    fn http_read(
        &self,
        url: String,
    ) -> Result<(u16, String)>
    {
        let mut response = self.send(HttpRequest::get(url))?;
        let status = response.status;
        let body = response.read_text()
            .map_err(|e| PatroniError::transport("could not read response", e));
        PatroniError::merge_release(body, response.close())
            .map(|body| (status, body))
    }
    /// Send a GET request, and return the body.
    /// Any status other than 200 is an error, which still carries the body.
    fn http_get(
        &self,
        url: String,
    ) -> Result<String>
    {
        match self.http_read(url)? {
            (HTTP_OK, body) => Ok(body),
            (status, body) => Err(PatroniError::Remote { status, body }),
        }
    }
    fn send(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse>
    {
        debug!("making {} http request: {}", request.method, request.url);
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request)
            .map_err(|e| {
                debug!("could not make {} http request: {}: {}", method, url, e);
                PatroniError::transport("could not make request", e)
            })?;
        if response.status != HTTP_OK {
            debug!("Non success response: {} {} = {}", method, url, response.status);
        }
        Ok(response)
    }
    /// Read a json object from `path`, such as the configuration or the status.
    pub fn get_config_or_status(
        &self,
        member: &ClusterMember,
        path: &str,
    ) -> Result<Map<String, Value>>
    {
        let url = api_url(member)?;
        let body = self.http_get(format!("{}{}", url, path))?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl PatroniApi for Patroni {
    fn switchover(
        &self,
        leader: &ClusterMember,
        candidate: &str,
    ) -> Result<()>
    {
        let body = serde_json::to_vec(&SwitchoverRequest { leader: &leader.name, member: candidate })?;
        let url = api_url(leader)?;
        info!("switchover from {} to {}", leader.name, candidate);
        self.http_post_or_patch(HttpMethod::Post, format!("{}{}", url, FAILOVER_PATH), body)
    }
    fn set_postgres_parameters(
        &self,
        member: &ClusterMember,
        parameters: &BTreeMap<String, String>,
    ) -> Result<()>
    {
        let body = serde_json::to_vec(&PostgresParametersRequest { postgresql: PostgresParameters { parameters } })?;
        let url = api_url(member)?;
        self.http_post_or_patch(HttpMethod::Patch, format!("{}{}", url, CONFIG_PATH), body)
    }
    fn set_config(
        &self,
        member: &ClusterMember,
        config: &Map<String, Value>,
    ) -> Result<()>
    {
        let body = serde_json::to_vec(config)?;
        let url = api_url(member)?;
        self.http_post_or_patch(HttpMethod::Patch, format!("{}{}", url, CONFIG_PATH), body)
    }
    fn get_config(
        &self,
        member: &ClusterMember,
    ) -> Result<Map<String, Value>>
    {
        self.get_config_or_status(member, CONFIG_PATH)
    }
    fn get_status(
        &self,
        member: &ClusterMember,
    ) -> Result<Map<String, Value>>
    {
        self.get_config_or_status(member, STATUS_PATH)
    }
    /// The status check and the restart are two separate requests:
    /// the pending restart flag can change in between, the API offers no conditional restart.
    fn restart(
        &self,
        member: &ClusterMember,
    ) -> Result<()>
    {
        let body = serde_json::to_vec(&RestartRequest { restart_pending: true })?;
        let url = api_url(member)?;
        let status = self.get_status(member)?;
        // absent, false and non-boolean all mean no restart is pending.
        let pending_restart = status.get("pending_restart")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !pending_restart {
            info!("member {} has no pending restart, not restarting", member.name);
            return Ok(());
        }
        info!("member {} has a pending restart, restarting", member.name);
        self.http_post_or_patch(HttpMethod::Post, format!("{}{}", url, RESTART_PATH), body)
    }
    /// Patroni answers `/` with 503 on members that are not the leader,
    /// but the body still holds the member data, so the status is not checked here.
    fn get_member_data(
        &self,
        member: &ClusterMember,
    ) -> Result<MemberData>
    {
        let url = api_url(member)?;
        let (_status, body) = self.http_read(url)?;
        MemberData::parse_member_data(&body)
    }
}
