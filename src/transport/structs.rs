//! The structs and traits
//!
use std::io::Read;
use std::io;
use crate::error::TransportCause;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}
/// A single request to the Patroni API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// json encoded body, if any.
    pub body: Option<Vec<u8>>,
}
/// The body of a response.
///
/// The body must be closed explicitly, closing can fail.
pub trait ResponseBody: Read + Send {
    fn close(self: Box<Self>) -> io::Result<()>;
}
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn ResponseBody>,
}
/// The capability to send a request.
///
/// A transport is shared between all calls of a client, and therefore must be safe to use concurrently.
/// The timeout of a request is enforced by the transport.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportCause>;
}
/// The default transport: a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    pub(crate) client: reqwest::blocking::Client,
}
