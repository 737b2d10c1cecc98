//! The impls and functions
//!
use std::{fmt, io, io::Read, time::Duration};
use reqwest::header::CONTENT_TYPE;
use crate::error::{PatroniError, Result, TransportCause};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, ResponseBody};

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        HttpRequest { method: HttpMethod::Get, url, body: None }
    }
    pub fn with_body(
        method: HttpMethod,
        url: String,
        body: Vec<u8>,
    ) -> Self
    {
        HttpRequest { method, url, body: Some(body) }
    }
    /// The body as text, mostly useful in tests and for logging.
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(|body| String::from_utf8_lossy(body).into_owned())
    }
}

impl HttpResponse {
    /// Read the remaining body as text.
    pub fn read_text(&mut self) -> io::Result<String> {
        let mut text = String::new();
        self.body.read_to_string(&mut text)?;
        Ok(text)
    }
    pub fn close(self) -> io::Result<()> {
        self.body.close()
    }
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PatroniError::ClientBuild)?;
        Ok(ReqwestTransport { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportCause> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }
        let response = builder.send()?;
        Ok(HttpResponse {
            status: response.status().as_u16(),
            body: Box::new(ReqwestBody(response)),
        })
    }
}

struct ReqwestBody(reqwest::blocking::Response);

impl Read for ReqwestBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl ResponseBody for ReqwestBody {
    // dropping the response releases the connection, which cannot fail.
    fn close(self: Box<Self>) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}
