//! A transport that never touches the network.
//!
//! Every request is recorded and answered by a handler. Response bodies count how often
//! they were read to the end and how often they were closed, and can be told to fail.
//!
use std::collections::VecDeque;
use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::error::TransportCause;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ResponseBody};

/// The answer of a [`StubTransport`] to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
    pub fail_read: bool,
    pub fail_close: bool,
}

type Handler = dyn Fn(&HttpRequest) -> Result<StubReply, String> + Send + Sync;

pub struct StubTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<HttpRequest>>,
    counters: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    body_reads: AtomicUsize,
    closes: AtomicUsize,
}

struct StubBody {
    data: Cursor<Vec<u8>>,
    fail_read: bool,
    fail_close: bool,
    counters: Arc<Counters>,
}

impl StubReply {
    pub fn new(
        status: u16,
        body: &str,
    ) -> Self
    {
        StubReply {
            status,
            body: body.to_string(),
            fail_read: false,
            fail_close: false,
        }
    }
    pub fn ok(body: &str) -> Self {
        StubReply::new(200, body)
    }
    pub fn failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl StubTransport {
    /// A transport that answers every request with the handler.
    /// A handler returning `Err` simulates a request that could not be sent.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<StubReply, String> + Send + Sync + 'static,
    {
        StubTransport {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
            counters: Arc::new(Counters::default()),
        }
    }
    /// A transport that answers every request with the same reply.
    pub fn always(reply: StubReply) -> Self {
        StubTransport::new(move |_| Ok(reply.clone()))
    }
    /// A transport that cannot reach anything.
    pub fn unreachable(message: &str) -> Self {
        let message = message.to_string();
        StubTransport::new(move |_| Err(message.clone()))
    }
    /// A transport that answers requests in order from the list,
    /// once the list is exhausted the requests fail.
    pub fn scripted(replies: Vec<StubReply>) -> Self {
        let replies = Mutex::new(VecDeque::from(replies));
        StubTransport::new(move |_| {
            replies.lock()
                .map_err(|_| "stub reply list poisoned".to_string())?
                .pop_front()
                .ok_or_else(|| "no scripted reply left".to_string())
        })
    }
    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
    /// The number of response bodies that were read up to the end.
    pub fn body_reads(&self) -> usize {
        self.counters.body_reads.load(Ordering::SeqCst)
    }
    /// The number of response bodies that were closed.
    pub fn closes(&self) -> usize {
        self.counters.closes.load(Ordering::SeqCst)
    }
}

impl HttpTransport for StubTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportCause> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let reply = (self.handler)(&request)
            .map_err(|message| io::Error::new(io::ErrorKind::ConnectionRefused, message))?;
        Ok(HttpResponse {
            status: reply.status,
            body: Box::new(StubBody {
                data: Cursor::new(reply.body.into_bytes()),
                fail_read: reply.fail_read,
                fail_close: reply.fail_close,
                counters: self.counters.clone(),
            }),
        })
    }
}

impl Read for StubBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_read {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset while reading body"));
        }
        let read = self.data.read(buf)?;
        if read == 0 && !buf.is_empty() {
            self.counters.body_reads.fetch_add(1, Ordering::SeqCst);
        }
        Ok(read)
    }
}

impl ResponseBody for StubBody {
    fn close(self: Box<Self>) -> io::Result<()> {
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe while closing body"));
        }
        Ok(())
    }
}
