//! Module for the http transport the client sends its requests through.
//!
//! The client only needs one capability: send a request, get a response back.
//! [`ReqwestTransport`] is the production transport, [`StubTransport`] is a
//! test double that answers from a handler and records what it was sent.
//!
mod structs;
mod functions;
pub mod stub;

pub use structs::*;
pub use stub::{StubReply, StubTransport};
