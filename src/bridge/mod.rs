//! Transport shims between the slang runtime and operator implementations
//!
//! An operator is handed over as a [`RequestHandler`] capability at startup;
//! the transports only move JSON envelopes to it and back:
//!
//! - **pipe**: one JSON value per input line, one response line per request,
//!   until the input stream closes
//! - **http**: an ephemeral-port HTTP server answering one POST body per
//!   request, announcing its URL on stdout for the parent process
//!
//! Neither transport retries, buffers ahead or authenticates.

pub mod http;
pub mod pipe;

pub use http::BridgeServer;

use serde_json::Value;

/// Operator function applied to every bridged request
pub trait RequestHandler: Send + Sync {
  fn handle(&self, request: Value) -> Value;
}

impl<F> RequestHandler for F
where
  F: Fn(Value) -> Value + Send + Sync,
{
  fn handle(&self, request: Value) -> Value {
    self(request)
  }
}
