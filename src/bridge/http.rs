//! HTTP bridge: an ephemeral-port server answering one POST body per request
//!
//! The parent process spawns the bridge and reads a single
//! `http://localhost:{port}` line from its stdout to learn where to send
//! requests. Binding and announcing are separate steps so the port is known
//! before the first request can arrive.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Json, Router, extract::State, routing::post};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::bridge::RequestHandler;

/// One-operator HTTP server on an ephemeral local port
pub struct BridgeServer {
  listener: TcpListener,
  app: Router,
  addr: SocketAddr,
}

impl BridgeServer {
  /// Bind a fresh local port and route every POST to `handler`
  pub async fn bind(handler: Arc<dyn RequestHandler>) -> Result<Self> {
    let app = Router::new()
      .route("/", post(handle_request))
      .with_state(handler);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
      .await
      .context("failed to bind bridge port")?;
    let addr = listener
      .local_addr()
      .context("failed to read bridge address")?;

    Ok(BridgeServer { listener, app, addr })
  }

  pub fn local_addr(&self) -> SocketAddr {
    self.addr
  }

  /// Print the URL line the parent process waits for
  pub fn announce(&self) {
    println!("http://localhost:{}", self.addr.port());
  }

  /// Serve requests until the listener fails or the task is dropped
  pub async fn serve(self) -> Result<()> {
    axum::serve(self.listener, self.app)
      .await
      .context("bridge server failed")?;
    Ok(())
  }
}

async fn handle_request(
  State(handler): State<Arc<dyn RequestHandler>>,
  Json(request): Json<Value>,
) -> Json<Value> {
  Json(handler.handle(request))
}
