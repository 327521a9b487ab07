//! Round-trip tests for the bridge transports

use std::sync::Arc;

use anyhow::Result;
use serde_json::{Value, json};

use slang_dist::bridge::{BridgeServer, RequestHandler};

#[tokio::test]
async fn test_http_bridge_round_trip() -> Result<()> {
  let handler: Arc<dyn RequestHandler> = Arc::new(|request: Value| json!({ "echo": request }));

  let server = BridgeServer::bind(handler).await?;
  let url = format!("http://localhost:{}", server.local_addr().port());
  tokio::spawn(server.serve());

  let client = reqwest::Client::new();
  let response = client.post(&url).json(&json!({ "a": 1 })).send().await?;

  assert_eq!(response.status(), 200);
  let body: Value = response.json().await?;
  assert_eq!(body, json!({ "echo": { "a": 1 } }));

  Ok(())
}

#[tokio::test]
async fn test_http_bridge_answers_repeated_requests() -> Result<()> {
  let handler: Arc<dyn RequestHandler> =
    Arc::new(|request: Value| json!(request.as_i64().unwrap_or(0) + 1));

  let server = BridgeServer::bind(handler).await?;
  let url = format!("http://localhost:{}", server.local_addr().port());
  tokio::spawn(server.serve());

  let client = reqwest::Client::new();
  for n in 0..3 {
    let body: Value = client.post(&url).json(&json!(n)).send().await?.json().await?;
    assert_eq!(body, json!(n + 1));
  }

  Ok(())
}

#[tokio::test]
async fn test_each_bridge_gets_its_own_port() -> Result<()> {
  let first = BridgeServer::bind(Arc::new(|request: Value| request)).await?;
  let second = BridgeServer::bind(Arc::new(|request: Value| request)).await?;

  assert_ne!(first.local_addr().port(), second.local_addr().port());
  Ok(())
}
