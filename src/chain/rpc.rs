// src/chain/rpc.rs

//! Minimal JSON-RPC accessor for the Monad Testnet node. The only call this
//! server needs is `eth_getBalance`.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::UpstreamError;

const SERVICE: &str = "Monad RPC";

#[derive(Clone)]
pub struct RpcClient {
    http: Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    /// Native balance of `address` at the latest block, in wei.
    pub async fn native_balance(&self, address: &str) -> Result<u128, UpstreamError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "method": "eth_getBalance",
            "params": [address, "latest"],
            "id": 1
        });

        let res = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                service: SERVICE,
                status,
                body: super::snippet(&body),
            });
        }

        let body: Value = res.json().await.map_err(|source| UpstreamError::Transport {
            service: SERVICE,
            source,
        })?;

        if let Some(err) = body.get("error") {
            return Err(UpstreamError::Rpc {
                code: err.get("code").and_then(|c| c.as_i64()).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown RPC error")
                    .to_string(),
            });
        }

        let hex = body
            .get("result")
            .and_then(|r| r.as_str())
            .ok_or_else(|| UpstreamError::Malformed {
                service: SERVICE,
                detail: format!("missing 'result' field: {}", body),
            })?;

        debug!("eth_getBalance({}) -> {}", address, hex);

        u128::from_str_radix(hex.trim_start_matches("0x"), 16).map_err(|_| {
            UpstreamError::Malformed {
                service: SERVICE,
                detail: format!("unparseable balance '{}'", hex),
            }
        })
    }
}
