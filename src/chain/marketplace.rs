// src/chain/marketplace.rs

//! Magic Eden (Reservoir-style) marketplace accessor for Monad Testnet.
//! Two read endpoints: tokens owned by an address, and trending mints.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{TrendingMintsResponse, UserTokensResponse};
use super::UpstreamError;

const SERVICE: &str = "marketplace API";

#[derive(Clone)]
pub struct MarketplaceClient {
    http: Client,
    base: String,
}

impl MarketplaceClient {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn user_tokens(&self, address: &str) -> Result<UserTokensResponse, UpstreamError> {
        let url = format!("{}/users/{}/tokens/v7", self.base, address);
        self.get_json(&url).await
    }

    pub async fn trending_mints(&self) -> Result<TrendingMintsResponse, UpstreamError> {
        let url = format!("{}/collections/trending-mints/v1", self.base);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        debug!("GET {}", url);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| UpstreamError::Transport {
            service: SERVICE,
            source,
        })?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: SERVICE,
                status,
                body: super::snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed {
            service: SERVICE,
            detail: e.to_string(),
        })
    }
}
