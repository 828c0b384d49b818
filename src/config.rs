// src/config.rs

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,

    /// JSON-RPC endpoint of a Monad Testnet node.
    pub monad_rpc_url: String,
    /// Base URL of the Magic Eden RTP API for Monad Testnet.
    pub magiceden_api_url: String,

    /// Bound on every outbound upstream call. A hung node or marketplace
    /// surfaces as an ordinary tool failure instead of blocking forever.
    pub upstream_timeout_secs: u64,
}

const DEFAULT_RPC_URL: &str = "https://testnet-rpc.monad.xyz";
const DEFAULT_MAGICEDEN_URL: &str = "https://api-mainnet.magiceden.dev/v3/rtp/monad-testnet";

impl Config {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            monad_rpc_url: env::var("MONAD_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            magiceden_api_url: env::var("MAGICEDEN_API_URL")
                .unwrap_or_else(|_| DEFAULT_MAGICEDEN_URL.to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("UPSTREAM_TIMEOUT_SECS must be a valid number")?,
        })
    }
}
