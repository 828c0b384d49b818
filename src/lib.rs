// src/lib.rs

// Re-export modules
pub mod chain;
pub mod config;
pub mod mcp;
pub mod render;

/// Application state shared across all request handlers. Read-only after
/// startup, so clones are cheap and no locking discipline is needed.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// JSON-RPC client for the Monad Testnet node
    pub rpc: chain::rpc::RpcClient,
    /// Magic Eden marketplace API client
    pub marketplace: chain::marketplace::MarketplaceClient,
}
