// src/mcp/tools.rs

//! Tool definitions exposed by this server. Three read-only queries, each
//! one upstream call plus one rendering pass.

use crate::mcp::registry::{handler_fn, FailureContext, ParamSpec, ToolDefinition, ToolRegistry};
use crate::render;

/// Builds the registry once at startup. Registration order is the order
/// advertised over `tools/list`.
pub fn build_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(ToolDefinition {
        name: "get_balance",
        description: "Get the native MON balance of an address on Monad Testnet.",
        params: vec![ParamSpec {
            name: "address",
            description: "The 0x... address to check.",
            required: true,
        }],
        subject: "balance",
        context: FailureContext::Arg("address"),
        handler: handler_fn(|state, args| async move {
            let address = args.get("address").cloned().unwrap_or_default();
            let wei = state.rpc.native_balance(&address).await?;
            Ok(render::balance_text(&address, wei))
        }),
    });

    registry.register(ToolDefinition {
        name: "get_nft_portfolio",
        description: "List the NFTs held by an address on Monad Testnet.",
        params: vec![ParamSpec {
            name: "address",
            description: "The 0x... address whose NFTs to list.",
            required: true,
        }],
        subject: "NFT portfolio",
        context: FailureContext::Arg("address"),
        handler: handler_fn(|state, args| async move {
            let address = args.get("address").cloned().unwrap_or_default();
            let tokens = state.marketplace.user_tokens(&address).await?;
            Ok(render::portfolio_text(&address, &tokens))
        }),
    });

    registry.register(ToolDefinition {
        name: "get_trending_collections",
        description: "Get the NFT collections currently trending on Monad Testnet.",
        params: vec![],
        subject: "trending collections",
        context: FailureContext::Label("Monad Testnet"),
        handler: handler_fn(|state, _args| async move {
            let mints = state.marketplace.trending_mints().await?;
            Ok(render::trending_text(&mints))
        }),
    });

    registry
}
