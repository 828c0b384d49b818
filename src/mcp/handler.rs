// src/mcp/handler.rs

//! MCP request dispatcher.
//!
//! Routes `initialize`, `tools/list`, and `tools/call` to the registry.
//! Argument validation happens here, before any handler runs; an unknown tool
//! or a bad argument is a protocol-level error. Once a handler starts, its
//! failures are caught and re-encoded as an ordinary text envelope with a
//! `"Failed to retrieve ..."` message, so the calling agent always sees
//! readable prose.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::mcp::protocol::{error_codes, Request, Response};
use crate::mcp::registry::{FailureContext, ToolArgs, ToolDefinition, ToolRegistry};
use crate::AppState;

/// Main entry point for every parsed request, regardless of transport.
/// Returns `None` for notifications.
pub async fn handle_mcp_request(
    req: Request,
    registry: &ToolRegistry,
    state: AppState,
) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req, registry),
        "tools/call" => handle_tool_call(req, registry, state).await,
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

fn handle_initialize(req: &Request) -> Response {
    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": {
                "name": "monad_mcp",
                "version": env!("CARGO_PKG_VERSION"),
            },
            "protocolVersion": "2025-06-18",
            "capabilities": { "tools": { "listChanged": false } },
            "instructions":
                "Read-only Monad Testnet queries: MON balances, NFT portfolios, and trending NFT collections.",
        }),
    )
}

fn handle_tools_list(req: &Request, registry: &ToolRegistry) -> Response {
    let tools: Vec<Value> = registry
        .list()
        .iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.description,
                "inputSchema": t.input_schema(),
            })
        })
        .collect();
    Response::success(req.id.clone(), json!({ "tools": tools }))
}

async fn handle_tool_call(req: Request, registry: &ToolRegistry, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let def = match registry.get(tool_name) {
        Some(def) => def,
        None => {
            return Response::error(
                req.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", tool_name),
            )
        }
    };

    let empty_args = json!({});
    let raw_args = params.get("arguments").unwrap_or(&empty_args);

    let args = match validate_args(def, raw_args) {
        Ok(args) => args,
        Err(invalid) => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                format!(
                    "Missing or invalid required argument(s): {}",
                    invalid
                        .iter()
                        .map(|f| format!("'{}'", f))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )
        }
    };

    let context = match def.context {
        FailureContext::Arg(name) => args.get(name).cloned().unwrap_or_default(),
        FailureContext::Label(label) => label.to_string(),
    };

    // Handler failures stop here. The envelope shape is identical for success
    // and failure; callers detect failure by the text prefix.
    let text = match (def.handler)(state, args).await {
        Ok(text) => text,
        Err(e) => {
            warn!("tool '{}' failed: {:#}", tool_name, e);
            format!(
                "Failed to retrieve {} for {}. Error: {}",
                def.subject, context, e
            )
        }
    };

    Response::success(
        req.id,
        json!({ "content": [{ "type": "text", "text": text }] }),
    )
}

/// Checks the raw `arguments` object against the tool's declared parameters.
/// Required parameters must be present, string-typed, and non-empty. Declared
/// optional parameters are carried through when present; undeclared keys are
/// ignored.
fn validate_args(def: &ToolDefinition, raw: &Value) -> Result<ToolArgs, Vec<String>> {
    let mut args = ToolArgs::new();
    let mut invalid = Vec::new();

    for param in &def.params {
        match raw.get(param.name).and_then(|v| v.as_str()) {
            Some(s) if !s.is_empty() => {
                args.insert(param.name.to_string(), s.to_string());
            }
            _ if param.required => invalid.push(param.name.to_string()),
            _ => {}
        }
    }

    if invalid.is_empty() {
        Ok(args)
    } else {
        Err(invalid)
    }
}
