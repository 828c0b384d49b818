// src/mcp/registry.rs

//! Tool registry: the capability contract advertised over `tools/list`.
//!
//! Built once at startup and held read-only behind an `Arc` for the rest of
//! the process lifetime. Each entry pairs a name and input schema with the
//! async handler that serves it, plus the subject/context used to phrase the
//! uniform failure text when the handler errors out.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tracing::warn;

use crate::AppState;

/// Validated string arguments handed to a tool handler. Required parameters
/// are guaranteed present and non-empty by the dispatcher.
pub type ToolArgs = HashMap<String, String>;

pub type ToolHandler =
    Arc<dyn Fn(AppState, ToolArgs) -> BoxFuture<'static, Result<String>> + Send + Sync>;

/// Wraps a plain async fn/closure into a [`ToolHandler`].
pub fn handler_fn<F, Fut>(f: F) -> ToolHandler
where
    F: Fn(AppState, ToolArgs) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<String>> + Send + 'static,
{
    Arc::new(move |state, args| Box::pin(f(state, args)))
}

/// One declared string parameter. The exposed surface only takes strings, so
/// the schema constraint is "string, non-empty when required".
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Where the `<context>` part of the failure text comes from.
#[derive(Debug, Clone, Copy)]
pub enum FailureContext {
    /// Interpolate the value of a named argument (e.g. the queried address).
    Arg(&'static str),
    /// A fixed label, for tools that take no arguments.
    Label(&'static str),
}

#[derive(Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamSpec>,
    /// The `<subject>` part of `"Failed to retrieve <subject> for <context>"`.
    pub subject: &'static str,
    pub context: FailureContext,
    pub handler: ToolHandler,
}

impl ToolDefinition {
    /// Renders the JSON Schema object advertised for this tool, properties in
    /// declaration order.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for p in &self.params {
            properties.insert(
                p.name.to_string(),
                json!({ "type": "string", "description": p.description }),
            );
            if p.required {
                required.push(p.name);
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition. Registering the same name twice overwrites the
    /// earlier entry in place (registration order is kept) and logs a warning.
    pub fn register(&mut self, def: ToolDefinition) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.name == def.name) {
            warn!("tool '{}' registered twice, overwriting", def.name);
            *existing = def;
        } else {
            self.tools.push(def);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// All definitions, in registration order.
    pub fn list(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
