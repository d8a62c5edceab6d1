//! HTTP surface: service identity, health, and the per-tenant MCP endpoint.

use crate::error::{ApiError, ToolError};
use crate::invoker;
use crate::tenant::Snapshot;
use crate::tools;
use axum::{
    Extension, Json, Router,
    body::Bytes,
    extract::Path,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "Google Ads MCP Service";

#[derive(Debug)]
pub struct AppState {
    pub snapshot: Snapshot,
}

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub method: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

/// Protocol-level response. Exactly one of `result` / `error` is serialized.
#[derive(Debug, Serialize)]
pub struct McpResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl McpResponse {
    fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    fn err(error: &ToolError) -> Self {
        Self {
            result: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum McpMethod {
    ToolsList,
    ToolsCall,
}

impl McpMethod {
    fn parse(method: &str) -> Option<Self> {
        match method {
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            _ => None,
        }
    }
}

pub fn router(snapshot: Snapshot) -> Router {
    let state = Arc::new(AppState { snapshot });
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/mcp/{client_id}", post(mcp_endpoint))
        .layer(Extension(state))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "status": "active",
        "clients": state.snapshot.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "timestamp": "2025-01-01T00:00:00Z" }))
}

async fn mcp_endpoint(
    Extension(state): Extension<Arc<AppState>>,
    Path(client_id): Path<String>,
    body: Bytes,
) -> Response {
    match handle_mcp(&state, &client_id, &body) {
        Ok(resp) => Json(resp).into_response(),
        Err(e) => {
            tracing::warn!(client_id = %client_id, error = %e, "mcp request rejected");
            e.into_response()
        }
    }
}

/// Gate the tenant, then parse and route the request envelope.
fn handle_mcp(state: &AppState, client_id: &str, body: &[u8]) -> Result<McpResponse, ApiError> {
    let tenant = state.snapshot.resolve(client_id)?;

    let req: McpRequest =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedRequest(e.to_string()))?;
    tracing::info!(client_id = %client_id, method = %req.method, "mcp request");

    let method = McpMethod::parse(&req.method).ok_or(ApiError::UnknownMethod(req.method))?;
    let resp = match method {
        McpMethod::ToolsList => McpResponse::ok(tools::list_tools_json()),
        McpMethod::ToolsCall => match invoker::invoke_params(tenant, &req.params) {
            Ok(v) => McpResponse::ok(v),
            Err(e) => {
                tracing::warn!(client_id = %client_id, error = %e, "tool call failed");
                McpResponse::err(&e)
            }
        },
    };
    Ok(resp)
}
