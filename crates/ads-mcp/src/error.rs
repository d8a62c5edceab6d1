//! Error types for the ads MCP service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the client configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse json config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("parse yaml config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Tenant gate outcome for a client id that may not be served.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Client not found")]
    NotFound,

    #[error("Client account inactive")]
    Inactive,
}

/// Protocol-level tool failures. These are reported inside the response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid params: tools/call requires a string 'name'")]
    MissingName,

    #[error("{0}")]
    InvalidArguments(String),
}

/// Transport-level failures for the HTTP surface.
///
/// These never produce a response envelope; the body is `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Gate(GateError::NotFound) => StatusCode::NOT_FOUND,
            Self::Gate(GateError::Inactive) => StatusCode::FORBIDDEN,
            Self::UnknownMethod(_) => StatusCode::BAD_REQUEST,
            Self::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
