//! Multi-tenant Google Ads MCP service.
//!
//! Each tenant ("client") is addressed by `POST /mcp/{client_id}` and sees the same
//! fixed tool catalog. Tool results are mocked; there is no upstream integration yet.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod invoker;
pub mod tenant;
pub mod tools;
