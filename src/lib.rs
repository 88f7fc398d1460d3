//! MCP server exposing the Apify RAG Web Browser actor as a single `search`
//! tool. Each call becomes one authenticated GET; the JSON result is passed
//! back verbatim, and failures come back in-band as `"Error: ..."` text.

pub mod catalog;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod mcp_server;
pub mod parsing;
pub mod service;
pub mod types;
pub mod validation;
