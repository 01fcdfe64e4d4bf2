//! Pokédex MCP Server Library
//!
//! This crate provides a stateless Model Context Protocol (MCP) server
//! exposing request/response tools backed by PokéAPI.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients (calculator,
//!     Pokémon lookups, brand webhook, environment debug)
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
pub use domains::tools::ToolError;
