//! Mediator Documentation MCP Server
//!
//! This crate serves the mediator framework's documentation over the Model
//! Context Protocol: topic lookup, full-text search, code example extraction,
//! and (against a documentation checkout) scoped source-tree browsing.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   path containment checks, the main server, and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **docs**: the documentation stores, search, and extraction
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: data resources that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use mediator_docs_mcp::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
