//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server:
//!
//! - **docs**: the documentation core (stores, search, extraction, browsing)
//! - **tools**: the MCP tool surface over the docs domain
//! - **resources**: the MCP resource surface over the docs domain

pub mod docs;
pub mod resources;
pub mod tools;
