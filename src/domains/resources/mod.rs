//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP server.
//! Resources expose the documentation surface a second way: fixed entries
//! (server info, usage guide) plus a topic template resolved through the
//! shared documentation store.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
