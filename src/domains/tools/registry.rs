//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::docs::DocStore;

use super::definitions::{
    GetDocumentTool, GetExampleTool, ListSourceTool, ListTopicsTool, ReadSourceTool,
    SearchDocsTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Which tools exist depends on the store: the source-tree tools are only
/// registered when a documentation root is configured.
pub struct ToolRegistry {
    store: Arc<DocStore>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names = vec![
            GetDocumentTool::NAME,
            GetExampleTool::NAME,
            ListTopicsTool::NAME,
            SearchDocsTool::NAME,
        ];
        if self.store.root().is_some() {
            names.push(ListSourceTool::NAME);
            names.push(ReadSourceTool::NAME);
        }
        names
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn all_tools(&self) -> Vec<Tool> {
        let mut tools = vec![
            GetDocumentTool::to_tool(),
            GetExampleTool::to_tool(),
            ListTopicsTool::to_tool(),
            SearchDocsTool::to_tool(),
        ];
        if self.store.root().is_some() {
            tools.push(ListSourceTool::to_tool());
            tools.push(ReadSourceTool::to_tool());
        }
        tools
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let store = self.store.clone();
        match name {
            GetDocumentTool::NAME => GetDocumentTool::http_handler(arguments, store),
            GetExampleTool::NAME => GetExampleTool::http_handler(arguments, store),
            ListTopicsTool::NAME => ListTopicsTool::http_handler(arguments, store),
            SearchDocsTool::NAME => SearchDocsTool::http_handler(arguments, store),
            ListSourceTool::NAME if store.root().is_some() => {
                ListSourceTool::http_handler(arguments, store)
            }
            ReadSourceTool::NAME if store.root().is_some() => {
                ReadSourceTool::http_handler(arguments, store)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}
