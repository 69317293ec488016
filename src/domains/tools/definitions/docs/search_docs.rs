//! Search docs tool definition.
//!
//! Case-insensitive substring search across every document, reporting matched
//! lines with one line of context on each side.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::docs::DocStore;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the search docs tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDocsParams {
    /// Word or phrase to look for (case-insensitive substring match).
    pub term: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search docs tool - substring search with line context across all documents.
pub struct SearchDocsTool;

impl SearchDocsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_docs";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search all documentation for a term. Returns matching lines with surrounding context, up to 5 matches per document.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(term = %params.term))]
    pub fn execute(params: &SearchDocsParams, store: &DocStore) -> CallToolResult {
        info!("Search docs tool called");

        CallToolResult::success(vec![Content::text(store.search(&params.term))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<DocStore>,
    ) -> Result<serde_json::Value, String> {
        let term = arguments
            .get("term")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'term' parameter".to_string())?
            .to_string();

        let params = SearchDocsParams { term };
        let result = Self::execute(&params, &store);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchDocsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(store: Arc<DocStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: SearchDocsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &store))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
