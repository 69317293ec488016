//! List source tool definition.
//!
//! Lists a directory of the documentation repository: immediate
//! subdirectories plus files matching an optional extension filter,
//! recursively. Only registered when the server runs in files mode.

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

/// Parameters for the list source tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSourceParams {
    /// Directory to list, relative to the documentation root. Defaults to the
    /// root itself.
    #[serde(default)]
    pub dir: Option<String>,

    /// Optional file extension filter, e.g. "cs" or ".md".
    #[serde(default)]
    pub extension: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List source tool - lists repository directories and files.
pub struct ListSourceTool;

impl ListSourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_source";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List a documentation repository directory: immediate subdirectories plus files (recursive, optionally filtered by extension, capped at 100).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(dir = params.dir.as_deref().unwrap_or(".")))]
    pub fn execute(params: &ListSourceParams, store: &DocStore) -> CallToolResult {
        info!("List source tool called");

        let dir = params.dir.as_deref().unwrap_or(".");
        let text = store.list_source(dir, params.extension.as_deref());
        CallToolResult::success(vec![Content::text(text)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<DocStore>,
    ) -> Result<serde_json::Value, String> {
        let dir = arguments
            .get("dir")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let extension = arguments
            .get("extension")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let params = ListSourceParams { dir, extension };
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
            input_schema: cached_schema_for_type::<ListSourceParams>(),
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
                let params: ListSourceParams =
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
