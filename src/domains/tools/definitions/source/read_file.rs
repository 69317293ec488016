//! Read source tool definition.
//!
//! Reads one file from the documentation repository, scoped to the configured
//! root. Only registered when the server runs in files mode.

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

/// Parameters for the read source tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadSourceParams {
    /// Path of the file to read, relative to the documentation root.
    pub path: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Read source tool - returns one repository file as a fenced code block.
pub struct ReadSourceTool;

impl ReadSourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "read_source";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Read a file from the documentation repository by relative path. Paths outside the repository are rejected; near-miss filenames get suggestions.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &ReadSourceParams, store: &DocStore) -> CallToolResult {
        info!("Read source tool called");

        CallToolResult::success(vec![Content::text(store.read_source(&params.path))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<DocStore>,
    ) -> Result<serde_json::Value, String> {
        let path = arguments
            .get("path")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'path' parameter".to_string())?
            .to_string();

        let params = ReadSourceParams { path };
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
            input_schema: cached_schema_for_type::<ReadSourceParams>(),
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
                let params: ReadSourceParams =
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
