//! List topics tool definition.
//!
//! Renders the topic index: grouped keys with summaries for the embedded
//! store, a markdown file listing for the file-backed store.

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

/// Parameters for the list topics tool. The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTopicsParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// List topics tool - returns the index of resolvable documentation keys.
pub struct ListTopicsTool;

impl ListTopicsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_topics";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List every documentation topic this server can resolve, with one-line summaries.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ListTopicsParams, store: &DocStore) -> CallToolResult {
        info!("List topics tool called");

        CallToolResult::success(vec![Content::text(store.list_topics())])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        store: Arc<DocStore>,
    ) -> Result<serde_json::Value, String> {
        let result = Self::execute(&ListTopicsParams::default(), &store);

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
            input_schema: cached_schema_for_type::<ListTopicsParams>(),
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
                let params: ListTopicsParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DocsConfig;

    #[test]
    fn test_execute_lists_all_categories() {
        let store = DocStore::from_config(&DocsConfig::default()).unwrap();
        let result = ListTopicsTool::execute(&ListTopicsParams::default(), &store);

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };

        assert!(text.contains("## Core"));
        assert!(text.contains("- requests:"));
        assert!(text.contains("- source-generation:"));
    }
}
