//! Get document tool definition.
//!
//! Fetches one documentation topic (embedded store) or section (file-backed
//! store) as text.

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

/// Parameters for the get document tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDocumentParams {
    /// Topic key (embedded mode) or section name (files mode: full, skill,
    /// readme). Defaults to the overview topic / full document.
    #[serde(default)]
    pub topic: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get document tool - returns a documentation topic by key.
pub struct GetDocumentTool;

impl GetDocumentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_document";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a documentation topic by key. Unknown keys return the list of valid topics instead of an error.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(topic = params.topic.as_deref().unwrap_or("(default)")))]
    pub fn execute(params: &GetDocumentParams, store: &DocStore) -> CallToolResult {
        info!("Get document tool called");

        let text = store.get_document(params.topic.as_deref());
        CallToolResult::success(vec![Content::text(text)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<DocStore>,
    ) -> Result<serde_json::Value, String> {
        let topic = arguments
            .get("topic")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let params = GetDocumentParams { topic };
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
            input_schema: cached_schema_for_type::<GetDocumentParams>(),
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
                let params: GetDocumentParams =
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

    fn store() -> DocStore {
        DocStore::from_config(&DocsConfig::default()).unwrap()
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_execute_known_topic() {
        let params = GetDocumentParams {
            topic: Some("caching".to_string()),
        };
        let result = GetDocumentTool::execute(&params, &store());
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(result_text(&result).contains("[Cache"));
    }

    #[test]
    fn test_execute_unknown_topic_is_success_text() {
        let params = GetDocumentParams {
            topic: Some("wombat".to_string()),
        };
        let result = GetDocumentTool::execute(&params, &store());
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(result_text(&result).contains("Valid topics:"));
    }

    #[test]
    fn test_execute_defaults_to_overview() {
        let params = GetDocumentParams { topic: None };
        let result = GetDocumentTool::execute(&params, &store());
        assert!(result_text(&result).contains("# Overview"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "topic": "requests" });
        let result = GetDocumentTool::http_handler(args, Arc::new(store()));
        assert!(result.is_ok());
    }
}
