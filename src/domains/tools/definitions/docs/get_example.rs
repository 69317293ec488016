//! Get example tool definition.
//!
//! Returns a code example for a feature key: a literal snippet from the
//! embedded table, or fenced blocks mined out of the skill document.

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

/// Parameters for the get example tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetExampleParams {
    /// Feature key, e.g. request, command, event, stream, caching,
    /// validation, http, middleware.
    pub feature: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get example tool - returns code examples for a mediator feature.
pub struct GetExampleTool;

impl GetExampleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_example";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a code example for a mediator feature such as request, command, event, stream, caching, validation, http, or middleware.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(feature = %params.feature))]
    pub fn execute(params: &GetExampleParams, store: &DocStore) -> CallToolResult {
        info!("Get example tool called");

        CallToolResult::success(vec![Content::text(store.get_example(&params.feature))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<DocStore>,
    ) -> Result<serde_json::Value, String> {
        let feature = arguments
            .get("feature")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'feature' parameter".to_string())?
            .to_string();

        let params = GetExampleParams { feature };
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
            input_schema: cached_schema_for_type::<GetExampleParams>(),
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
                let params: GetExampleParams =
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
    fn test_execute_known_feature() {
        let params = GetExampleParams {
            feature: "middleware".to_string(),
        };
        let result = GetExampleTool::execute(&params, &store());
        assert!(result_text(&result).contains("IRequestMiddleware"));
    }

    #[test]
    fn test_execute_unknown_feature_lists_valid_keys() {
        let params = GetExampleParams {
            feature: "teleport".to_string(),
        };
        let result = GetExampleTool::execute(&params, &store());
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(result_text(&result).contains("Valid features:"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "feature": "caching" });
        let result = GetExampleTool::http_handler(args, Arc::new(store()));
        assert!(result.is_ok());
    }
}
