//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Fixed resources
//! come from the registry; `docs://topic/{key}` URIs resolve through the
//! shared documentation store, so resource reads and the `get_document` tool
//! always agree.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::domains::docs::DocStore;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};

/// URI prefix for topic resources, completed by a topic key.
const TOPIC_URI_PREFIX: &str = "docs://topic/";

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Shared documentation store backing topic resources.
    store: Arc<DocStore>,

    /// Registry of fixed resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server information resource.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService over the shared documentation store.
    pub fn new(store: Arc<DocStore>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            store,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.register_templates_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register all resource templates from the registry.
    fn register_templates_from_registry(&mut self) {
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        // Topic URIs resolve through the documentation store; unknown topics
        // return the same "valid topics" text the tool returns.
        if let Some(key) = uri.strip_prefix(TOPIC_URI_PREFIX) {
            let text = self.store.get_document(Some(key));
            return Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(text, uri)],
            });
        }

        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "server": "mediator-docs-mcp",
                    "version": env!("CARGO_PKG_VERSION"),
                    "store_mode": self.store.mode_name(),
                    "docs_root": self.store.root().map(|p| p.display().to_string()),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DocsConfig;

    fn service() -> ResourceService {
        let store = Arc::new(DocStore::from_config(&DocsConfig::default()).unwrap());
        ResourceService::new(store)
    }

    fn first_text(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_guide_resource() {
        let result = service().read_resource("docs://guide").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_server_info_reports_store_mode() {
        let result = service().read_resource("docs://server/info").await.unwrap();
        assert!(first_text(&result).contains("\"store_mode\": \"embedded\""));
    }

    #[tokio::test]
    async fn test_read_topic_resource_through_store() {
        let result = service().read_resource("docs://topic/caching").await.unwrap();
        assert!(first_text(&result).contains("[Cache"));
    }

    #[tokio::test]
    async fn test_read_unknown_topic_resource_lists_keys() {
        let result = service().read_resource("docs://topic/wombat").await.unwrap();
        assert!(first_text(&result).contains("Valid topics:"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("docs://nonexistent").await;
        assert!(result.is_err());
    }
}
