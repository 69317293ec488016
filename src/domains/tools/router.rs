//! Tool Router - builds the rmcp ToolRouter from the registered tools.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route. The source-tree tools are only routed when the store runs in files
//! mode, so embedded servers never advertise them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::docs::DocStore;

use super::definitions::{
    GetDocumentTool, GetExampleTool, ListSourceTool, ListTopicsTool, ReadSourceTool,
    SearchDocsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(store: Arc<DocStore>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new()
        .with_route(GetDocumentTool::create_route(store.clone()))
        .with_route(GetExampleTool::create_route(store.clone()))
        .with_route(ListTopicsTool::create_route(store.clone()))
        .with_route(SearchDocsTool::create_route(store.clone()));

    if store.root().is_some() {
        router = router
            .with_route(ListSourceTool::create_route(store.clone()))
            .with_route(ReadSourceTool::create_route(store));
    }

    router
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::{DocsConfig, DocsMode};
    use std::fs;
    use tempfile::TempDir;

    struct TestServer {}

    fn embedded_store() -> Arc<DocStore> {
        Arc::new(DocStore::from_config(&DocsConfig::default()).unwrap())
    }

    fn files_store(dir: &TempDir) -> Arc<DocStore> {
        fs::write(dir.path().join("SKILL.md"), "# skill\n").unwrap();
        Arc::new(
            DocStore::from_config(&DocsConfig {
                mode: DocsMode::Files,
                root: Some(dir.path().to_path_buf()),
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_build_router_embedded() {
        let router: ToolRouter<TestServer> = build_tool_router(embedded_store());
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_document"));
        assert!(names.contains(&"get_example"));
        assert!(names.contains(&"list_topics"));
        assert!(names.contains(&"search_docs"));
        assert!(!names.contains(&"read_source"));
    }

    #[test]
    fn test_build_router_files_adds_source_tools() {
        let dir = TempDir::new().unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(files_store(&dir));
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_source"));
        assert!(names.contains(&"read_source"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router agree in both modes.
        let store = embedded_store();
        let registry = ToolRegistry::new(store.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(store);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }

        let dir = TempDir::new().unwrap();
        let store = files_store(&dir);
        let registry = ToolRegistry::new(store.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(store);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
