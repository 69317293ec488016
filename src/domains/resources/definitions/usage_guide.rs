//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Usage guide for the documentation server (static Markdown).
pub struct UsageGuideResource;

impl ResourceDefinition for UsageGuideResource {
    const URI: &'static str = "docs://guide";
    const NAME: &'static str = "Usage Guide";
    const DESCRIPTION: &'static str = "How to use the documentation tools this server exposes";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE.to_string())
    }
}

const GUIDE: &str = r#"# Mediator Documentation Server

This server answers documentation questions about the mediator framework.

## Tools

- `list_topics`: see every topic the server can resolve.
- `get_document`: fetch one topic in full, e.g. `requests` or `caching`.
- `search_docs`: find a term across all documents, with line context.
- `get_example`: fetch a code example for a feature, e.g. `command`.

When the server runs against a documentation checkout (files mode), two more
tools are available:

- `read_source`: read a repository file by relative path.
- `list_source`: list repository directories and files.

## Resources

- `docs://server/info`: server version and store configuration.
- `docs://guide`: this guide.
- `docs://topic/{key}`: any topic, addressable as a resource.

Start with `list_topics`; every reply points at the next useful call.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_guide_metadata() {
        assert_eq!(UsageGuideResource::URI, "docs://guide");
        assert_eq!(UsageGuideResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_usage_guide_names_every_tool() {
        match UsageGuideResource::content() {
            ResourceContent::Text(text) => {
                for tool in [
                    "list_topics",
                    "get_document",
                    "search_docs",
                    "get_example",
                    "read_source",
                    "list_source",
                ] {
                    assert!(text.contains(tool), "guide is missing {}", tool);
                }
            }
            _ => panic!("Expected Text content"),
        }
    }
}
