//! Documentation lookup tools.

mod get_document;
mod get_example;
mod list_topics;
mod search_docs;

pub use get_document::{GetDocumentParams, GetDocumentTool};
pub use get_example::{GetExampleParams, GetExampleTool};
pub use list_topics::{ListTopicsParams, ListTopicsTool};
pub use search_docs::{SearchDocsParams, SearchDocsTool};
