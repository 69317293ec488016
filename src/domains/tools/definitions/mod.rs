//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod docs;
pub mod source;

pub use docs::{
    GetDocumentParams, GetDocumentTool, GetExampleParams, GetExampleTool, ListTopicsParams,
    ListTopicsTool, SearchDocsParams, SearchDocsTool,
};
pub use source::{ListSourceParams, ListSourceTool, ReadSourceParams, ReadSourceTool};
