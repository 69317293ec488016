//! Source-tree browser tools (files mode only).

mod list_files;
mod read_file;

pub use list_files::{ListSourceParams, ListSourceTool};
pub use read_file::{ReadSourceParams, ReadSourceTool};
