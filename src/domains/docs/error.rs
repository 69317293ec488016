//! Docs-domain error types.
//!
//! Only startup-time root validation can fail structurally; every per-call
//! outcome (unknown topic, missing file, empty search) is rendered as text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing a documentation store.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Files mode was requested without a root directory.
    #[error("MCP_DOCS_ROOT must be set when MCP_DOCS_MODE=files")]
    RootNotConfigured,

    /// The configured root cannot be resolved.
    #[error("documentation root '{root}' is not usable: {source}")]
    RootUnavailable {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured root is not a directory.
    #[error("documentation root '{root}' is not a directory")]
    RootNotADirectory { root: PathBuf },
}
