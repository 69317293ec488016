//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Documentation store configuration.
    pub docs: DocsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Which documentation store variant the server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocsMode {
    /// Topics and examples compiled into the binary.
    Embedded,

    /// Topics read from a skill/readme pair under a root directory; adds the
    /// source-tree browser tools.
    Files,
}

/// Configuration for the docs domain.
///
/// The root doubles as the security boundary: every source-tree path is
/// validated against it before any filesystem access. It is fixed at startup
/// and never changes during the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Store variant to run.
    pub mode: DocsMode,

    /// Root directory for the files variant. Required when mode is `Files`.
    pub root: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            mode: DocsMode::Embedded,
            root: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mediator-docs-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            docs: DocsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`, for example
    /// `MCP_SERVER_NAME`, `MCP_DOCS_MODE`, `MCP_DOCS_ROOT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(mode) = std::env::var("MCP_DOCS_MODE") {
            match mode.trim().to_lowercase().as_str() {
                "files" => config.docs.mode = DocsMode::Files,
                "embedded" | "" => config.docs.mode = DocsMode::Embedded,
                other => {
                    warn!("Unknown MCP_DOCS_MODE '{}', using embedded", other);
                }
            }
        }

        if let Ok(root) = std::env::var("MCP_DOCS_ROOT") {
            config.docs.root = Some(PathBuf::from(root));
            info!("Documentation root set to {:?}", config.docs.root);
        } else if config.docs.mode == DocsMode::Files {
            warn!("MCP_DOCS_MODE=files but MCP_DOCS_ROOT is not set; startup will fail");
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_mode_is_embedded() {
        let config = Config::default();
        assert_eq!(config.docs.mode, DocsMode::Embedded);
        assert!(config.docs.root.is_none());
    }

    #[test]
    fn test_docs_mode_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_MODE", "files");
            std::env::set_var("MCP_DOCS_ROOT", "/tmp/docs");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.mode, DocsMode::Files);
        assert_eq!(config.docs.root.as_deref(), Some(std::path::Path::new("/tmp/docs")));
        unsafe {
            std::env::remove_var("MCP_DOCS_MODE");
            std::env::remove_var("MCP_DOCS_ROOT");
        }
    }

    #[test]
    fn test_unknown_docs_mode_falls_back_to_embedded() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_MODE", "carrier-pigeon");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.mode, DocsMode::Embedded);
        unsafe {
            std::env::remove_var("MCP_DOCS_MODE");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "docs-under-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "docs-under-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
