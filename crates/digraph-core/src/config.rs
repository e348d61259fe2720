//! Graph configuration
//!
//! Configuration is a TOML document with two optional tables:
//!
//! ```toml
//! [graph]
//! removal_policy = "cascade"   # or "retain"
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What happens to edges pointing at a vertex when that vertex is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Remove every edge whose destination is the removed vertex
    #[default]
    Cascade,
    /// Leave such edges in place; they dangle until removed explicitly
    Retain,
}

/// `[graph]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub removal_policy: RemovalPolicy,
}

/// `[logging]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or full filter directive (e.g. `debug`, `digraph_core=trace`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON log lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub graph: StoreSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GraphConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(removal_policy = ?config.graph.removal_policy, "loaded graph config");
        Ok(config)
    }

    /// Removal policy for graphs built from this configuration
    pub fn removal_policy(&self) -> RemovalPolicy {
        self.graph.removal_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.removal_policy(), RemovalPolicy::Cascade);
        assert_eq!(config.logging.level, None);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GraphConfig::from_toml_str("").unwrap();
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = GraphConfig::from_toml_str(
            r#"
[graph]
removal_policy = "retain"

[logging]
level = "trace"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.removal_policy(), RemovalPolicy::Retain);
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = GraphConfig::from_toml_str("[graph]\nremoval_policy = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        fs::write(&path, "[graph]\nremoval_policy = \"cascade\"\n").unwrap();

        let config = GraphConfig::load(&path).unwrap();
        assert_eq!(config.removal_policy(), RemovalPolicy::Cascade);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = GraphConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
