//! Export configuration.
//!
//! ```yaml
//! output_dir: ./downloads
//! capability:
//!   kind: remote
//!   url: https://assets.scaleup.in/deck-capability/v3.12.0/theme1.xml
//! content_path: ./content/scaleup.yaml
//! ```
//!
//! Every field is optional. The defaults export the bundled content with the
//! bundled capability into the current directory.

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the presentation-writing capability comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CapabilityConfig {
    /// The capability compiled into the crate
    #[default]
    Bundled,
    /// Fetched over HTTP (requires the `remote` feature)
    Remote { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the deck is written into
    pub output_dir: PathBuf,
    pub capability: CapabilityConfig,
    /// YAML content model replacing the bundled ScaleUp content
    pub content_path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            capability: CapabilityConfig::default(),
            content_path: None,
        }
    }
}

impl ExportConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading export config");
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.capability, CapabilityConfig::Bundled);
    }

    #[test]
    fn test_remote_capability() {
        let yaml = "\
output_dir: /tmp/decks
capability:
  kind: remote
  url: https://example.test/theme.xml
";
        let config = ExportConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/decks"));
        assert_eq!(
            config.capability,
            CapabilityConfig::Remote {
                url: "https://example.test/theme.xml".to_string()
            }
        );
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_unknown_capability_kind() {
        let yaml = "capability:\n  kind: ftp\n";
        assert!(matches!(
            ExportConfig::from_yaml_str(yaml),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.yaml");
        std::fs::write(&path, "content_path: deck.yaml\n").unwrap();

        let config = ExportConfig::from_file(&path).unwrap();
        assert_eq!(config.content_path, Some(PathBuf::from("deck.yaml")));

        let missing = ExportConfig::from_file(dir.path().join("none.yaml"));
        assert!(matches!(missing, Err(Error::Config(_))));
    }
}
