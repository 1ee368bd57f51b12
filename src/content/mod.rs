//! Deck content model.
//!
//! The content is a tree of plain records, one per deck section. The
//! ScaleUp content is bundled as a process-wide static; alternative content
//! can be loaded from YAML and is validated on load.
//!
//! # Example
//!
//! ```
//! use scaleup_deck::content;
//!
//! let deck = content::bundled();
//! assert_eq!(deck.company.name, "ScaleUp");
//! assert_eq!(deck.roadmap.timeline.len(), 4);
//! ```

mod data;
pub mod model;
mod validate;

pub use model::*;

use crate::common::error::{Error, Result};
use once_cell::sync::Lazy;
use std::path::Path;

static BUNDLED: Lazy<DeckContent> = Lazy::new(data::scaleup);

/// The bundled ScaleUp content, initialised on first access.
pub fn bundled() -> &'static DeckContent {
    &BUNDLED
}

impl DeckContent {
    /// Parse and validate content from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let content: DeckContent = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::InvalidContent(format!("YAML: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate content from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading deck content");
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_is_shared() {
        assert!(std::ptr::eq(bundled(), bundled()));
    }

    #[test]
    fn test_yaml_round_trip_of_bundled_content() {
        let yaml = serde_saphyr::to_string(bundled()).unwrap();
        let loaded = DeckContent::from_yaml_str(&yaml).unwrap();
        assert_eq!(&loaded, bundled());
    }

    #[test]
    fn test_yaml_with_bad_table_is_rejected() {
        let mut content = bundled().clone();
        content.insight.comparison.rows[0].push("extra".to_string());
        let yaml = serde_saphyr::to_string(&content).unwrap();

        let err = DeckContent::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            DeckContent::from_yaml_str("company: [unclosed"),
            Err(Error::InvalidContent(_))
        ));
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(&path, serde_saphyr::to_string(bundled()).unwrap()).unwrap();

        let loaded = DeckContent::from_yaml_file(&path).unwrap();
        assert_eq!(loaded.company.name, "ScaleUp");
    }
}
