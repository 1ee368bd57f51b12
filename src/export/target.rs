//! Download directory the exported deck is written into.

use crate::common::error::{Error, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// A directory that receives exported decks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    dir: PathBuf,
}

impl ExportTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ensure the directory exists and is a directory.
    pub async fn check(&self) -> Result<()> {
        match tokio::fs::metadata(&self.dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(Error::EnvironmentMismatch(format!(
                "{} is not a directory",
                self.dir.display()
            ))),
            Err(e) => Err(Error::EnvironmentMismatch(format!(
                "download directory {} is unavailable: {e}",
                self.dir.display()
            ))),
        }
    }

    /// Final location of the deck for `product` exported on `date`.
    pub fn deck_path(&self, product: &str, date: NaiveDate) -> PathBuf {
        self.dir.join(deck_file_name(product, date))
    }
}

/// `<product>-Investor-Deck-<YYYY-MM-DD>.pptx`
pub fn deck_file_name(product: &str, date: NaiveDate) -> String {
    format!("{product}-Investor-Deck-{}.pptx", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            deck_file_name("ScaleUp", date),
            "ScaleUp-Investor-Deck-2025-03-07.pptx"
        );
    }

    #[tokio::test]
    async fn test_check_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ExportTarget::new(dir.path()).check().await.is_ok());

        let missing = ExportTarget::new(dir.path().join("missing"));
        assert!(matches!(
            missing.check().await,
            Err(Error::EnvironmentMismatch(_))
        ));

        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let err = ExportTarget::new(&file).check().await.unwrap_err();
        assert!(matches!(err, Error::EnvironmentMismatch(ref m) if m.contains("not a directory")));
    }
}
