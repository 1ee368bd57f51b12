use super::capability::{BundledSource, Capability, CapabilitySource};
use super::target::{ExportTarget, deck_file_name};
use crate::common::error::{Error, Result};
use crate::config::{CapabilityConfig, ExportConfig};
use crate::content::{self, DeckContent};
use crate::deck::build_deck;
use chrono::{Local, NaiveDate};
use futures::future::{BoxFuture, FutureExt, Shared};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Disambiguates temp files of concurrent exports into the same directory.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fetch every concurrent caller awaits; the error is shared, hence the `Arc`.
type FetchFuture = Shared<BoxFuture<'static, std::result::Result<Arc<Capability>, Arc<Error>>>>;

/// The fetch currently in flight, tagged with its attempt number.
type InFlight = Option<(u64, FetchFuture)>;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDeck {
    pub path: PathBuf,
    pub file_name: String,
    pub slide_count: usize,
    pub bytes_written: usize,
}

/// Builds the investor deck and writes it into an [`ExportTarget`].
///
/// The capability is acquired lazily on the first export and shared by every
/// later export of the same engine. Calls made while a fetch is in flight
/// await that same fetch and share its outcome, success or failure. A failed
/// fetch is not cached: the next call made after it settles fetches again.
pub struct ExportEngine {
    content: DeckContent,
    source: Arc<dyn CapabilitySource>,
    capability: OnceCell<Arc<Capability>>,
    in_flight: Mutex<InFlight>,
    attempts: AtomicU64,
    target: ExportTarget,
    date: Option<NaiveDate>,
}

impl std::fmt::Debug for ExportEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportEngine")
            .field("company", &self.content.company.name)
            .field("target", &self.target)
            .field("capability_loaded", &self.capability.get().is_some())
            .field("date", &self.date)
            .finish()
    }
}

impl ExportEngine {
    /// Create an engine for `content`, rejecting content that fails validation.
    pub fn new(
        content: DeckContent,
        source: impl CapabilitySource + 'static,
        target: ExportTarget,
    ) -> Result<Self> {
        content.validate()?;
        Ok(Self {
            content,
            source: Arc::new(source),
            capability: OnceCell::new(),
            in_flight: Mutex::new(None),
            attempts: AtomicU64::new(0),
            target,
            date: None,
        })
    }

    /// Engine for the bundled ScaleUp content and the bundled capability.
    pub fn bundled(target: ExportTarget) -> Result<Self> {
        Self::new(content::bundled().clone(), BundledSource, target)
    }

    /// Engine described by an [`ExportConfig`].
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        let content = match config.content_path {
            Some(ref path) => DeckContent::from_yaml_file(path)?,
            None => content::bundled().clone(),
        };
        let target = ExportTarget::new(&config.output_dir);

        match config.capability {
            CapabilityConfig::Bundled => Self::new(content, BundledSource, target),
            #[cfg(feature = "remote")]
            CapabilityConfig::Remote { ref url } => {
                Self::new(content, super::capability::RemoteSource::new(url), target)
            },
            #[cfg(not(feature = "remote"))]
            CapabilityConfig::Remote { ref url } => Err(Error::Config(format!(
                "capability url {url} needs the `remote` feature"
            ))),
        }
    }

    /// Stamp exported files with `date` instead of today's local date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn content(&self) -> &DeckContent {
        &self.content
    }

    pub fn target(&self) -> &ExportTarget {
        &self.target
    }

    /// The memoized capability, fetching it on first use.
    pub async fn capability(&self) -> Result<Arc<Capability>> {
        if let Some(capability) = self.capability.get() {
            tracing::debug!(origin = capability.origin(), "capability cache hit");
            return Ok(Arc::clone(capability));
        }

        let (attempt, fetch) = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            // A fetch may have settled while this call waited for the lock.
            if let Some(capability) = self.capability.get() {
                return Ok(Arc::clone(capability));
            }
            match in_flight.as_ref() {
                Some((attempt, fetch)) => {
                    tracing::debug!(attempt, "joining in-flight capability fetch");
                    (*attempt, fetch.clone())
                },
                None => {
                    let attempt = self.attempts.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(attempt, "capability cache miss, fetching");
                    let source = Arc::clone(&self.source);
                    let fetch = async move { source.fetch().await.map(Arc::new).map_err(Arc::new) }
                        .boxed()
                        .shared();
                    *in_flight = Some((attempt, fetch.clone()));
                    (attempt, fetch)
                },
            }
        };

        let outcome = fetch.await;

        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(ref capability) = outcome {
            let _ = self.capability.set(Arc::clone(capability));
        }
        if in_flight.as_ref().is_some_and(|&(current, _)| current == attempt) {
            *in_flight = None;
        }
        drop(in_flight);

        outcome.map_err(|e| {
            tracing::warn!(error = %e, attempt, "capability unavailable");
            shared_error(&e)
        })
    }

    /// File name an export started now would produce.
    pub fn file_name(&self) -> String {
        deck_file_name(&self.content.company.name, self.export_date())
    }

    /// Build the deck and write it into the target directory.
    ///
    /// The file appears under its final name only once it is complete.
    #[tracing::instrument(skip(self), fields(target = %self.target.dir().display()))]
    pub async fn export_deck(&self) -> Result<ExportedDeck> {
        self.target.check().await?;
        let capability = self.capability().await?;

        let date = self.export_date();
        let file_name = deck_file_name(&self.content.company.name, date);
        tracing::info!(file = %file_name, origin = capability.origin(), "exporting deck");

        let pres = build_deck(&self.content, &capability)?;
        let bytes = capability.write_to_bytes(&pres)?;

        let path = self.target.deck_path(&self.content.company.name, date);
        write_atomically(&path, &bytes).await?;

        tracing::info!(
            file = %file_name,
            slides = pres.slide_count(),
            bytes = bytes.len(),
            "deck exported"
        );
        Ok(ExportedDeck {
            path,
            file_name,
            slide_count: pres.slide_count(),
            bytes_written: bytes.len(),
        })
    }

    fn export_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Owned copy of an error every waiter on a fetch received.
fn shared_error(error: &Error) -> Error {
    match error {
        Error::CapabilityUnavailable(msg) => Error::CapabilityUnavailable(msg.clone()),
        Error::EnvironmentMismatch(msg) => Error::EnvironmentMismatch(msg.clone()),
        other => Error::CapabilityUnavailable(other.to_string()),
    }
}

/// Write to a hidden sibling, then rename over `path`.
async fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Other(format!("invalid output path {}", path.display())))?;
    let temp = path.with_file_name(format!(
        ".{file_name}.{}-{}.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    if let Err(e) = tokio::fs::write(&temp, bytes).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::{Cursor, Read};
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    /// Counts fetches; fails the first `failures` of them.
    struct CountingSource {
        fetches: Arc<AtomicUsize>,
        failures: usize,
    }

    impl CountingSource {
        fn new(failures: usize) -> (Self, Arc<AtomicUsize>) {
            let fetches = Arc::new(AtomicUsize::new(0));
            let source = Self {
                fetches: Arc::clone(&fetches),
                failures,
            };
            (source, fetches)
        }
    }

    #[async_trait]
    impl CapabilitySource for CountingSource {
        async fn fetch(&self) -> Result<Capability> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if n < self.failures {
                return Err(Error::CapabilityUnavailable("network down".to_string()));
            }
            Ok(Capability::bundled())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn make_engine(dir: &Path, failures: usize) -> (ExportEngine, Arc<AtomicUsize>) {
        let (source, fetches) = CountingSource::new(failures);
        let engine = ExportEngine::new(
            content::bundled().clone(),
            source,
            ExportTarget::new(dir),
        )
        .unwrap()
        .with_date(date());
        (engine, fetches)
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, fetches) = make_engine(dir.path(), 0);

        let exported = engine.export_deck().await.unwrap();
        assert_eq!(exported.file_name, "ScaleUp-Investor-Deck-2025-01-15.pptx");
        assert_eq!(exported.path, dir.path().join(&exported.file_name));
        assert_eq!(exported.slide_count, 13);
        assert_eq!(
            std::fs::metadata(&exported.path).unwrap().len() as usize,
            exported.bytes_written
        );
        assert_eq!(dir_entries(dir.path()), vec![exported.file_name.clone()]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_package_is_well_formed() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, _) = make_engine(dir.path(), 0);
        let exported = engine.export_deck().await.unwrap();

        let bytes = std::fs::read(&exported.path).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();

        let slides = names
            .iter()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count();
        assert_eq!(slides, 13);
        let charts = names.iter().filter(|n| n.starts_with("ppt/charts/")).count();
        assert_eq!(charts, 4);
        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.iter().any(|n| n == required), "missing {required}");
        }

        for name in names.iter().filter(|n| n.ends_with(".xml") || n.ends_with(".rels")) {
            let mut xml = String::new();
            archive
                .by_name(name)
                .unwrap()
                .read_to_string(&mut xml)
                .unwrap();
            assert_well_formed(name, &xml);
        }
    }

    fn assert_well_formed(name: &str, xml: &str) {
        let mut reader = quick_xml::Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("{name} is not well-formed: {e}"),
            }
        }
    }

    #[tokio::test]
    async fn test_control_characters_in_content_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = content::bundled().clone();
        content.problem.title = "Bad\u{1}title".to_string();
        let engine = ExportEngine::new(content, BundledSource, ExportTarget::new(dir.path()))
            .unwrap()
            .with_date(date());
        let exported = engine.export_deck().await.unwrap();

        let bytes = std::fs::read(&exported.path).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("ppt/slides/slide3.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert!(xml.contains("Badtitle"));
        assert!(!xml.contains('\u{1}'));
        assert_well_formed("ppt/slides/slide3.xml", &xml);
    }

    #[tokio::test]
    async fn test_concurrent_exports_fetch_once() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, fetches) = make_engine(dir.path(), 0);

        let (a, b, c) = tokio::join!(
            engine.export_deck(),
            engine.export_deck(),
            engine.capability()
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        engine.export_deck().await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(dir_entries(dir.path()).len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_produces_no_file_and_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, fetches) = make_engine(dir.path(), 1);

        let err = engine.export_deck().await.unwrap_err();
        assert!(matches!(err, Error::CapabilityUnavailable(_)));
        assert!(dir_entries(dir.path()).is_empty());
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        let exported = engine.export_deck().await.unwrap();
        assert!(exported.path.exists());
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_failing_exports_share_one_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, fetches) = make_engine(dir.path(), usize::MAX);

        let (a, b, c) = tokio::join!(
            engine.export_deck(),
            engine.export_deck(),
            engine.export_deck()
        );
        for result in [a, b, c] {
            assert!(matches!(
                result,
                Err(Error::CapabilityUnavailable(ref m)) if m == "network down"
            ));
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(dir_entries(dir.path()).is_empty());

        // The failure is not remembered: the next call starts a new fetch.
        assert!(engine.capability().await.is_err());
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_target_fails_before_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let (engine, fetches) = make_engine(&dir.path().join("nowhere"), 0);

        let err = engine.export_deck().await.unwrap_err();
        assert!(matches!(err, Error::EnvironmentMismatch(_)));
        assert_eq!(fetches.load(Ordering::SeqCst), 0);

        let file = dir.path().join("deck.pptx");
        std::fs::write(&file, b"").unwrap();
        let (engine, fetches) = make_engine(&file, 0);
        assert!(matches!(
            engine.export_deck().await,
            Err(Error::EnvironmentMismatch(_))
        ));
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_content_rejected_at_construction() {
        let mut content = content::bundled().clone();
        content.unit_economics.cac.rows[0].pop();
        let err = ExportEngine::new(content, BundledSource, ExportTarget::new("."))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
    }

    #[test]
    fn test_file_name_uses_override_date() {
        let (engine, _) = make_engine(Path::new("."), 0);
        assert_eq!(engine.file_name(), "ScaleUp-Investor-Deck-2025-01-15.pptx");
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            output_dir: dir.path().to_path_buf(),
            ..ExportConfig::default()
        };
        let engine = ExportEngine::from_config(&config).unwrap();
        assert_eq!(engine.target().dir(), dir.path());
        assert_eq!(engine.content(), content::bundled());
    }

    #[cfg(not(feature = "remote"))]
    #[test]
    fn test_remote_config_needs_feature() {
        let config = ExportConfig {
            capability: CapabilityConfig::Remote {
                url: "https://example.test/theme.xml".to_string(),
            },
            ..ExportConfig::default()
        };
        assert!(matches!(
            ExportEngine::from_config(&config),
            Err(Error::Config(_))
        ));
    }
}
