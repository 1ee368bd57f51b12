//! The presentation-writing capability and the sources it is acquired from.

use crate::common::error::{Error, Result};
use crate::ooxml::pptx::template::DEFAULT_THEME_XML;
use crate::ooxml::pptx::{Presentation, write_package};
use async_trait::async_trait;
use chrono::Utc;

/// Versioned location of the remote theme part.
pub const DEFAULT_CAPABILITY_URL: &str =
    "https://assets.scaleup.in/deck-capability/v3.12.0/theme1.xml";

/// Marker every usable theme part carries.
const THEME_ENTRY_POINT: &str = "<a:theme";

/// A loaded presentation writer: the package serializer bound to a theme part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    theme_xml: String,
    origin: String,
}

impl Capability {
    /// The capability shipped with the crate.
    pub fn bundled() -> Self {
        Self {
            theme_xml: DEFAULT_THEME_XML.to_string(),
            origin: "bundled".to_string(),
        }
    }

    /// Wrap a theme part obtained elsewhere.
    ///
    /// Fails with [`Error::CapabilityUnavailable`] if the document does not
    /// look like a DrawingML theme.
    pub fn from_theme(theme_xml: impl Into<String>, origin: impl Into<String>) -> Result<Self> {
        let theme_xml = theme_xml.into();
        let origin = origin.into();
        if !theme_xml.contains(THEME_ENTRY_POINT) {
            return Err(Error::CapabilityUnavailable(format!(
                "{origin} did not provide a theme part"
            )));
        }
        Ok(Self { theme_xml, origin })
    }

    /// Where this capability was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn theme_xml(&self) -> &str {
        &self.theme_xml
    }

    /// An empty widescreen presentation.
    pub fn new_presentation(&self) -> Presentation {
        Presentation::new()
    }

    /// Serialize `pres` into .pptx bytes using this capability's theme.
    pub fn write_to_bytes(&self, pres: &Presentation) -> Result<Vec<u8>> {
        Ok(write_package(pres, &self.theme_xml, Utc::now())?)
    }
}

/// Something that can produce a [`Capability`].
///
/// Implementations may perform I/O. The export engine calls `fetch` at most
/// once per successful acquisition and caches the result.
#[async_trait]
pub trait CapabilitySource: Send + Sync {
    async fn fetch(&self) -> Result<Capability>;
}

/// Source for the capability compiled into the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

#[async_trait]
impl CapabilitySource for BundledSource {
    async fn fetch(&self) -> Result<Capability> {
        Ok(Capability::bundled())
    }
}

/// Source that downloads the theme part over HTTP.
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "remote")]
impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "remote")]
impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_CAPABILITY_URL)
    }
}

#[cfg(feature = "remote")]
#[async_trait]
impl CapabilitySource for RemoteSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Capability> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::CapabilityUnavailable(format!(
                "{} returned HTTP {}",
                self.url,
                status.as_u16()
            )));
        }
        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "downloaded theme part");
        Capability::from_theme(body, self.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_capability_has_theme() {
        let capability = Capability::bundled();
        assert!(capability.theme_xml().contains(THEME_ENTRY_POINT));
        assert_eq!(capability.origin(), "bundled");
    }

    #[test]
    fn test_from_theme_rejects_other_documents() {
        let err = Capability::from_theme("<html>not found</html>", "https://example.test")
            .unwrap_err();
        assert!(matches!(err, Error::CapabilityUnavailable(ref m) if m.contains("example.test")));

        let ok = Capability::from_theme(DEFAULT_THEME_XML, "mirror").unwrap();
        assert_eq!(ok.origin(), "mirror");
    }

    #[test]
    fn test_capability_url_is_versioned() {
        assert!(DEFAULT_CAPABILITY_URL.starts_with("https://"));
        assert!(DEFAULT_CAPABILITY_URL.contains("/v3."));
    }

    #[tokio::test]
    async fn test_bundled_source() {
        let capability = BundledSource.fetch().await.unwrap();
        assert_eq!(capability, Capability::bundled());
    }

    #[test]
    fn test_write_empty_presentation() {
        let capability = Capability::bundled();
        let bytes = capability
            .write_to_bytes(&capability.new_presentation())
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
