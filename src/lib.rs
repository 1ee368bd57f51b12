//! ScaleUp investor deck generator.
//!
//! This crate turns the ScaleUp pitch content into a PowerPoint (.pptx)
//! presentation. It has two layers:
//!
//! - **Content model** ([`content`]): typed, validated records for every
//!   section of the deck, bundled as a static value or loaded from YAML.
//! - **Deck export engine** ([`export`], [`deck`], [`ooxml`]): acquires the
//!   presentation-writing capability once, builds thirteen slides in a fixed
//!   order and writes the package atomically into a download directory.
//!
//! # Example - Exporting the bundled deck
//!
//! ```no_run
//! use scaleup_deck::{ExportEngine, ExportTarget};
//!
//! # async fn run() -> scaleup_deck::Result<()> {
//! let engine = ExportEngine::bundled(ExportTarget::new("./downloads"))?;
//! let exported = engine.export_deck().await?;
//! println!("wrote {} slides to {}", exported.slide_count, exported.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building the deck in memory
//!
//! ```
//! use scaleup_deck::{content, deck, export::Capability};
//!
//! let capability = Capability::bundled();
//! let pres = deck::build_deck(content::bundled(), &capability).unwrap();
//! assert_eq!(pres.slide_count(), 13);
//! ```

/// Errors, unit conversions and XML escaping shared by every layer.
pub mod common;

/// Export configuration loaded from YAML.
pub mod config;

/// The typed deck content model and the bundled ScaleUp content.
pub mod content;

/// Slide constructors, layout constants and data adapters.
pub mod deck;

/// The export engine: capability acquisition and file emission.
pub mod export;

/// Tracing subscriber setup.
pub mod logging;

/// Office Open XML writer: OPC packaging, PresentationML and DrawingML charts.
pub mod ooxml;

pub use common::error::{Error, Result};
pub use config::{CapabilityConfig, ExportConfig};
pub use content::DeckContent;
pub use export::{Capability, CapabilitySource, ExportEngine, ExportTarget, ExportedDeck};
