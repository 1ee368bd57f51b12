//! Deck export: capability acquisition, environment check and file emission.
//!
//! An [`ExportEngine`] owns validated content, a [`CapabilitySource`] and an
//! [`ExportTarget`]. Each call to [`ExportEngine::export_deck`] produces one
//! complete `.pptx` file or an error, never a partial file.

mod capability;
mod engine;
mod target;

#[cfg(feature = "remote")]
pub use capability::RemoteSource;
pub use capability::{BundledSource, Capability, CapabilitySource, DEFAULT_CAPABILITY_URL};
pub use engine::{ExportEngine, ExportedDeck};
pub use target::{ExportTarget, deck_file_name};
