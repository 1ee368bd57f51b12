//! Unified error types for the deck generator.
//!
//! Writer-level errors ([`crate::ooxml::error::OoxmlError`]) convert into the
//! crate-wide [`Error`], so every public operation reports a single type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
